//! Cross-cutting helpers: preference storage, platform glue and timers.

pub mod platform;
pub mod storage;
pub mod timing;
