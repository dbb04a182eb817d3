//! Small interactive pieces of the landing page. Each keeps an explicit state
//! object; markup attributes (`aria-*`, classes) are rendered from it.

pub mod accordion;
pub mod chips;
pub mod fab;
pub mod nav;
pub mod reveal;
pub mod tabs;
pub mod tilt;
pub mod toast;

pub use accordion::{Accordion, AccordionItem};
pub use chips::{Chip, ChipPicker};
pub use fab::StickyFab;
pub use nav::NavState;
pub use reveal::Reveal;
pub use tabs::{TabList, TabsState};
pub use tilt::TiltCard;
pub use toast::{show_toast, Toast, ToastKind, ToastState};
