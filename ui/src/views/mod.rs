//! Page views shared by the web and desktop shells.

pub(crate) mod contact;
mod footer;
mod landing;
mod not_found;
pub(crate) mod offer;
mod shell;

pub use landing::Landing;
pub use not_found::NotFoundView;
pub use shell::SiteShell;
