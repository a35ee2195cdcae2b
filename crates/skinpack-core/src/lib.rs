pub mod config;
pub mod error;
pub mod fetch;
pub mod i18n;
pub mod logging;
pub mod mcid;
pub mod pack;
pub mod save;
pub mod ui;

pub use error::SkinpackError;
