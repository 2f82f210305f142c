pub mod api;
pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod lyrics;
pub mod page;
pub mod paths;

pub use config::Config;
pub use error::{Error, Result};
pub use lyrics::fetch_lyrics;
