pub mod app;
pub mod cli;
pub mod config;
pub mod presenter;
pub mod report;

pub use app::*;
pub use cli::*;
pub use config::*;
pub use presenter::*;
pub use report::*;
