pub mod hooks;
pub mod json_seed;
pub mod plugins;
pub mod seed;

pub use hooks::*;
pub use json_seed::*;
pub use plugins::*;
pub use seed::*;
