pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
pub mod test_utils;

pub use application::*;
pub use domain::*;
pub use infrastructure::*;
