pub mod aggregate;
pub mod entry;
pub mod error;
pub mod ledger;
pub mod validator;

pub use aggregate::*;
pub use entry::*;
pub use error::*;
pub use ledger::*;
pub use validator::*;
