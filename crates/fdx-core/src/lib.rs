pub mod error;
pub mod query;
pub mod types;

pub use error::FdxError;
pub use query::*;
pub use types::*;
