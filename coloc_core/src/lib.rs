pub mod error;
pub mod filter;
pub mod page;
pub mod predicate;

pub use error::{Error, FieldError, Result};
