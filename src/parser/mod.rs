pub mod errors;
pub mod expressions;
pub mod statements;

pub use errors::*;
pub use expressions::{Recognizer, MAX_NESTING_DEPTH};
pub use statements::*;
