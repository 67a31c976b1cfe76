pub mod error;
pub mod logging;
pub mod models;

pub use error::{ErrorSink, ParserError};
pub use logging::{init, init_default, init_from_args};
