//! Exceptions that remember every place they were thrown from and rethrown
//! through, and render that history as a readable traceback.

pub mod bindings;
pub mod diagnostics;
pub mod errors;
pub mod exception;
pub mod hierarchy;
mod macros;
pub mod tracepoint;

pub use bindings::{BindingClass, BindingError, ForeignError, Registry};
pub use exception::Exception;
pub use hierarchy::{ExceptionClass, ExceptionType, KindInfo};
pub use tracepoint::{Tracepoint, Traceback};

#[doc(hidden)]
pub mod __private {
    pub use miette;
}
