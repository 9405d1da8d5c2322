mod error;
mod foreign;
mod registry;

pub use error::BindingError;
pub use foreign::{BindingClass, ForeignError};
pub use registry::Registry;
