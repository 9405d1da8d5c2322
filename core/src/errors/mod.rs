//! The standard exception hierarchy.
//!
//! ```text
//! Exception
//! ├── LogicError
//! │   ├── DomainError
//! │   ├── InvalidParameterError
//! │   ├── LengthError
//! │   └── OutOfRangeError
//! ├── RuntimeError
//! │   ├── RangeError
//! │   ├── OverflowError
//! │   ├── UnderflowError
//! │   ├── MemoryError
//! │   ├── IoError
//! │   ├── TypeError
//! │   └── TimeoutError
//! └── NotFoundError
//! ```

use crate::exception::Exception;
use crate::exception_type;

exception_type! {
    /// Errors in the program's internal logic, preventable by the caller.
    pub struct LogicError: Exception;
}

exception_type! {
    /// An argument lies outside the domain of the operation.
    pub struct DomainError: LogicError;
}

exception_type! {
    pub struct InvalidParameterError: LogicError;
}

exception_type! {
    /// A length or size limit was exceeded.
    pub struct LengthError: LogicError;
}

exception_type! {
    pub struct OutOfRangeError: LogicError;
}

exception_type! {
    /// Errors only detectable while the program runs.
    pub struct RuntimeError: Exception;
}

exception_type! {
    pub struct RangeError: RuntimeError;
}

exception_type! {
    pub struct OverflowError: RuntimeError;
}

exception_type! {
    pub struct UnderflowError: RuntimeError;
}

exception_type! {
    /// Memory could not be obtained.
    pub struct MemoryError: RuntimeError;
}

exception_type! {
    pub struct IoError: RuntimeError;
}

exception_type! {
    /// A value had the wrong type at runtime.
    pub struct TypeError: RuntimeError;
}

exception_type! {
    pub struct TimeoutError: RuntimeError;
}

exception_type! {
    /// A lookup found nothing.
    pub struct NotFoundError: Exception;
}
