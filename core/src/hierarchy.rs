use std::any::Any;
use std::borrow::Cow;

use crate::exception::Exception;
use crate::tracepoint::Tracepoint;

/// Static descriptor of one concrete exception variant and its place in the
/// hierarchy.
#[derive(Debug, PartialEq, Eq)]
pub struct KindInfo {
    /// Semantic kind recorded on construction, e.g. `RuntimeError`.
    pub name: &'static str,
    /// Fully qualified name of the most-derived type.
    pub qualified_name: &'static str,
    pub parent: Option<&'static KindInfo>,
}

impl KindInfo {
    /// This kind followed by each of its ancestors, ending at the root.
    pub fn lineage(&self) -> impl Iterator<Item = &KindInfo> {
        std::iter::successors(Some(self), |info| info.parent)
    }

    pub fn is_a(&self, ancestor: &KindInfo) -> bool {
        self.lineage()
            .any(|info| info.qualified_name == ancestor.qualified_name)
    }
}

/// Capabilities every concrete exception variant provides, usable without
/// knowing the variant at compile time.
pub trait ExceptionType: std::error::Error + Send + Sync + 'static {
    fn info(&self) -> &'static KindInfo;

    fn exception(&self) -> &Exception;

    fn exception_mut(&mut self) -> &mut Exception;

    /// Independently owned copy of the concrete variant.
    fn clone_boxed(&self) -> Box<dyn ExceptionType>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn as_error(&self) -> &(dyn std::error::Error + 'static);

    fn kind(&self) -> &'static str {
        self.exception().kind()
    }

    /// Fully qualified name of the most-derived variant.
    fn qualified_name(&self) -> &'static str {
        self.info().qualified_name
    }

    fn traceback(&self) -> &[Tracepoint] {
        self.exception().traceback()
    }

    fn what(&self) -> String {
        self.exception().what()
    }

    fn is_a(&self, ancestor: &KindInfo) -> bool {
        self.info().is_a(ancestor)
    }
}

/// Concrete variants that can be built generically from a base exception.
pub trait ExceptionClass: ExceptionType + Sized {
    fn class_info() -> &'static KindInfo;

    fn from_exception(exception: Exception) -> Self;
}

impl dyn ExceptionType {
    pub fn add_message(
        &mut self,
        file: impl Into<Cow<'static, str>>,
        line: u32,
        function: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
    ) {
        self.exception_mut().add_message(file, line, function, message);
    }

    pub fn instance_of<T: ExceptionClass>(&self) -> bool {
        self.is_a(T::class_info())
    }

    pub fn downcast_ref<T: ExceptionType>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: ExceptionType>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }
}

impl Clone for Box<dyn ExceptionType> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}
