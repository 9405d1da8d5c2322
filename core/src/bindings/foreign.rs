use std::fmt;

use miette::Diagnostic;
use serde::Serialize;

use super::BindingError;
use crate::hierarchy::ExceptionType;
use crate::tracepoint::Tracepoint;

/// Class a scripting-language wrapper exposes for one exception type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BindingClass {
    pub name: &'static str,
    /// Built-in error classes of the host language the wrapper also derives
    /// from, so host code can catch it as e.g. `LookupError`.
    pub host_bases: &'static [&'static str],
}

impl BindingClass {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            host_bases: &[],
        }
    }

    pub const fn with_host_bases(mut self, host_bases: &'static [&'static str]) -> Self {
        self.host_bases = host_bases;
        self
    }
}

/// A native exception paired with the binding class it surfaces as.
#[derive(Debug, Clone)]
pub struct ForeignError {
    class: BindingClass,
    /// Binding class names along the registered lineage, own class first.
    ancestors: Vec<&'static str>,
    /// Host bases inherited from the whole lineage, nearest first.
    host_bases: Vec<&'static str>,
    exception: Box<dyn ExceptionType>,
}

#[derive(Serialize)]
struct Payload<'a> {
    class: &'a BindingClass,
    ancestors: &'a [&'static str],
    host_bases: &'a [&'static str],
    qualified_name: &'static str,
    kind: &'static str,
    traceback: &'a [Tracepoint],
}

impl ForeignError {
    pub(crate) fn new(
        class: BindingClass,
        ancestors: Vec<&'static str>,
        host_bases: Vec<&'static str>,
        exception: Box<dyn ExceptionType>,
    ) -> Self {
        Self {
            class,
            ancestors,
            host_bases,
            exception,
        }
    }

    pub fn class(&self) -> BindingClass {
        self.class
    }

    pub fn ancestors(&self) -> &[&'static str] {
        &self.ancestors
    }

    pub fn host_bases(&self) -> &[&'static str] {
        &self.host_bases
    }

    /// Whether a host-side handler for `class_name` would catch this error,
    /// either as a wrapper class in the lineage or as an inherited host base.
    pub fn catches(&self, class_name: &str) -> bool {
        self.ancestors
            .iter()
            .chain(&self.host_bases)
            .any(|name| *name == class_name)
    }

    pub fn exception(&self) -> &dyn ExceptionType {
        self.exception.as_ref()
    }

    pub fn into_exception(self) -> Box<dyn ExceptionType> {
        self.exception
    }

    pub fn what(&self) -> String {
        self.exception.what()
    }

    pub fn repr(&self) -> String {
        format!("{}('{}')", self.class.name, self.what())
    }

    pub fn to_json(&self) -> Result<String, BindingError> {
        let payload = Payload {
            class: &self.class,
            ancestors: &self.ancestors,
            host_bases: &self.host_bases,
            qualified_name: self.exception.qualified_name(),
            kind: self.exception.kind(),
            traceback: self.exception.traceback(),
        };
        Ok(serde_json::to_string(&payload)?)
    }
}

impl fmt::Display for ForeignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.exception, f)
    }
}

impl std::error::Error for ForeignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.exception.as_error())
    }
}

impl Diagnostic for ForeignError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.class.name))
    }
}
