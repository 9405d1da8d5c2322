use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::io;

use miette::Diagnostic;
use serde::Serialize;
use tracing::{trace, warn};

use crate::diagnostics::write_traceback;
use crate::hierarchy::{ExceptionClass, ExceptionType, KindInfo};
use crate::tracepoint::{Tracepoint, Traceback};

/// Base error value carrying the chain of tracepoints it passed through.
///
/// The traceback is never empty: `new` records the throw site, and
/// `add_message` only ever appends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exception {
    kind: &'static str,
    traceback: Traceback,
}

impl Exception {
    pub const INFO: KindInfo = KindInfo {
        name: "Exception",
        qualified_name: "throwtrace::Exception",
        parent: None,
    };

    pub fn new(
        kind: &'static str,
        file: impl Into<Cow<'static, str>>,
        line: u32,
        function: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
    ) -> Self {
        Self::with_origin(kind, Tracepoint::new(file, line, function, message))
    }

    pub fn with_origin(kind: &'static str, origin: Tracepoint) -> Self {
        trace!(kind, at = %origin, "exception thrown");
        Self {
            kind,
            traceback: vec![origin],
        }
    }

    /// Records that the exception passed through another site on its way
    /// out, keeping every earlier tracepoint.
    pub fn add_message(
        &mut self,
        file: impl Into<Cow<'static, str>>,
        line: u32,
        function: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
    ) {
        let point = Tracepoint::new(file, line, function, message);
        trace!(kind = self.kind, at = %point, depth = self.traceback.len(), "exception rethrown");
        self.traceback.push(point);
    }

    pub fn traceback(&self) -> &[Tracepoint] {
        &self.traceback
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Renders the full traceback into `sink` and hands the sink back.
    pub fn add_to_stream<'w, W>(&self, sink: &'w mut W) -> Result<&'w mut W, fmt::Error>
    where
        W: fmt::Write + ?Sized,
    {
        write_traceback(sink, self.kind, &self.traceback)?;
        Ok(sink)
    }

    /// Same text as `add_to_stream`, for byte-oriented sinks.
    pub fn write_to<'w, W>(&self, sink: &'w mut W) -> io::Result<&'w mut W>
    where
        W: io::Write + ?Sized,
    {
        write!(sink, "{self}")?;
        Ok(sink)
    }

    /// Rendered traceback as an owned string. Each call allocates its own
    /// buffer, so concurrent callers never share scratch space. Falls back
    /// to the bare kind if rendering fails.
    pub fn what(&self) -> String {
        let mut buffer = String::new();
        if self.add_to_stream(&mut buffer).is_ok() {
            return buffer;
        }
        warn!(kind = self.kind, "failed to render traceback");
        self.kind.to_owned()
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_traceback(f, self.kind, &self.traceback)
    }
}

impl std::error::Error for Exception {}

impl Diagnostic for Exception {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind))
    }
}

impl ExceptionType for Exception {
    fn info(&self) -> &'static KindInfo {
        &Self::INFO
    }

    fn exception(&self) -> &Exception {
        self
    }

    fn exception_mut(&mut self) -> &mut Exception {
        self
    }

    fn clone_boxed(&self) -> Box<dyn ExceptionType> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_error(&self) -> &(dyn std::error::Error + 'static) {
        self
    }
}

impl ExceptionClass for Exception {
    fn class_info() -> &'static KindInfo {
        &Self::INFO
    }

    fn from_exception(exception: Exception) -> Self {
        exception
    }
}

impl From<Exception> for Box<dyn ExceptionType> {
    fn from(exception: Exception) -> Self {
        Box::new(exception)
    }
}
