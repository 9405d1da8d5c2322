use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One point in an exception's propagation history: the original throw
/// site, or a later site that caught, annotated and rethrew it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tracepoint {
    file: Cow<'static, str>,
    line: u32,
    function: Cow<'static, str>,
    message: String,
}

/// Ordered tracepoints, throw site first.
pub type Traceback = Vec<Tracepoint>;

impl Tracepoint {
    pub fn new(
        file: impl Into<Cow<'static, str>>,
        line: u32,
        function: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
            message: message.into(),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Formats the location as `file:line in function`.
impl fmt::Display for Tracepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} in {}", self.file, self.line, self.function)
    }
}
