use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum BindingError {
    #[error("a binding class is already registered for '{qualified_name}'")]
    #[diagnostic(help("each exception type maps to exactly one binding class"))]
    AlreadyRegistered { qualified_name: &'static str },

    #[error("binding class '{name}' is already used by '{owner}'")]
    #[diagnostic(help("each binding class wraps exactly one exception type"))]
    ClassNameTaken {
        name: &'static str,
        owner: &'static str,
    },

    #[error("no binding class named '{name}'")]
    UnknownClass { name: String },

    #[error("failed to encode exception payload")]
    Encode(#[from] serde_json::Error),
}
