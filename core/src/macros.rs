/// Declares a derived exception variant as a newtype over [`Exception`](crate::Exception).
///
/// ```
/// throwtrace::exception_type! {
///     /// Raised when a catalog row fails validation.
///     pub struct CatalogError: throwtrace::errors::RuntimeError;
/// }
///
/// let err = CatalogError::new("catalog.rs", 12, "load", "bad row");
/// assert_eq!(err.into_exception().kind(), "CatalogError");
/// ```
#[macro_export]
macro_rules! exception_type {
    ($(#[$meta:meta])* $vis:vis struct $name:ident : $parent:ty;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis struct $name($crate::Exception);

        impl $name {
            pub const INFO: $crate::KindInfo = $crate::KindInfo {
                name: stringify!($name),
                qualified_name: concat!(module_path!(), "::", stringify!($name)),
                parent: Some(&<$parent>::INFO),
            };

            pub fn new(
                file: impl Into<::std::borrow::Cow<'static, str>>,
                line: u32,
                function: impl Into<::std::borrow::Cow<'static, str>>,
                message: impl Into<String>,
            ) -> Self {
                Self($crate::Exception::new(stringify!($name), file, line, function, message))
            }

            pub fn add_message(
                &mut self,
                file: impl Into<::std::borrow::Cow<'static, str>>,
                line: u32,
                function: impl Into<::std::borrow::Cow<'static, str>>,
                message: impl Into<String>,
            ) {
                self.0.add_message(file, line, function, message);
            }

            pub fn into_exception(self) -> $crate::Exception {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::error::Error for $name {}

        impl $crate::__private::miette::Diagnostic for $name {
            fn code<'a>(&'a self) -> Option<Box<dyn ::std::fmt::Display + 'a>> {
                $crate::__private::miette::Diagnostic::code(&self.0)
            }
        }

        impl $crate::ExceptionType for $name {
            fn info(&self) -> &'static $crate::KindInfo {
                &Self::INFO
            }

            fn exception(&self) -> &$crate::Exception {
                &self.0
            }

            fn exception_mut(&mut self) -> &mut $crate::Exception {
                &mut self.0
            }

            fn clone_boxed(&self) -> Box<dyn $crate::ExceptionType> {
                Box::new(self.clone())
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn as_error(&self) -> &(dyn ::std::error::Error + 'static) {
                self
            }
        }

        impl $crate::ExceptionClass for $name {
            fn class_info() -> &'static $crate::KindInfo {
                &Self::INFO
            }

            fn from_exception(exception: $crate::Exception) -> Self {
                Self(exception)
            }
        }

        impl From<$name> for $crate::Exception {
            fn from(err: $name) -> Self {
                err.0
            }
        }

        impl From<$name> for Box<dyn $crate::ExceptionType> {
            fn from(err: $name) -> Self {
                Box::new(err)
            }
        }
    };
}

/// Path of the enclosing function, with closure segments removed.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        name.trim_end_matches("::{{closure}}")
    }};
}

/// Builds an exception of the given type at the caller's location.
#[macro_export]
macro_rules! exception {
    ($ty:ty, $($arg:tt)+) => {
        <$ty as $crate::ExceptionClass>::from_exception($crate::Exception::new(
            <$ty as $crate::ExceptionClass>::class_info().name,
            file!(),
            line!(),
            $crate::function_name!(),
            format!($($arg)+),
        ))
    };
}

/// Returns early with a freshly built exception.
#[macro_export]
macro_rules! throw {
    ($ty:ty, $($arg:tt)+) => {
        return Err(::core::convert::Into::into($crate::exception!($ty, $($arg)+)))
    };
}

/// Appends a tracepoint at the caller's location and yields the exception.
#[macro_export]
macro_rules! annotate {
    ($err:expr, $($arg:tt)+) => {{
        let mut err = $err;
        err.add_message(file!(), line!(), $crate::function_name!(), format!($($arg)+));
        err
    }};
}

/// Annotates a caught exception and returns it as the error again.
#[macro_export]
macro_rules! rethrow {
    ($err:expr, $($arg:tt)+) => {
        return Err(::core::convert::Into::into($crate::annotate!($err, $($arg)+)))
    };
}
