use std::collections::HashMap;

use tracing::{debug, warn};

use super::{BindingClass, BindingError, ForeignError};
use crate::errors::{
    DomainError, InvalidParameterError, IoError, LengthError, LogicError, MemoryError,
    NotFoundError, OutOfRangeError, OverflowError, RangeError, RuntimeError, TimeoutError,
    TypeError, UnderflowError,
};
use crate::exception::Exception;
use crate::hierarchy::{ExceptionClass, ExceptionType, KindInfo};
use crate::tracepoint::Tracepoint;

type Construct = fn(Exception) -> Box<dyn ExceptionType>;

#[derive(Debug, Clone, Copy)]
struct Binding {
    info: &'static KindInfo,
    class: BindingClass,
    construct: Construct,
}

/// Maps native exception types, by qualified name, to the classes a
/// foreign-language wrapper exposes for them.
#[derive(Debug, Clone)]
pub struct Registry {
    bindings: HashMap<&'static str, Binding>,
    /// Binding class name to qualified name; one type per class.
    classes: HashMap<&'static str, &'static str>,
}

fn construct<T: ExceptionClass>(exception: Exception) -> Box<dyn ExceptionType> {
    Box::new(T::from_exception(exception))
}

impl Registry {
    /// Registry holding only the base `Exception` binding.
    pub fn new() -> Self {
        let base = Binding {
            info: Exception::class_info(),
            class: BindingClass::new(Exception::INFO.name),
            construct: construct::<Exception>,
        };
        let mut bindings = HashMap::new();
        bindings.insert(base.info.qualified_name, base);
        let mut classes = HashMap::new();
        classes.insert(base.class.name, base.info.qualified_name);
        Self { bindings, classes }
    }

    /// Registry with a binding for every type in [`crate::errors`].
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.insert::<LogicError>(BindingClass::new("LogicError"));
        registry.insert::<DomainError>(BindingClass::new("DomainError"));
        registry.insert::<InvalidParameterError>(BindingClass::new("InvalidParameterError"));
        registry.insert::<LengthError>(BindingClass::new("LengthError"));
        registry.insert::<OutOfRangeError>(BindingClass::new("OutOfRangeError"));
        registry.insert::<RuntimeError>(
            BindingClass::new("RuntimeError").with_host_bases(&["RuntimeError"]),
        );
        registry.insert::<RangeError>(BindingClass::new("RangeError"));
        registry.insert::<OverflowError>(
            BindingClass::new("OverflowError").with_host_bases(&["OverflowError"]),
        );
        registry.insert::<UnderflowError>(
            BindingClass::new("UnderflowError").with_host_bases(&["ArithmeticError"]),
        );
        registry.insert::<NotFoundError>(
            BindingClass::new("NotFoundError").with_host_bases(&["LookupError"]),
        );
        registry.insert::<MemoryError>(
            BindingClass::new("MemoryError").with_host_bases(&["MemoryError"]),
        );
        registry.insert::<IoError>(BindingClass::new("IoError").with_host_bases(&["IOError"]));
        registry.insert::<TypeError>(
            BindingClass::new("TypeError").with_host_bases(&["TypeError"]),
        );
        registry.insert::<TimeoutError>(BindingClass::new("TimeoutError"));
        registry
    }

    pub fn register<T: ExceptionClass>(&mut self, class: BindingClass) -> Result<(), BindingError> {
        let qualified_name = T::class_info().qualified_name;
        if self.bindings.contains_key(qualified_name) {
            return Err(BindingError::AlreadyRegistered { qualified_name });
        }
        if let Some(&owner) = self.classes.get(class.name) {
            return Err(BindingError::ClassNameTaken {
                name: class.name,
                owner,
            });
        }
        self.insert::<T>(class);
        Ok(())
    }

    fn insert<T: ExceptionClass>(&mut self, class: BindingClass) {
        let info = T::class_info();
        debug!(qualified_name = info.qualified_name, class = class.name, "binding registered");
        self.classes.insert(class.name, info.qualified_name);
        self.bindings.insert(
            info.qualified_name,
            Binding {
                info,
                class,
                construct: construct::<T>,
            },
        );
    }

    /// Binding class registered for exactly this type, if any.
    pub fn lookup(&self, info: &KindInfo) -> Option<BindingClass> {
        self.bindings
            .get(info.qualified_name)
            .map(|binding| binding.class)
    }

    /// Class for the nearest registered type in `info`'s lineage.
    pub fn resolve(&self, info: &KindInfo) -> BindingClass {
        info.lineage()
            .find_map(|ancestor| self.lookup(ancestor))
            .unwrap_or(BindingClass::new(Exception::INFO.name))
    }

    fn registered_lineage<'a>(
        &'a self,
        info: &'a KindInfo,
    ) -> impl Iterator<Item = BindingClass> + 'a {
        info.lineage().filter_map(|ancestor| self.lookup(ancestor))
    }

    /// Host bases of every registered type in `info`'s lineage, nearest
    /// first, without duplicates.
    pub fn host_bases(&self, info: &KindInfo) -> Vec<&'static str> {
        let mut bases: Vec<&'static str> = Vec::new();
        for class in self.registered_lineage(info) {
            for base in class.host_bases {
                if !bases.contains(base) {
                    bases.push(*base);
                }
            }
        }
        bases
    }

    /// Pairs a copy of `exception` with its binding class. Unregistered
    /// types surface as their nearest registered ancestor.
    pub fn translate(&self, exception: &dyn ExceptionType) -> ForeignError {
        let info = exception.info();
        let class = match self.lookup(info) {
            Some(class) => class,
            None => {
                let class = self.resolve(info);
                warn!(
                    qualified_name = info.qualified_name,
                    fallback = class.name,
                    "no binding class registered for exception type"
                );
                class
            }
        };
        let ancestors = self
            .registered_lineage(info)
            .map(|class| class.name)
            .collect();
        ForeignError::new(
            class,
            ancestors,
            self.host_bases(info),
            exception.clone_boxed(),
        )
    }

    /// Builds the native exception behind `class_name` when the foreign side
    /// raises it, with `origin` as the throw site.
    pub fn raise(
        &self,
        class_name: &str,
        origin: Tracepoint,
    ) -> Result<Box<dyn ExceptionType>, BindingError> {
        let binding = self
            .classes
            .get(class_name)
            .and_then(|qualified_name| self.bindings.get(qualified_name))
            .ok_or_else(|| BindingError::UnknownClass {
                name: class_name.to_string(),
            })?;
        let exception = Exception::with_origin(binding.info.name, origin);
        Ok((binding.construct)(exception))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
