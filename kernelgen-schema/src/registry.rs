//! Schema registry: ordered declaration storage with name lookup.
//!
//! Registration order is preserved and becomes emission order, which in turn
//! fixes default tag-value assignment in the generated output.

use std::collections::HashMap;

use crate::declaration::Declaration;
use crate::error::SchemaError;

/// Ordered collection of declarations for one generation run.
///
/// A registry is a caller-owned value with an explicit lifecycle: construct,
/// populate via [`Registry::register_many`], generate, then [`Registry::clear`]
/// or discard. Independent families must not share registry contents; failing
/// to clear between runs contaminates the next family with stale entries.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Declarations in registration order.
    declarations: Vec<Declaration>,
    /// Name lookup map into `declarations`.
    index: HashMap<String, usize>,
}

impl Registry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a single declaration.
    ///
    /// Parent references are not resolved here; resolution is deferred to
    /// generation time, so a parent may be registered after its children.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateName` if the name is already registered.
    pub fn register(&mut self, declaration: Declaration) -> Result<(), SchemaError> {
        if self.index.contains_key(&declaration.name) {
            return Err(SchemaError::duplicate_name(&declaration.name));
        }
        let position = self.declarations.len();
        self.index.insert(declaration.name.clone(), position);
        self.declarations.push(declaration);
        Ok(())
    }

    /// Registers a batch of declarations in iteration order.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateName` at the first name collision;
    /// declarations registered before the collision remain in the registry.
    pub fn register_many(
        &mut self,
        declarations: impl IntoIterator<Item = Declaration>,
    ) -> Result<(), SchemaError> {
        for declaration in declarations {
            self.register(declaration)?;
        }
        Ok(())
    }

    /// Removes all declarations and resets the lookup index.
    ///
    /// Must be called between independent generation runs that reuse the
    /// same registry value.
    pub fn clear(&mut self) {
        self.declarations.clear();
        self.index.clear();
    }

    /// Looks up a declaration by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.index.get(name).map(|&idx| &self.declarations[idx])
    }

    /// Returns true if a declaration with the given name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates declarations in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    /// Returns the number of registered declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns true if no declarations are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
