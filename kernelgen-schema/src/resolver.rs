//! Ancestor resolution.
//!
//! This module flattens a declaration's single-parent chain into the full
//! ordered attribute set the emitter needs: root attributes first, each
//! level's internal order preserved. The hierarchy is a generation-time
//! concept only; the emitted types carry the flattened member list and no
//! inheritance relationship.

use std::collections::HashSet;

use crate::declaration::{Attribute, Declaration};
use crate::error::SchemaError;
use crate::registry::Registry;

/// A declaration with its ancestor chain walked and attributes flattened.
#[derive(Debug, Clone)]
pub struct ResolvedDeclaration {
    /// Declaration name.
    pub name: String,
    /// Name of the rootmost ancestor (equal to `name` for a root).
    pub root: String,
    /// Ancestor names root-first, ending with this declaration.
    pub chain: Vec<String>,
    /// Full own-plus-inherited attribute set, root attributes first.
    pub attributes: Vec<Attribute>,
    /// Source comment carried over from the declaration.
    pub comment: Option<String>,
}

impl ResolvedDeclaration {
    /// Returns true if this declaration is the root of its family.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.name == self.root
    }
}

/// Resolves a declaration's full attribute set by walking its parent chain.
///
/// The chain walk is bounded by the registry size, which guards against
/// cycles (including self-parents) without a separate graph check.
///
/// # Errors
/// - `SchemaError::DeclarationNotFound` if `name` is not registered.
/// - `SchemaError::UnknownParent` if a parent reference is dangling.
/// - `SchemaError::CyclicInheritance` if the chain does not terminate
///   within `registry.len()` steps.
/// - `SchemaError::DuplicateAttribute` if flattening repeats an attribute
///   name across the chain.
pub fn resolve(registry: &Registry, name: &str) -> Result<ResolvedDeclaration, SchemaError> {
    let declaration = registry.get(name).ok_or_else(|| SchemaError::not_found(name))?;

    let chain = ancestor_chain(registry, declaration)?;

    let mut attributes = Vec::new();
    let mut seen = HashSet::new();
    for member in &chain {
        for attribute in &member.attributes {
            if !seen.insert(attribute.name.as_str()) {
                return Err(SchemaError::duplicate_attribute(
                    name,
                    &attribute.name,
                    &member.name,
                ));
            }
            attributes.push(attribute.clone());
        }
    }

    Ok(ResolvedDeclaration {
        name: declaration.name.clone(),
        root: chain[0].name.clone(),
        chain: chain.iter().map(|d| d.name.clone()).collect(),
        attributes,
        comment: declaration.comment.clone(),
    })
}

/// Resolves every registered declaration, registration order.
///
/// # Errors
/// Returns the first resolution error encountered.
pub fn resolve_all(registry: &Registry) -> Result<Vec<ResolvedDeclaration>, SchemaError> {
    registry
        .iter()
        .map(|declaration| resolve(registry, &declaration.name))
        .collect()
}

/// Walks the parent chain of a declaration, returning it root-first.
fn ancestor_chain<'a>(
    registry: &'a Registry,
    declaration: &'a Declaration,
) -> Result<Vec<&'a Declaration>, SchemaError> {
    let mut chain = vec![declaration];
    let mut current = declaration;

    while let Some(parent_name) = current.parent.as_deref() {
        if chain.len() > registry.len() {
            return Err(SchemaError::cyclic(
                &declaration.name,
                walked_names(&chain),
            ));
        }
        let parent = registry.get(parent_name).ok_or_else(|| {
            SchemaError::unknown_parent(&declaration.name, parent_name, walked_names(&chain))
        })?;
        chain.push(parent);
        current = parent;
    }

    chain.reverse();
    Ok(chain)
}

/// Chain names in the order they were walked (declaration outward).
fn walked_names(chain: &[&Declaration]) -> Vec<String> {
    chain.iter().map(|d| d.name.clone()).collect()
}
