//! Whole-registry validation.
//!
//! The emitter runs this pass before assembling any text so a failed run
//! produces no output at all.

use crate::error::SchemaError;
use crate::registry::Registry;
use crate::resolver::resolve;

/// Validates every registered declaration.
///
/// Resolves each declaration's ancestor chain, surfacing dangling parents,
/// cycles, and attribute shadowing anywhere in the registry.
///
/// # Errors
/// Returns the first `SchemaError` encountered, registration order.
pub fn validate_registry(registry: &Registry) -> Result<(), SchemaError> {
    for declaration in registry {
        resolve(registry, &declaration.name)?;
    }
    Ok(())
}
