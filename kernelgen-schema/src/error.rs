//! Error types for schema registration and ancestor resolution.

use thiserror::Error;

/// Error type for registry and resolution operations.
///
/// Every variant is a configuration-time error: it aborts the current
/// generation run and names the offending declaration so the schema author
/// can fix the input without reading generator internals.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A declaration name was registered twice within one registry lifetime.
    #[error("duplicate declaration name '{name}'")]
    DuplicateName {
        /// Name of the duplicate declaration.
        name: String,
    },

    /// A declaration was looked up that is not present in the registry.
    #[error("declaration '{name}' not found in registry")]
    DeclarationNotFound {
        /// Requested declaration name.
        name: String,
    },

    /// A parent reference does not name a registered declaration.
    #[error(
        "unknown parent '{parent}' for declaration '{declaration}' (chain walked: {})",
        .chain.join(" -> ")
    )]
    UnknownParent {
        /// Declaration being resolved.
        declaration: String,
        /// Missing parent name.
        parent: String,
        /// Ancestor chain walked before the failure, resolution order.
        chain: Vec<String>,
    },

    /// A parent chain does not terminate at a root declaration.
    #[error(
        "cyclic inheritance for declaration '{declaration}' (chain walked: {})",
        .chain.join(" -> ")
    )]
    CyclicInheritance {
        /// Declaration being resolved.
        declaration: String,
        /// Ancestor chain walked before the cycle guard tripped.
        chain: Vec<String>,
    },

    /// An attribute name appears more than once across a declaration's
    /// flattened ancestor chain. Attribute shadowing is not allowed.
    #[error(
        "duplicate attribute '{attribute}' in resolved set of '{declaration}' (redeclared by '{redeclared_by}')"
    )]
    DuplicateAttribute {
        /// Declaration being resolved.
        declaration: String,
        /// Offending attribute name.
        attribute: String,
        /// Chain member that redeclares the attribute.
        redeclared_by: String,
    },
}

impl SchemaError {
    /// Creates a duplicate name error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Creates a declaration-not-found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::DeclarationNotFound { name: name.into() }
    }

    /// Creates an unknown parent error.
    pub fn unknown_parent(
        declaration: impl Into<String>,
        parent: impl Into<String>,
        chain: Vec<String>,
    ) -> Self {
        Self::UnknownParent {
            declaration: declaration.into(),
            parent: parent.into(),
            chain,
        }
    }

    /// Creates a cyclic inheritance error.
    pub fn cyclic(declaration: impl Into<String>, chain: Vec<String>) -> Self {
        Self::CyclicInheritance {
            declaration: declaration.into(),
            chain,
        }
    }

    /// Creates a duplicate attribute error.
    pub fn duplicate_attribute(
        declaration: impl Into<String>,
        attribute: impl Into<String>,
        redeclared_by: impl Into<String>,
    ) -> Self {
        Self::DuplicateAttribute {
            declaration: declaration.into(),
            attribute: attribute.into(),
            redeclared_by: redeclared_by.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_message() {
        let err = SchemaError::duplicate_name("FloatShader");
        assert_eq!(
            err.to_string(),
            "duplicate declaration name 'FloatShader'"
        );
    }

    #[test]
    fn test_unknown_parent_message_includes_chain() {
        let err = SchemaError::unknown_parent(
            "GlossyMaterial",
            "Material",
            vec!["GlossyMaterial".to_string()],
        );
        let msg = err.to_string();
        assert!(msg.contains("unknown parent 'Material'"));
        assert!(msg.contains("GlossyMaterial"));
    }

    #[test]
    fn test_cyclic_message_includes_chain() {
        let err = SchemaError::cyclic(
            "A",
            vec!["A".to_string(), "B".to_string(), "A".to_string()],
        );
        assert!(err.to_string().contains("A -> B -> A"));
    }

    #[test]
    fn test_duplicate_attribute_message() {
        let err = SchemaError::duplicate_attribute("B", "v", "B");
        assert!(err.to_string().contains("duplicate attribute 'v'"));
        assert!(err.to_string().contains("redeclared by 'B'"));
    }
}
