//! Declaration definitions.
//!
//! This module contains the data structures describing one generated kernel
//! type: its name, optional parent, ordered attribute list, and optional
//! source comment.

/// Attribute of a declaration: one named member of the emitted type.
///
/// The type string is opaque to the generator and emitted verbatim; it is
/// never checked against the target language's type system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Member name.
    pub name: String,
    /// Target-language type string, passed through verbatim.
    pub ty: String,
}

impl Attribute {
    /// Creates a new attribute.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// One schema entry: a named kernel type with an optional parent and an
/// ordered attribute list.
///
/// The parent relationship exists only at generation time; it is flattened
/// into a plain member list in the emitted output and never materialized as
/// a target-language inheritance relationship.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Emitted type name, unique within a registry.
    pub name: String,
    /// Parent declaration name, or `None` for the root of its family.
    pub parent: Option<String>,
    /// Own attributes, declaration order.
    pub attributes: Vec<Attribute>,
    /// Free text rendered as a comment preceding the emitted type.
    pub comment: Option<String>,
}

impl Declaration {
    /// Creates a new root declaration with no attributes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            attributes: Vec::new(),
            comment: None,
        }
    }

    /// Sets the parent declaration name.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Appends an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, ty));
        self
    }

    /// Sets the source comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Appends an attribute in place.
    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Returns true if this declaration is the root of its family.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_new() {
        let attr = Attribute::new("value", "float");
        assert_eq!(attr.name, "value");
        assert_eq!(attr.ty, "float");
    }

    #[test]
    fn test_declaration_root() {
        let decl = Declaration::new("Shader");
        assert!(decl.is_root());
        assert!(decl.attributes.is_empty());
        assert!(decl.comment.is_none());
    }

    #[test]
    fn test_declaration_builder() {
        let decl = Declaration::new("Float3Shader")
            .with_parent("Shader")
            .with_attr("value", "float3")
            .with_attr("multiplier", "float");

        assert!(!decl.is_root());
        assert_eq!(decl.parent.as_deref(), Some("Shader"));
        assert_eq!(decl.attributes.len(), 2);
        assert_eq!(decl.attributes[0].name, "value");
        assert_eq!(decl.attributes[1].ty, "float");
    }

    #[test]
    fn test_declaration_comment() {
        let decl = Declaration::new("MixedShader")
            .with_parent("Shader")
            .with_comment("eval B, A, fraction");
        assert_eq!(decl.comment.as_deref(), Some("eval B, A, fraction"));
    }

    #[test]
    fn test_add_attribute_preserves_order() {
        let mut decl = Declaration::new("Material");
        decl.add_attribute(Attribute::new("lobe", "BSDFLobe"));
        decl.add_attribute(Attribute::new("roughness", "ShaderData"));
        assert_eq!(decl.attributes[0].name, "lobe");
        assert_eq!(decl.attributes[1].name, "roughness");
    }
}
