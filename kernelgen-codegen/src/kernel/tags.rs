//! Tag enum and forward-declaration emission.
//!
//! Each root declaration gets one `<Root>Type` enum: a `<ROOT>_NONE` value
//! first, then one value per descendant in registration order. Registration
//! order is therefore what fixes the default tag values, so the enum diffs
//! cleanly when a family grows at the end.

use kernelgen_schema::ResolvedDeclaration;

/// Generator for family tag enums and struct forward declarations.
pub struct TagGenerator<'a> {
    resolved: &'a [ResolvedDeclaration],
}

impl<'a> TagGenerator<'a> {
    /// Creates a new tag generator over resolved declarations.
    #[must_use]
    pub fn new(resolved: &'a [ResolvedDeclaration]) -> Self {
        Self { resolved }
    }

    /// Generates all tag enums followed by all forward declarations.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for root in self.resolved.iter().filter(|d| d.is_root()) {
            output.push_str(&self.generate_tag_enum(root));
        }

        for declaration in self.resolved {
            output.push_str(&format!("struct {};\n", declaration.name));
        }

        output
    }

    /// Generates the tag enum for one root declaration.
    fn generate_tag_enum(&self, root: &ResolvedDeclaration) -> String {
        let mut output = String::new();

        output.push_str(&format!("enum {}Type{{\n", root.name));
        output.push_str(&format!("    {}_NONE,\n", to_shout_case(&root.name)));

        for descendant in self
            .resolved
            .iter()
            .filter(|d| d.root == root.name && !d.is_root())
        {
            output.push_str(&format!("    {},\n", to_shout_case(&descendant.name)));
        }

        output.push_str("};\n");
        output
    }
}

/// Converts a PascalCase name to SHOUT_CASE.
#[must_use]
pub fn to_shout_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_ascii_uppercase());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernelgen_schema::{Declaration, Registry, resolve_all};

    fn resolve_family(declarations: Vec<Declaration>) -> Vec<ResolvedDeclaration> {
        let mut registry = Registry::new();
        registry.register_many(declarations).expect("register failed");
        resolve_all(&registry).expect("resolve failed")
    }

    #[test]
    fn test_to_shout_case() {
        assert_eq!(to_shout_case("Shader"), "SHADER");
        assert_eq!(to_shout_case("FloatShader"), "FLOAT_SHADER");
        assert_eq!(to_shout_case("Float3Shader"), "FLOAT3_SHADER");
        assert_eq!(to_shout_case("ImageTextureShader"), "IMAGE_TEXTURE_SHADER");
    }

    #[test]
    fn test_tag_enum_lists_none_then_descendants() {
        let resolved = resolve_family(vec![
            Declaration::new("Shader"),
            Declaration::new("FloatShader").with_parent("Shader"),
            Declaration::new("MixedShader").with_parent("Shader"),
        ]);
        let output = TagGenerator::new(&resolved).generate();

        assert!(output.contains("enum ShaderType{"));
        let none_pos = output.find("SHADER_NONE").unwrap();
        let float_pos = output.find("FLOAT_SHADER").unwrap();
        let mixed_pos = output.find("MIXED_SHADER").unwrap();
        assert!(none_pos < float_pos);
        assert!(float_pos < mixed_pos);
    }

    #[test]
    fn test_forward_declarations_for_every_entry() {
        let resolved = resolve_family(vec![
            Declaration::new("Material").with_attr("lobe", "BSDFLobe"),
            Declaration::new("DiffuseMaterial").with_parent("Material"),
        ]);
        let output = TagGenerator::new(&resolved).generate();

        assert!(output.contains("struct Material;\n"));
        assert!(output.contains("struct DiffuseMaterial;\n"));
    }

    #[test]
    fn test_grandchildren_share_root_enum() {
        let resolved = resolve_family(vec![
            Declaration::new("Shader"),
            Declaration::new("TextureShader").with_parent("Shader"),
            Declaration::new("CheckerShader").with_parent("TextureShader"),
        ]);
        let output = TagGenerator::new(&resolved).generate();

        // One enum only; the grandchild tags into the root's enum.
        assert_eq!(output.matches("enum ").count(), 1);
        assert!(output.contains("CHECKER_SHADER,"));
    }

    #[test]
    fn test_two_roots_two_enums() {
        let resolved = resolve_family(vec![
            Declaration::new("Shader"),
            Declaration::new("Material"),
            Declaration::new("FloatShader").with_parent("Shader"),
            Declaration::new("DiffuseMaterial").with_parent("Material"),
        ]);
        let output = TagGenerator::new(&resolved).generate();

        assert!(output.contains("enum ShaderType{"));
        assert!(output.contains("enum MaterialType{"));
        assert!(output.contains("MATERIAL_NONE,"));
        assert!(!output.contains("DIFFUSE_MATERIAL,\n    FLOAT_SHADER"));
    }
}
