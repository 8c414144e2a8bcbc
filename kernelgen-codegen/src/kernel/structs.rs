//! Per-declaration struct block emission.
//!
//! Every declaration emits a plain `typedef struct` aggregate: a
//! `<Root>Type type_tag` slot first, then the flattened own-plus-inherited
//! member list. No inheritance relationship appears in the output; the
//! consuming kernel distinguishes variants by the externally maintained tag,
//! which keeps the types representable without vtables on restricted
//! execution targets.

use kernelgen_schema::ResolvedDeclaration;

/// Generator for type declaration blocks.
pub struct StructGenerator<'a> {
    resolved: &'a [ResolvedDeclaration],
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator over resolved declarations.
    #[must_use]
    pub fn new(resolved: &'a [ResolvedDeclaration]) -> Self {
        Self { resolved }
    }

    /// Generates all declaration blocks in registration order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        for declaration in self.resolved {
            output.push_str(&self.generate_block(declaration));
        }
        output
    }

    /// Generates one declaration block.
    fn generate_block(&self, declaration: &ResolvedDeclaration) -> String {
        let mut output = String::new();

        if let Some(comment) = &declaration.comment {
            output.push_str(&format!("// {}\n", comment));
        }

        output.push_str(&format!("typedef struct {}{{\n", declaration.name));
        output.push_str(&format!("    {}Type type_tag;\n", declaration.root));
        for attribute in &declaration.attributes {
            output.push_str(&format!("    {} {};\n", attribute.ty, attribute.name));
        }
        output.push('\n');
        output.push_str(&format!("}}{};\n\n", declaration.name));

        output
    }
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
    fn test_root_block_has_tag_only() {
        let resolved = resolve_family(vec![Declaration::new("Shader")]);
        let output = StructGenerator::new(&resolved).generate();

        assert_eq!(
            output,
            "typedef struct Shader{\n    ShaderType type_tag;\n\n}Shader;\n\n"
        );
    }

    #[test]
    fn test_child_block_flattens_members() {
        let resolved = resolve_family(vec![
            Declaration::new("Material").with_attr("lobe", "BSDFLobe"),
            Declaration::new("DiffuseMaterial")
                .with_parent("Material")
                .with_attr("roughness", "ShaderData")
                .with_attr("color", "ShaderData"),
        ]);
        let output = StructGenerator::new(&resolved).generate();

        let block_start = output.find("typedef struct DiffuseMaterial{").unwrap();
        let block = &output[block_start..];
        let tag_pos = block.find("MaterialType type_tag;").unwrap();
        let lobe_pos = block.find("BSDFLobe lobe;").unwrap();
        let rough_pos = block.find("ShaderData roughness;").unwrap();
        let color_pos = block.find("ShaderData color;").unwrap();
        assert!(tag_pos < lobe_pos);
        assert!(lobe_pos < rough_pos);
        assert!(rough_pos < color_pos);
    }

    #[test]
    fn test_type_strings_emitted_verbatim() {
        let resolved = resolve_family(vec![
            Declaration::new("Shader"),
            Declaration::new("ImageTextureShader")
                .with_parent("Shader")
                .with_attr("texture", "ImageTexture *"),
        ]);
        let output = StructGenerator::new(&resolved).generate();

        assert!(output.contains("    ImageTexture * texture;\n"));
    }

    #[test]
    fn test_comment_precedes_block() {
        let resolved = resolve_family(vec![
            Declaration::new("Shader"),
            Declaration::new("MixedShader")
                .with_parent("Shader")
                .with_comment("eval B, A, fraction"),
        ]);
        let output = StructGenerator::new(&resolved).generate();

        assert!(output.contains("// eval B, A, fraction\ntypedef struct MixedShader{"));
    }

    #[test]
    fn test_blocks_in_registration_order() {
        let resolved = resolve_family(vec![
            Declaration::new("Shader"),
            Declaration::new("FloatShader").with_parent("Shader"),
            Declaration::new("EndShader").with_parent("Shader"),
        ]);
        let output = StructGenerator::new(&resolved).generate();

        let shader = output.find("typedef struct Shader{").unwrap();
        let float = output.find("typedef struct FloatShader{").unwrap();
        let end = output.find("typedef struct EndShader{").unwrap();
        assert!(shader < float);
        assert!(float < end);
    }
}
