//! Example driver generating the shader and material family headers.
//!
//! Run with: `cargo run --example gen_kernel`
//!
//! Demonstrates the full registry lifecycle: populate, generate, clear,
//! repeat for the next family. The two families share one registry value
//! but never share contents.

use std::path::Path;

use kernelgen::prelude::*;

fn shader_family() -> Vec<Declaration> {
    vec![
        Declaration::new("Shader"),
        Declaration::new("FloatShader")
            .with_parent("Shader")
            .with_attr("value", "float"),
        Declaration::new("Float3Shader")
            .with_parent("Shader")
            .with_attr("value", "float3")
            .with_attr("multiplier", "float"),
        Declaration::new("ImageTextureShader")
            .with_parent("Shader")
            .with_attr("texture", "ImageTexture *"),
        Declaration::new("MixedShader")
            .with_parent("Shader")
            .with_attr("fraction", "Shader *")
            .with_attr("shaderA", "Shader *")
            .with_attr("shaderB", "Shader *")
            .with_comment("eval B, A, fraction"),
        Declaration::new("ScaledShader")
            .with_parent("Shader")
            .with_attr("scale", "Shader *")
            .with_attr("shader", "Shader *")
            .with_comment("eval v, k"),
        Declaration::new("EndShader").with_parent("Shader"),
    ]
}

fn material_family() -> Vec<Declaration> {
    vec![
        Declaration::new("Material").with_attr("lobe", "BSDFLobe"),
        Declaration::new("DiffuseMaterial")
            .with_parent("Material")
            .with_attr("roughness", "ShaderData")
            .with_attr("color", "ShaderData"),
        Declaration::new("GlossyMaterial")
            .with_parent("Material")
            .with_attr("roughness", "ShaderData")
            .with_attr("color", "ShaderData"),
        Declaration::new("MixedMaterial")
            .with_parent("Material")
            .with_attr("fraction", "ShaderData")
            .with_attr("matA", "Material *")
            .with_attr("matB", "Material *"),
    ]
}

fn main() -> Result<(), CodegenError> {
    tracing_subscriber::fmt::init();

    let mut registry = Registry::new();

    registry.register_many(shader_family())?;
    let shader_config = FamilyConfig::new("shader", "KERNEL_SHADER_GENERATED_H")
        .with_include("kerneldef.h")
        .with_namespace("KERNEL_NS_BEGIN", "KERNEL_NS_END");
    write_generated_file(&registry, &shader_config, Path::new("shader.generated.h"))?;
    println!("wrote shader.generated.h ({} declarations)", registry.len());

    registry.clear();

    registry.register_many(material_family())?;
    let material_config = FamilyConfig::new("material", "KERNEL_MATERIAL_GENERATED_H")
        .with_include("kerneldef.h")
        .with_include("shaderdata.h")
        .with_include("bsdflobe.h")
        .with_namespace("KERNEL_NS_BEGIN", "KERNEL_NS_END");
    write_generated_file(&registry, &material_config, Path::new("material.generated.h"))?;
    println!("wrote material.generated.h ({} declarations)", registry.len());

    Ok(())
}
