//! # Kernelgen
//!
//! Schema-driven type generator for render kernel headers.
//!
//! Kernelgen keeps a tagged-variant type hierarchy used inside a
//! performance-critical evaluation kernel in lockstep with a single
//! declarative source of truth. Families of related types (shaders,
//! materials) are described as declarations with single-parent inheritance;
//! the generator flattens each inheritance chain into a plain aggregate
//! member list and emits a deterministic, compilable header for a
//! GPU/CPU-portable C subset. No virtual dispatch appears in the output:
//! variants are distinguished by an externally maintained type tag.
//!
//! ## Quick Start
//!
//! ```
//! use kernelgen::prelude::*;
//!
//! let mut registry = Registry::new();
//! registry.register_many([
//!     Declaration::new("Shader"),
//!     Declaration::new("FloatShader")
//!         .with_parent("Shader")
//!         .with_attr("value", "float"),
//! ])?;
//!
//! let config = FamilyConfig::new("shader", "KERNEL_SHADER_GENERATED_H")
//!     .with_include("kerneldef.h")
//!     .with_namespace("KERNEL_NS_BEGIN", "KERNEL_NS_END");
//! let header = generate_family(&registry, &config)?;
//! assert!(header.contains("typedef struct FloatShader{"));
//! # Ok::<(), kernelgen::codegen::CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Declarations, registry, ancestor resolution, validation
//! - [`codegen`] - Family configuration and header emission

pub mod prelude;

/// Declarations, registry, and ancestor resolution.
pub mod schema {
    pub use kernelgen_schema::*;
}

/// Family configuration and header emission.
pub mod codegen {
    pub use kernelgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use kernelgen_codegen::{CodegenError, FamilyConfig, Generator, generate_family, write_generated_file};
pub use kernelgen_schema::{Attribute, Declaration, Registry, SchemaError};
