//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use kernelgen::prelude::*;
//! ```

// Schema types
pub use kernelgen_schema::{
    Attribute, Declaration, Registry, ResolvedDeclaration, SchemaError, resolve, resolve_all,
    validate_registry,
};

// Codegen types
pub use kernelgen_codegen::{
    CodegenError, FamilyConfig, Generator, generate_family, write_generated_file,
};
