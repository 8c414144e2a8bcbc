//! # Kernelgen Codegen
//!
//! Kernel header generation from declarative type schemas.
//!
//! This crate provides:
//! - Per-family generation configuration
//! - Deterministic kernel-C header emission (tag enums, forward
//!   declarations, flattened aggregate blocks)
//! - A file-writing boundary helper that never leaves partial output

pub mod config;
pub mod error;
pub mod generator;
pub mod kernel;

pub use config::FamilyConfig;
pub use error::CodegenError;
pub use generator::{BANNER, Generator};

use kernelgen_schema::Registry;

/// Generates the header text for one family.
///
/// # Arguments
/// * `registry` - Populated registry for the family
/// * `config` - Per-family template constants
///
/// # Returns
/// Generated header text as a string.
///
/// # Errors
/// Returns `CodegenError` if any declaration fails to resolve.
pub fn generate_family(registry: &Registry, config: &FamilyConfig) -> Result<String, CodegenError> {
    Generator::new(registry, config).generate()
}

/// Generates a family header and writes it to a file.
///
/// The text is generated fully in memory before the file is touched, so a
/// failed run never writes a truncated or malformed header to the target
/// path.
///
/// # Arguments
/// * `registry` - Populated registry for the family
/// * `config` - Per-family template constants
/// * `path` - Target file path
///
/// # Errors
/// Returns `CodegenError` if generation fails or the write fails.
pub fn write_generated_file(
    registry: &Registry,
    config: &FamilyConfig,
    path: &std::path::Path,
) -> Result<(), CodegenError> {
    let text = generate_family(registry, config)?;
    std::fs::write(path, text)?;
    Ok(())
}
