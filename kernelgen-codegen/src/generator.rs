//! Header generation.
//!
//! Assembles the complete generated-header text for one family: banner,
//! include guard, external includes, namespace markers, tag enums, forward
//! declarations, and the per-declaration blocks in registration order.
//!
//! The whole registry is resolved before any text is assembled, so a
//! malformed schema returns an error without producing partial output.

use tracing::{debug, info};

use kernelgen_schema::{Registry, resolve_all};

use crate::config::FamilyConfig;
use crate::error::CodegenError;
use crate::kernel::{StructGenerator, TagGenerator};

/// Banner emitted at the top of every generated header.
pub const BANNER: &str = "// AUTO GENERATED. DO NOT EDIT\n";

/// Generator for one family's header text.
pub struct Generator<'a> {
    registry: &'a Registry,
    config: &'a FamilyConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator over a registry and family config.
    #[must_use]
    pub fn new(registry: &'a Registry, config: &'a FamilyConfig) -> Self {
        Self { registry, config }
    }

    /// Generates the complete header text.
    ///
    /// Output is byte-for-byte deterministic for identical registry contents
    /// and config: declarations emit in registration order and no unordered
    /// iteration or timestamps reach the output.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if any declaration fails to resolve;
    /// no text is produced in that case.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let resolved = resolve_all(self.registry)?;

        for declaration in &resolved {
            debug!(
                family = %self.config.family,
                name = %declaration.name,
                members = declaration.attributes.len(),
                "emitting declaration"
            );
        }

        let mut output = String::new();

        output.push_str(BANNER);
        output.push_str(&format!("#ifndef {}\n", self.config.include_guard));
        output.push_str(&format!("#define {}\n\n", self.config.include_guard));

        if !self.config.includes.is_empty() {
            for include in &self.config.includes {
                output.push_str(&format!("#include \"{}\"\n", include));
            }
            output.push('\n');
        }

        if !self.config.namespace_open.is_empty() {
            output.push_str(&self.config.namespace_open);
            output.push('\n');
        }

        let tags = TagGenerator::new(&resolved).generate();
        if !tags.is_empty() {
            output.push_str(&tags);
            output.push('\n');
        }

        output.push_str(&StructGenerator::new(&resolved).generate());

        if !self.config.namespace_close.is_empty() {
            output.push_str(&self.config.namespace_close);
            output.push('\n');
        }

        output.push_str("\n#endif\n");

        info!(
            family = %self.config.family,
            declarations = resolved.len(),
            bytes = output.len(),
            "generated family header"
        );

        Ok(output)
    }
}
