//! Per-family generation configuration.
//!
//! Everything here is an opaque string spliced verbatim into the output
//! template; the generator performs no validation on any of it.

/// Per-run constants for one generated family.
#[derive(Debug, Clone)]
pub struct FamilyConfig {
    /// Family name, used for diagnostics only.
    pub family: String,
    /// Include-guard token.
    pub include_guard: String,
    /// Hand-written headers the generated types depend on.
    pub includes: Vec<String>,
    /// Namespace-open marker, emitted verbatim. Empty to omit.
    pub namespace_open: String,
    /// Namespace-close marker, emitted verbatim. Empty to omit.
    pub namespace_close: String,
}

impl FamilyConfig {
    /// Creates a config with the given family name and include guard.
    #[must_use]
    pub fn new(family: impl Into<String>, include_guard: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            include_guard: include_guard.into(),
            includes: Vec::new(),
            namespace_open: String::new(),
            namespace_close: String::new(),
        }
    }

    /// Appends an external include.
    #[must_use]
    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.includes.push(include.into());
        self
    }

    /// Sets the namespace open/close markers.
    #[must_use]
    pub fn with_namespace(
        mut self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        self.namespace_open = open.into();
        self.namespace_close = close.into();
        self
    }
}
