//! # Kernelgen Schema
//!
//! Declarative type schemas for render kernel code generation.
//!
//! This crate provides:
//! - Declaration and attribute definitions for generated kernel types
//! - An ordered, name-indexed registry with an explicit lifecycle
//! - Ancestor resolution (inheritance flattening) for single-parent chains
//! - Whole-registry validation

pub mod declaration;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod validation;

pub use declaration::{Attribute, Declaration};
pub use error::SchemaError;
pub use registry::Registry;
pub use resolver::{ResolvedDeclaration, resolve, resolve_all};
pub use validation::validate_registry;
