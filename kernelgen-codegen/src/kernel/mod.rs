//! Kernel-C emission modules.

pub mod structs;
pub mod tags;

pub use structs::StructGenerator;
pub use tags::{TagGenerator, to_shout_case};
