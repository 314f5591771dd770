//! # aztf-core
//!
//! Core types for Azure Terraform scaffold generation.
//!
//! This crate holds the pure domain logic shared by the generator:
//! resource-name normalization, module-name derivation, and the static
//! scaffold text written at the output root. Nothing in here touches the
//! network or the filesystem.

pub mod name;
pub mod scaffold;

pub use name::{ModuleName, NameError};
pub use scaffold::{render_module_blocks, PROVIDER_TF, VARIABLES_TF};
