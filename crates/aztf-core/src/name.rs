//! Module-name derivation from user-supplied resource names.
//!
//! A resource name is a free-form label like "Virtual Machine". The
//! derived module name doubles as a directory segment and a Terraform
//! module reference, so derivation validates that the result is safe to
//! hand to the filesystem.

use std::fmt;

/// A filesystem- and reference-safe identifier derived from a resource name.
///
/// Derivation lowercases the trimmed resource name, replaces spaces with
/// underscores, and appends the `_module` suffix:
///
/// ```
/// use aztf_core::ModuleName;
///
/// let name = ModuleName::derive("Virtual Machine").unwrap();
/// assert_eq!(name.as_str(), "virtual_machine_module");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleName(String);

impl ModuleName {
    /// Suffix appended to every derived name.
    pub const SUFFIX: &'static str = "_module";

    /// Derive a module name from a resource name.
    ///
    /// The resource is trimmed first, so `" Storage Account "` and
    /// `"Storage Account"` produce the same module name. Names that would
    /// not form a single directory segment are rejected rather than
    /// escaped.
    pub fn derive(resource: &str) -> Result<Self, NameError> {
        let trimmed = resource.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }

        // The suffix guarantees the segment is never `.` or `..`, so a
        // separator is the only way to smuggle path structure in.
        if trimmed
            .chars()
            .any(|c| c == '/' || c == '\\' || c == '\0')
        {
            return Err(NameError::Unsafe {
                resource: trimmed.to_string(),
            });
        }

        let derived = format!("{}{}", trimmed.to_lowercase().replace(' ', "_"), Self::SUFFIX);
        Ok(Self(derived))
    }

    /// The derived name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reasons a resource name cannot become a module name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// The resource name was empty after trimming.
    #[error("resource name is empty")]
    Empty,

    /// The name would not form a single directory segment.
    #[error("resource name {resource:?} would produce an unsafe directory name")]
    Unsafe {
        /// The offending resource name, trimmed.
        resource: String,
    },
}
