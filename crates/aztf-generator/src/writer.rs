//! Scaffold materialization.
//!
//! Writes are overwrite-in-place: a rerun refreshes every file it knows
//! about and leaves module directories from earlier runs alone. Every
//! write surfaces its error with the offending path.

use std::fs;
use std::path::{Path, PathBuf};

use aztf_core::{render_module_blocks, ModuleName, PROVIDER_TF, VARIABLES_TF};

/// Writes the scaffold tree under one output root.
pub struct ScaffoldWriter {
    root: PathBuf,
}

impl ScaffoldWriter {
    /// Create a writer rooted at `root`. Nothing is touched until a write
    /// method runs.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Output root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write the root scaffold: the static `provider.tf` and
    /// `variables.tf`, plus the aggregator `main.tf` referencing each
    /// module in order. Creates the root directory (and parents) first.
    pub fn write_root(&self, modules: &[ModuleName]) -> Result<(), WriteError> {
        create_dir(&self.root)?;
        write_file(&self.root.join("provider.tf"), PROVIDER_TF)?;
        write_file(&self.root.join("variables.tf"), VARIABLES_TF)?;
        write_file(&self.root.join("main.tf"), &render_module_blocks(modules))?;
        Ok(())
    }

    /// Write one module directory: the generated `main.tf` plus empty
    /// `variables.tf` and `output.tf` placeholders. Returns the module
    /// directory path.
    pub fn write_module(&self, module: &ModuleName, code: &str) -> Result<PathBuf, WriteError> {
        let dir = self.root.join(module.as_str());
        create_dir(&dir)?;
        write_file(&dir.join("main.tf"), code)?;
        write_file(&dir.join("variables.tf"), "")?;
        write_file(&dir.join("output.tf"), "")?;
        Ok(dir)
    }
}

fn create_dir(path: &Path) -> Result<(), WriteError> {
    fs::create_dir_all(path).map_err(|source| WriteError::CreateDir {
        path: path.display().to_string(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), WriteError> {
    fs::write(path, contents).map_err(|source| WriteError::WriteFile {
        path: path.display().to_string(),
        source,
    })
}

/// Filesystem failures while materializing the scaffold.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: String,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(resource: &str) -> ModuleName {
        ModuleName::derive(resource).unwrap()
    }

    #[test]
    fn test_write_root_materializes_three_files() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = ScaffoldWriter::new(tmp.path().join("infrastructure"));

        writer
            .write_root(&[module("VM"), module("Storage")])
            .unwrap();

        let root = writer.root();
        assert_eq!(fs::read_to_string(root.join("provider.tf")).unwrap(), PROVIDER_TF);
        assert_eq!(
            fs::read_to_string(root.join("variables.tf")).unwrap(),
            VARIABLES_TF
        );

        let aggregator = fs::read_to_string(root.join("main.tf")).unwrap();
        assert!(aggregator.contains("source = \"./vm_module\""));
        assert!(aggregator.contains("source = \"./storage_module\""));
    }

    #[test]
    fn test_write_module_materializes_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = ScaffoldWriter::new(tmp.path());

        let dir = writer
            .write_module(&module("Key Vault"), "resource \"azurerm_key_vault\" \"kv\" {}\n")
            .unwrap();

        assert_eq!(dir, tmp.path().join("key_vault_module"));
        assert_eq!(
            fs::read_to_string(dir.join("main.tf")).unwrap(),
            "resource \"azurerm_key_vault\" \"kv\" {}\n"
        );
        assert_eq!(fs::read_to_string(dir.join("variables.tf")).unwrap(), "");
        assert_eq!(fs::read_to_string(dir.join("output.tf")).unwrap(), "");
    }

    #[test]
    fn test_rerun_overwrites_but_keeps_stale_modules() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = ScaffoldWriter::new(tmp.path());

        writer.write_module(&module("Old Thing"), "old").unwrap();

        // A later run with a different list rewrites the root but leaves
        // the stale module directory in place.
        writer.write_root(&[module("VM")]).unwrap();
        writer.write_module(&module("VM"), "new").unwrap();

        assert!(tmp.path().join("old_thing_module").is_dir());
        let aggregator = fs::read_to_string(tmp.path().join("main.tf")).unwrap();
        assert!(!aggregator.contains("old_thing_module"));
    }

    #[test]
    fn test_write_errors_carry_the_path() {
        let tmp = tempfile::tempdir().unwrap();
        // A regular file where the root directory should be.
        let clash = tmp.path().join("not-a-dir");
        fs::write(&clash, "occupied").unwrap();

        let writer = ScaffoldWriter::new(clash.join("nested"));
        let err = writer.write_root(&[]).unwrap_err();
        match err {
            WriteError::CreateDir { path, .. } => assert!(path.contains("not-a-dir")),
            other => panic!("expected CreateDir error, got {other:?}"),
        }
    }
}
