//! Generation orchestration.
//!
//! The run is strictly sequential: module names are validated up front,
//! the root scaffold is written once, then each resource gets one
//! completion call and one module write, in input order. The first
//! failure aborts the remainder of the run and is returned as a value;
//! files written for earlier resources stay on disk.

use std::time::{Duration, Instant};

use aztf_core::{ModuleName, NameError};

use crate::client::{ClientError, CompletionClient};
use crate::prompt::{build_terraform_prompt, extract_fenced_block};
use crate::writer::{ScaffoldWriter, WriteError};

/// Split one line of user input into resource-name candidates.
///
/// Splits on commas and trims each candidate. Order and duplicates are
/// preserved; nothing is case-folded here.
pub fn parse_resource_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(|candidate| candidate.trim().to_string())
        .collect()
}

/// Record of one generated module.
#[derive(Debug, Clone)]
pub struct ModuleRecord {
    /// Resource name as supplied by the user.
    pub resource: String,
    /// Derived module name.
    pub module: ModuleName,
    /// Lines of Terraform written to the module's `main.tf`.
    pub code_lines: usize,
}

/// Result of a completed generation run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// One record per module, in input order.
    pub modules: Vec<ModuleRecord>,
    /// Total wall-clock duration.
    pub duration: Duration,
}

impl RunSummary {
    /// Format as a human-readable report.
    pub fn format_summary(&self) -> String {
        let mut summary = format!(
            "Generated {} module(s) in {:.2}s\n",
            self.modules.len(),
            self.duration.as_secs_f64(),
        );

        for record in &self.modules {
            summary.push_str(&format!(
                "  {} -> {} ({} lines)\n",
                record.resource, record.module, record.code_lines
            ));
        }

        summary
    }
}

/// Drives the end-to-end scaffold generation.
pub struct ScaffoldGenerator<C> {
    client: C,
    writer: ScaffoldWriter,
    verbose: bool,
}

impl<C: CompletionClient> ScaffoldGenerator<C> {
    /// Create a generator over a completion client and an output writer.
    pub fn new(client: C, writer: ScaffoldWriter) -> Self {
        Self {
            client,
            writer,
            verbose: false,
        }
    }

    /// Enable per-resource progress output.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Generate the full scaffold for `resources`.
    ///
    /// Every module name is derived and validated before any network or
    /// filesystem work, so a bad name fails the run with nothing written.
    pub async fn generate(&self, resources: &[String]) -> Result<RunSummary, GeneratorError> {
        let start = Instant::now();

        let modules = resources
            .iter()
            .map(|resource| ModuleName::derive(resource))
            .collect::<Result<Vec<_>, _>>()?;

        self.writer.write_root(&modules)?;

        let mut records = Vec::with_capacity(resources.len());
        for (resource, module) in resources.iter().zip(&modules) {
            if self.verbose {
                println!("Generating {} -> {}", resource, module);
            }

            let prompt = build_terraform_prompt(resource);
            let response = self.client.complete(&prompt).await?;
            let code = extract_fenced_block(&response);
            self.writer.write_module(module, &code)?;

            records.push(ModuleRecord {
                resource: resource.clone(),
                module: module.clone(),
                code_lines: code.lines().count(),
            });
        }

        Ok(RunSummary {
            modules: records,
            duration: start.elapsed(),
        })
    }
}

/// Generation failures, in the order a run can hit them.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Resource name error: {0}")]
    Name(#[from] NameError),

    #[error("Completion error: {0}")]
    Client(#[from] ClientError),

    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}
