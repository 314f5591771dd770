//! # aztf-generator
//!
//! OpenAI-backed Terraform scaffold generation for Azure resources.
//!
//! Given a list of resource names, the generator asks the chat-completions
//! endpoint for example Terraform code once per resource and materializes
//! a fixed scaffold on disk:
//!
//! ```text
//! ┌────────────┐     ┌──────────┐     ┌─────────────┐
//! │  resource  │ ──> │  prompt  │ ──> │   OpenAI    │
//! │    list    │     │          │     │     API     │
//! └────────────┘     └──────────┘     └──────┬──────┘
//!                                            │
//!                       fenced-block extraction
//!                                            │
//!                                            ▼
//!                <output root>/<module>/{main,variables,output}.tf
//! ```
//!
//! Everything is strictly sequential — one completion call, then one
//! module write, per resource, in input order. The first failure aborts
//! the remainder of the run; earlier modules stay on disk.
//!
//! # Usage
//!
//! ```bash
//! # Interactive: prompts for a comma-separated resource list
//! cargo run -p aztf-generator --bin aztf-generate
//!
//! # Non-interactive
//! cargo run -p aztf-generator --bin aztf-generate -- \
//!     --resources "Virtual Machine, Storage Account"
//! ```

pub mod client;
pub mod config;
pub mod generator;
pub mod prompt;
pub mod writer;

pub use client::{ClientError, CompletionClient, Message, OpenAiClient};
pub use config::{ConfigError, Settings, DEFAULT_MODEL};
pub use generator::{
    parse_resource_list, GeneratorError, ModuleRecord, RunSummary, ScaffoldGenerator,
};
pub use prompt::{build_terraform_prompt, extract_fenced_block};
pub use writer::{ScaffoldWriter, WriteError};
