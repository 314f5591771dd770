//! Static scaffold text for the output root.
//!
//! The provider and root-variable declarations are constants so the root
//! files come out byte-identical on every run; only the aggregator is
//! rendered from the resource list.

use crate::name::ModuleName;

/// Root provider declaration.
pub const PROVIDER_TF: &str = r#"provider "azurerm" {
  features {}
}
"#;

/// Root variable declaration.
pub const VARIABLES_TF: &str = r#"variable "location" {
  description = "Azure region"
  type        = string
}
"#;

/// Render the aggregator `main.tf` module-reference blocks.
///
/// One block per module, in input order, each pointing its source at the
/// relative module subdirectory. Blocks are separated by exactly one
/// blank line with no trailing block after the last; the rendered text
/// ends with a single newline. An empty list renders an empty string.
pub fn render_module_blocks(modules: &[ModuleName]) -> String {
    if modules.is_empty() {
        return String::new();
    }

    let blocks: Vec<String> = modules
        .iter()
        .map(|module| {
            format!(
                "module \"{name}\" {{\n  source = \"./{name}\"\n}}",
                name = module
            )
        })
        .collect();

    let mut rendered = blocks.join("\n\n");
    rendered.push('\n');
    rendered
}
