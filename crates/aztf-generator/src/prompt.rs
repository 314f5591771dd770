//! Prompt construction and fenced-block extraction.
//!
//! Completion responses usually wrap the Terraform in a markdown fence
//! with prose around it; only the first fenced block is kept.

/// Build the completion prompt for one Azure resource.
pub fn build_terraform_prompt(resource: &str) -> String {
    format!(
        "Generate Terraform code to create an Azure {}. \
         Use best practices and include all required properties.",
        resource
    )
}

/// Extract the first fenced code block from free-form text.
///
/// A line opens or closes a fence when it starts with the triple-backtick
/// marker — a language tag after the marker does not defeat detection.
/// Both fence lines are excluded from the result. With no fence anywhere
/// the result is empty; with an opening fence that is never closed, every
/// remaining line is returned. Later blocks and trailing prose are
/// ignored.
pub fn extract_fenced_block(text: &str) -> String {
    let mut inside_block = false;
    let mut code_lines = Vec::new();

    for line in text.lines() {
        if line.starts_with("```") {
            if inside_block {
                break;
            }
            inside_block = true;
            continue;
        }
        if inside_block {
            code_lines.push(line);
        }
    }

    code_lines.join("\n")
}
