use crate::lifecycle::HookContext;
use anyhow::{Context, Result};
use reqstool_config::{write_atomic, IncludeEntry};
use reqstool_logger as logger;
use reqstool_manifest::include_list::{merge, required_includes};
use reqstool_manifest::whitespace::cleanup;
use std::fs;

/// Make sure Poetry bundles the reqstool files into the sdist
pub fn run(ctx: &HookContext) -> Result<()> {
    let added = update_includes(ctx)?;
    if added.is_empty() {
        logger::debug("Include list already up to date");
    } else {
        logger::success(&format!(
            "Added {} include entr{} to {}",
            added.len(),
            if added.len() == 1 { "y" } else { "ies" },
            ctx.project.path().display()
        ));
    }
    Ok(())
}

/// Merge the required entries into `[tool.poetry].include` and save.
///
/// Returns the entries that were appended. Nothing is written when the list
/// already contains everything.
pub fn update_includes(ctx: &HookContext) -> Result<Vec<IncludeEntry>> {
    let mut project = ctx.project.clone();
    let existing = project.include_entries()?;
    let merged = merge(existing.clone(), required_includes(&ctx.config));

    let added: Vec<IncludeEntry> = merged[existing.len()..].to_vec();
    if added.is_empty() {
        return Ok(added);
    }

    for entry in &added {
        logger::info(&format!("added to include list: {}", entry.path()));
    }

    project.set_include_entries(&merged)?;
    project.save()?;
    strip_blank_lines(ctx)?;

    Ok(added)
}

/// Collapse runs of blank lines left in the saved manifest
fn strip_blank_lines(ctx: &HookContext) -> Result<()> {
    let path = ctx.project.path();
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to re-read {}", path.display()))?;
    let cleaned = cleanup(&content);
    if cleaned != content {
        logger::debug(&format!("Removed redundant blank lines from {}", path.display()));
        write_atomic(path, &cleaned)?;
    }
    Ok(())
}
