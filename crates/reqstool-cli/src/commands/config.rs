use crate::lifecycle::HookContext;
use colored::*;
use reqstool_manifest::{ResourcePaths, MANIFEST_FILE_NAME};

/// Resolved settings as `key: value` lines, in display order
pub fn config_lines(ctx: &HookContext) -> Vec<(&'static str, String)> {
    let config = &ctx.config;
    let paths = ResourcePaths::from_config(config);
    vec![
        ("project", ctx.project.path().display().to_string()),
        ("version", ctx.project.version()),
        ("sources", config.sources.join(", ")),
        ("dataset_directory", config.dataset_directory.display().to_string()),
        ("output_directory", config.output_directory.display().to_string()),
        ("test_results", config.test_results.join(", ")),
        ("requirements", paths.requirements.display().to_string()),
        ("annotations", paths.annotations.display().to_string()),
        ("manifest", ctx.root().join(MANIFEST_FILE_NAME).display().to_string()),
    ]
}

/// Print the configuration the hooks would run with
pub fn show_config(ctx: &HookContext) {
    println!("{}", "Configuration:".bold().green());
    for (key, value) in config_lines(ctx) {
        if value.is_empty() {
            println!("  {}: {}", key.cyan(), "(none)".dimmed());
        } else {
            println!("  {}: {}", key.cyan(), value);
        }
    }
}
