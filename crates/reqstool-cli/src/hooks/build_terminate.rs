use crate::lifecycle::HookContext;
use anyhow::Result;
use reqstool_logger as logger;
use reqstool_manifest::manifest_writer::delete;
use reqstool_manifest::MANIFEST_FILE_NAME;

/// Remove the manifest written by build-start
pub fn run(ctx: &HookContext) -> Result<()> {
    let path = ctx.root().join(MANIFEST_FILE_NAME);
    if delete(&path)? {
        logger::info(&format!("Removed {}", path.display()));
    } else {
        logger::debug(&format!("{} not present, nothing to remove", path.display()));
    }
    Ok(())
}
