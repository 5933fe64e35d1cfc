use crate::lifecycle::HookContext;
use anyhow::Result;
use reqstool_config::ReqstoolConfig;
use reqstool_logger as logger;
use reqstool_manifest::manifest_writer::write_to_path;
use reqstool_manifest::{annotations_path, assemble, ResourcePaths, MANIFEST_FILE_NAME};
use reqstool_python::{AnnotationExtractor, DecoratorProcessor};
use std::path::PathBuf;

/// Generate the annotations file, then write `reqstool_config.yml`
pub fn run(ctx: &HookContext) -> Result<()> {
    let extractor = DecoratorProcessor::for_project(ctx.root(), ctx.python.as_deref())?;
    generate_annotations(&extractor, &ctx.config)?;
    write_manifest(ctx)?;
    Ok(())
}

/// Run the extractor over the configured sources; failures are fatal
pub fn generate_annotations(
    extractor: &dyn AnnotationExtractor,
    config: &ReqstoolConfig,
) -> Result<PathBuf> {
    let output = annotations_path(config);
    logger::debug(&format!(
        "Scanning {:?} for reqstool decorators",
        config.sources
    ));

    logger::spinner_start("Generating annotations");
    match extractor.extract(&config.sources, &output) {
        Ok(()) => {
            logger::spinner_success(&format!("Generated {}", output.display()));
            Ok(output)
        }
        Err(e) => {
            logger::spinner_error("Annotation extraction failed");
            Err(e.into())
        }
    }
}

/// Assemble the resource manifest and write it to the project root
pub fn write_manifest(ctx: &HookContext) -> Result<PathBuf> {
    let manifest = assemble(&ctx.config, ctx.root())?;

    for (_, path) in manifest.resources.files() {
        logger::info(&format!("added to {}: {}", MANIFEST_FILE_NAME, path));
    }
    for pattern in &manifest.resources.test_results {
        logger::info(&format!("added to {}: {}", MANIFEST_FILE_NAME, pattern));
    }

    let paths = ResourcePaths::from_config(&ctx.config);
    let optional = [
        (&manifest.resources.software_verification_cases, &paths.software_verification_cases),
        (&manifest.resources.manual_verification_results, &paths.manual_verification_results),
        (&manifest.resources.annotations, &paths.annotations),
    ];
    for (_, path) in optional.iter().filter(|(listed, _)| listed.is_none()) {
        logger::warn(&format!(
            "not found, left out of {}: {}",
            MANIFEST_FILE_NAME,
            path.display()
        ));
    }

    let output_path = ctx.root().join(MANIFEST_FILE_NAME);
    write_to_path(&manifest, &output_path, &ctx.project.version())?;
    logger::success(&format!("Created {} in project root", MANIFEST_FILE_NAME));

    Ok(output_path)
}
