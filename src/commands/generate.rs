//! Command: generate the plugin/theme main file.
use anyhow::{Context as _, Result};

use crate::actions::ActionOutputs;
use crate::config::{Inputs, MANIFEST_FILE};
use crate::emit::{self, Snippets};
use crate::error::MainFileError;
use crate::header::{self, ArtifactType, HeaderSet};
use crate::logging::Log;
use crate::manifest::{self, Manifest};
use crate::resources::{FallbackScreenshot, MainFile, Resource, ResourceChange, ResourceState};

/// Name of the step output carrying the project name.
pub const PROJECT_NAME_OUTPUT: &str = "project-name";

/// Everything derived from the manifest before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Plugin or theme, from the main file name.
    pub artifact: ArtifactType,
    /// Resolved header lines.
    pub headers: HeaderSet,
    /// Full main-file content.
    pub content: String,
    /// Last segment of the package name.
    pub project_name: String,
}

/// Derive the main-file content for `manifest` under `inputs`.
#[must_use]
pub fn plan(inputs: &Inputs, manifest: &Manifest) -> Generated {
    let artifact = ArtifactType::classify(&inputs.main_file);
    let headers = header::resolve(manifest, artifact, inputs.repository.as_ref());
    let snippets = Snippets {
        manifest_prepend: manifest.prepend_snippet(),
        env_prepend: inputs.prepend.clone(),
        env_append: inputs.append.clone(),
        manifest_append: manifest.append_snippet(),
    };
    let content = emit::render(&headers, artifact, &snippets);

    Generated {
        artifact,
        headers,
        content,
        project_name: manifest.project_name(),
    }
}

/// Load `composer.json` from the project root.
///
/// # Errors
///
/// Returns [`MainFileError::Manifest`] if the file is missing or malformed.
pub fn load_manifest(inputs: &Inputs) -> Result<Manifest, MainFileError> {
    Ok(manifest::load(&inputs.manifest_path())?)
}

/// Run the generate command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded, the main file or the
/// fallback screenshot cannot be written, or the step output cannot be set.
pub fn run(inputs: &Inputs, log: &dyn Log, outputs: &dyn ActionOutputs) -> Result<()> {
    log.stage(&format!("Reading {MANIFEST_FILE}"));
    let manifest = load_manifest(inputs).context("reading package metadata")?;

    let generated = plan(inputs, &manifest);
    log.info(&format!(
        "{} with {} header line(s)",
        generated.artifact.label().to_lowercase(),
        generated.headers.non_empty().count()
    ));
    for (key, value) in generated.headers.non_empty() {
        log.debug(&format!("{key}: {value}"));
    }

    log.stage(&format!("Writing {}", inputs.main_file));
    let main_file = MainFile::new(inputs.main_file_path(), generated.content.as_str());
    if inputs.dry_run {
        preview_main_file(&main_file, log)?;
        log.dry_run(&format!(
            "would set output {PROJECT_NAME_OUTPUT}={}",
            generated.project_name
        ));
    } else {
        main_file.apply()?;
        log.info(&format!("{} created successfully", inputs.main_file));
        outputs
            .set_output(PROJECT_NAME_OUTPUT, &generated.project_name)
            .context("setting step output")?;
        log.debug(&format!(
            "output {PROJECT_NAME_OUTPUT}={}",
            generated.project_name
        ));
    }

    if inputs.fallback_screenshot {
        log.stage("Checking screenshot");
        let screenshot = FallbackScreenshot::new(inputs.root());
        ensure_screenshot(&screenshot, inputs.dry_run, log)?;
    }

    Ok(())
}

/// Log what writing `resource` would change, followed by its content.
fn preview_main_file(resource: &MainFile, log: &dyn Log) -> Result<()> {
    let target = resource.description();
    match resource.current_state()? {
        ResourceState::Missing => log.dry_run(&format!("would create {target}")),
        ResourceState::Correct => log.dry_run(&format!("{target} is unchanged")),
        ResourceState::Incorrect { current } => {
            log.dry_run(&format!("would replace {target} ({current})"));
        }
    }
    for line in resource.content.lines() {
        log.dry_run(&format!("|{line}"));
    }
    Ok(())
}

fn ensure_screenshot(resource: &FallbackScreenshot, dry_run: bool, log: &dyn Log) -> Result<()> {
    if dry_run {
        if resource.current_state()? == ResourceState::Missing {
            log.dry_run(&format!("would create {}", resource.description()));
        } else {
            log.debug("screenshot already present");
        }
        return Ok(());
    }

    match resource.apply()? {
        ResourceChange::Applied => log.info("Created screenshot.png"),
        ResourceChange::AlreadyCorrect => log.debug("screenshot already present"),
    }
    Ok(())
}
