//! Lifecycle events fired by the host build and the hooks registered for them

use crate::hooks;
use anyhow::{Context, Result};
use reqstool_config::{PyProject, ReqstoolConfig};
use std::fmt;
use std::path::{Path, PathBuf};

/// A point in the package build the host notifies us about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// Before the package is built: generate annotations and the manifest
    BuildStart,
    /// Before the package is installed: extend the include list
    InstallStart,
    /// After the build finished: remove the manifest
    BuildTerminate,
}

impl LifecycleEvent {
    pub const ALL: [LifecycleEvent; 3] = [
        LifecycleEvent::BuildStart,
        LifecycleEvent::InstallStart,
        LifecycleEvent::BuildTerminate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LifecycleEvent::BuildStart => "build-start",
            LifecycleEvent::InstallStart => "install-start",
            LifecycleEvent::BuildTerminate => "build-terminate",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a hook needs, read fresh for every invocation
#[derive(Debug, Clone)]
pub struct HookContext {
    pub project: PyProject,
    pub config: ReqstoolConfig,
    /// Interpreter requested on the command line, if any
    pub python: Option<PathBuf>,
}

impl HookContext {
    pub fn load(project_dir: &Path, python: Option<PathBuf>) -> Result<Self> {
        let project = PyProject::load_from_dir(project_dir)?;
        let config = project
            .reqstool_config()
            .with_context(|| format!("Invalid [tool.reqstool] in {}", project.path().display()))?;
        Ok(Self {
            project,
            config,
            python,
        })
    }

    /// Project root; every configured path is relative to it
    pub fn root(&self) -> &Path {
        self.project.root_dir()
    }
}

pub type Handler = fn(&HookContext) -> Result<()>;

/// Registration table: which hook runs for which event
pub const HANDLERS: &[(LifecycleEvent, Handler)] = &[
    (LifecycleEvent::BuildStart, hooks::build_start::run),
    (LifecycleEvent::InstallStart, hooks::install_start::run),
    (LifecycleEvent::BuildTerminate, hooks::build_terminate::run),
];

pub fn handler_for(event: LifecycleEvent) -> Option<Handler> {
    HANDLERS
        .iter()
        .find(|(registered, _)| *registered == event)
        .map(|(_, handler)| *handler)
}

/// Run the hook registered for `event`
pub fn dispatch(event: LifecycleEvent, ctx: &HookContext) -> Result<()> {
    let handler =
        handler_for(event).with_context(|| format!("No hook registered for {}", event))?;
    tracing::debug!("Dispatching {}", event);
    handler(ctx).with_context(|| format!("{} hook failed", event))
}
