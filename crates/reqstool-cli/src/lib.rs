//! reqstool-poetry library - expose modules for testing
//!
//! Hooks a Poetry build calls at build-start, install-start and
//! build-terminate to package reqstool traceability data.

pub mod commands;
pub mod common;
pub mod hooks;
pub mod lifecycle;

pub use common::GlobalOpts;
pub use lifecycle::{dispatch, HookContext, LifecycleEvent};
