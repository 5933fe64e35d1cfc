//! Hook implementations, one module per lifecycle event

pub mod build_start;
pub mod build_terminate;
pub mod install_start;
