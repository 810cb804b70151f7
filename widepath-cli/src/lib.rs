//! Support library for the widepath CLI binary.
//!
//! Exposes the command and logging modules so doctests and integration
//! tests can drive commands without forking a subprocess.

pub mod cli;
pub mod logging;
