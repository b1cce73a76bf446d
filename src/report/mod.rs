//! Output for an update run.
//!
//! - [`terminal`] — colored status lines, summary, and the `--verbose` library table.
//! - [`json`] — machine-readable run summary for `--report json`.

pub mod json;
pub mod terminal;
