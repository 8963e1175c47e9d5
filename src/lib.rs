//! Version sync for extension metadata.
//!
//! Copies the `version` field of `package.json` into
//! `gemini-extension.json`, keeping every other field of the target and its
//! key order intact. Both files are resolved beneath an explicit project root.
//!
//! - **[`record`]** : ordered JSON object records read from and written to disk
//! - **[`sync`]** : the sync pipeline (`plan`, `sync`, `check`)
//! - **[`commands`]** : CLI mode dispatch on top of [`sync`]
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod record;
pub mod root;
pub mod sync;
