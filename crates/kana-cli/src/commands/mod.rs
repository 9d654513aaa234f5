//! Subcommand implementations for `kanatool`.
//!
//! Each `*_cmd` / top-level function prints to stdout and exits the process
//! on failure. The fallible halves are exposed separately so they can be
//! tested without a process boundary.

use std::io;

use kana_core::settings::SettingsError;
use kana_core::ParseFlagsError;
use kana_nkf::OptionError;

pub mod config_ops;
pub mod convert_ops;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("reading {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Flags(#[from] ParseFlagsError),
    #[error(transparent)]
    Nkf(#[from] OptionError),
}
