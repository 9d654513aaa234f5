use std::fs;
use std::process;

use kana_core::settings::{self, Settings};

use super::CliError;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn read_settings_file(file: &str) -> Result<String, CliError> {
    fs::read_to_string(file).map_err(|source| CliError::Read {
        path: file.to_owned(),
        source,
    })
}

/// Parse a settings file without installing it.
pub fn check_settings_file(file: &str) -> Result<Settings, CliError> {
    let content = read_settings_file(file)?;
    Ok(settings::parse_settings_toml(&content)?)
}

/// Install a settings file as the process-wide configuration.
pub fn load_settings_file(file: &str) -> Result<(), CliError> {
    let content = read_settings_file(file)?;
    settings::init_custom(content)?;
    Ok(())
}

pub fn settings_load(file: &str) {
    die!(load_settings_file(file), "Error: {}");
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let s = die!(check_settings_file(file), "Error: {}");
    println!("OK: convert.flags = {}", s.default_options());
}
