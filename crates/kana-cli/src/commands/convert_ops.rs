use std::fs;
use std::io;
use std::process;

use kana_core::settings::settings;
use kana_core::{ConvertFlags, ConvertOptions};
use tracing::debug;

use super::CliError;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Where the text to convert comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Text(&'a str),
    File(&'a str),
    Stdin,
}

impl<'a> Input<'a> {
    pub fn new(text: Option<&'a str>, file: Option<&'a str>) -> Self {
        match (text, file) {
            (Some(text), _) => Input::Text(text),
            (None, Some(path)) => Input::File(path),
            (None, None) => Input::Stdin,
        }
    }

    pub fn read(self) -> Result<String, CliError> {
        match self {
            Input::Text(text) => Ok(text.to_owned()),
            Input::File(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_owned(),
                source,
            }),
            Input::Stdin => io::read_to_string(io::stdin()).map_err(|source| CliError::Read {
                path: "<stdin>".to_owned(),
                source,
            }),
        }
    }
}

/// Pick the options for a run: explicit flag names, an NKF option string,
/// or the configured defaults when neither is given.
pub fn resolve_options(
    flags: Option<&str>,
    nkf: Option<&str>,
) -> Result<ConvertOptions, CliError> {
    let options = match (flags, nkf) {
        (Some(names), _) => ConvertOptions::new(names.parse::<ConvertFlags>()?),
        (None, Some(nkf)) => kana_nkf::parse_options(nkf)?,
        (None, None) => settings().default_options(),
    };
    debug!(%options, "resolved options");
    Ok(options)
}

pub fn convert_text(
    input: Input<'_>,
    flags: Option<&str>,
    nkf: Option<&str>,
) -> Result<String, CliError> {
    let options = resolve_options(flags, nkf)?;
    let text = input.read()?;
    Ok(kana_core::convert(&text, options))
}

pub fn convert_cmd(text: Option<&str>, file: Option<&str>, flags: Option<&str>, nkf: Option<&str>) {
    let input = Input::new(text, file);
    let out = die!(convert_text(input, flags, nkf), "Error: {}");
    if matches!(input, Input::Text(_)) {
        println!("{out}");
    } else {
        print!("{out}");
    }
}

pub fn flags_cmd(names: Option<&str>, nkf: Option<&str>, json: bool) {
    let options = die!(resolve_options(names, nkf), "Error: {}");
    if json {
        let rendered = die!(serde_json::to_string(&options), "Error: {}");
        println!("{rendered}");
    } else {
        println!("{options} (0x{:05x})", options.flags().bits());
    }
}
