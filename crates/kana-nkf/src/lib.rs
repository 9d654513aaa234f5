//! NKF-compatible front end to the kana/width converter.
//!
//! NKF is an encoding converter first; only its kana and width options are
//! reproduced here. Input and output are always UTF-8, which is why `-w`,
//! `-W` and `-m0` are mandatory in every option string.
//!
//! ```
//! let out = kana_nkf::convert("ＡＢＣ　ＤＥＦ", "-w -W -m0 -Z1").unwrap();
//! assert_eq!(out, "ABC DEF");
//! ```

mod error;
mod optparse;


use tracing::debug_span;

pub use error::{OptionError, RequiredOption};
pub use optparse::{group_end, parse_options, ParsedOptions};

/// Convert `input` as `nkf <options>` would.
///
/// On an option error nothing is converted; `input` is still the caller's
/// to use unchanged.
///
/// Supported options:
///
/// - `-w`/`-w8`/`--utf8`, `-W`/`-W8`/`--utf8-input`, `-m0`: required.
/// - `-X` (default) widens halfwidth katakana; `-x` turns that off.
/// - `-Z`/`-Z0` narrows fullwidth ASCII but keeps the ideographic space;
///   `-Z1` narrows it to one space, `-Z2` to two, `-Z4` also turns wide
///   katakana halfwidth.
/// - `-h`/`-h1`/`--hiragana`, `-h2`/`--katakana`, `-h3`/`--katakana-hiragana`
///   convert between katakana and hiragana.
pub fn convert(input: &str, options: &str) -> Result<String, OptionError> {
    let _span = debug_span!("nkf_convert", options).entered();
    let parsed = parse_options(options)?;
    Ok(kana_core::convert(input, parsed))
}
