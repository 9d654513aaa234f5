//! Parser for the kana/width subset of NKF's command-line options.
//!
//! The option string is split on single spaces. Each token is either a
//! long option (`--hiragana`), which is rewritten to its short form, or a
//! run of short options (`-wWm0`), which is cut into groups by
//! [`group_end`] and matched group by group.

use kana_core::{ConvertFlags, ConvertOptions};
use tracing::debug;

use crate::error::{OptionError, RequiredOption};

type F = ConvertFlags;

/// Long options and the short group each one stands for.
const LONG_OPTIONS: &[(&str, &str)] = &[
    ("hiragana", "h1"),
    ("katakana", "h2"),
    ("katakana-hiragana", "h3"),
    ("utf8", "w"),
    ("utf8-input", "W"),
];

/// Two-letter MIME mode codes that form a group of their own.
const MIME_MODES: &[u8] = b"BQNS";

/// Parse `text` and project it onto engine options.
///
/// Fails on the first unrecognized token, or when `-w`, `-W` or `-m0` is
/// missing (reported in that order).
pub fn parse_options(text: &str) -> Result<ConvertOptions, OptionError> {
    let parsed = ParsedOptions::parse(text)?;
    parsed.check_required()?;
    let flags = parsed.to_flags();
    debug!(%flags, "parsed nkf options");
    Ok(ConvertOptions::new(flags))
}

/// What an option string asked for, before projection onto engine flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedOptions {
    pub utf8_output: bool,
    pub utf8_input: bool,
    pub no_mime: bool,
    pub katakana_to_hiragana: bool,
    pub hiragana_to_katakana: bool,
    pub fullwidth_to_narrow: bool,
    /// `-Z1`: ideographic space becomes one ASCII space.
    pub ideographic_space_to_narrow: bool,
    /// `-Z2`: ideographic space becomes two ASCII spaces.
    pub double_ideographic_space: bool,
    /// `-Z4`: wide katakana becomes halfwidth.
    pub wide_katakana_to_halfwidth: bool,
    /// On unless `-x` is given; NKF widens halfwidth katakana by default.
    pub halfwidth_to_wide: bool,
}

impl Default for ParsedOptions {
    fn default() -> Self {
        Self {
            utf8_output: false,
            utf8_input: false,
            no_mime: false,
            katakana_to_hiragana: false,
            hiragana_to_katakana: false,
            fullwidth_to_narrow: false,
            ideographic_space_to_narrow: false,
            double_ideographic_space: false,
            wide_katakana_to_halfwidth: false,
            halfwidth_to_wide: true,
        }
    }
}

impl ParsedOptions {
    /// Scan every token of `text`. Required options are not checked here.
    pub fn parse(text: &str) -> Result<Self, OptionError> {
        let mut parsed = Self::default();
        for token in text.split(' ').filter(|t| !t.is_empty()) {
            parsed.apply_token(token)?;
        }
        Ok(parsed)
    }

    pub fn check_required(&self) -> Result<(), OptionError> {
        let missing = [
            (self.utf8_output, RequiredOption::Utf8Output),
            (self.utf8_input, RequiredOption::Utf8Input),
            (self.no_mime, RequiredOption::NoMimeDecode),
        ]
        .into_iter()
        .find_map(|(present, option)| (!present).then_some(option));
        match missing {
            Some(option) => Err(OptionError::MissingRequired(option)),
            None => Ok(()),
        }
    }

    /// Each requested behavior brings its fixed bundle of compatibility
    /// flags; the unconditional substitutions are always on.
    pub fn to_flags(&self) -> ConvertFlags {
        let mut flags =
            F::CompatMinus | F::CompatOverline | F::CompatCurrency | F::CompatOtherSymbols;
        if self.katakana_to_hiragana {
            flags |= F::KatakanaToHiragana | F::CompatKanaRestriction;
        }
        if self.hiragana_to_katakana {
            flags |= F::HiraganaToKatakana | F::CompatKanaRestriction;
        }
        if self.fullwidth_to_narrow {
            flags |= F::FullwidthToNarrow | F::CompatQuotes | F::CompatBrackets | F::CompatKeepSpaces;
        }
        if self.ideographic_space_to_narrow {
            flags.remove(F::CompatKeepSpaces);
        } else if self.double_ideographic_space {
            flags.remove(F::CompatKeepSpaces);
            flags |= F::CompatDoubleSpaces;
        }
        if self.wide_katakana_to_halfwidth {
            flags |= F::CompatWideKatakanaToHalfwidth;
        }
        if self.halfwidth_to_wide {
            flags |= F::HalfwidthToWide
                | F::CompatVoicedSoundMarks
                | F::CompatVoicedKanaRestriction
                | F::CompatKeepHalfwidthHangul
                | F::CompatKeepHalfwidthSymbols;
        }
        flags
    }

    fn apply_token(&mut self, token: &str) -> Result<(), OptionError> {
        let invalid = || OptionError::InvalidOption(token.to_string());
        let Some(body) = token.strip_prefix('-').filter(|b| !b.is_empty()) else {
            return Err(invalid());
        };
        match body.strip_prefix('-') {
            Some(long) => {
                let short = LONG_OPTIONS
                    .iter()
                    .find(|(name, _)| *name == long)
                    .map(|&(_, short)| short)
                    .ok_or_else(invalid)?;
                self.apply_short(short)
            }
            None => self.apply_short(body),
        }
    }

    fn apply_short(&mut self, text: &str) -> Result<(), OptionError> {
        let mut start = 0;
        while start < text.len() {
            let end = group_end(text, start);
            self.apply_group(&text[start..end])?;
            start = end;
        }
        Ok(())
    }

    fn apply_group(&mut self, group: &str) -> Result<(), OptionError> {
        debug!(group, "nkf option");
        match group {
            "h" | "h1" => self.katakana_to_hiragana = true,
            "h2" => self.hiragana_to_katakana = true,
            "h3" => {
                self.katakana_to_hiragana = true;
                self.hiragana_to_katakana = true;
            }
            "w" | "w8" => self.utf8_output = true,
            "W" | "W8" => self.utf8_input = true,
            "Z" | "Z0" => self.fullwidth_to_narrow = true,
            "Z1" => {
                self.fullwidth_to_narrow = true;
                self.ideographic_space_to_narrow = true;
            }
            "Z2" => {
                self.fullwidth_to_narrow = true;
                self.double_ideographic_space = true;
            }
            "Z4" => {
                self.fullwidth_to_narrow = true;
                self.wide_katakana_to_halfwidth = true;
            }
            "x" => self.halfwidth_to_wide = false,
            "X" => self.halfwidth_to_wide = true,
            "m0" => self.no_mime = true,
            _ => return Err(OptionError::InvalidOption(format!("-{group}"))),
        }
        Ok(())
    }
}

/// End (exclusive byte offset) of the short-option group starting at
/// `start`.
///
/// A group is one option character followed by any run of ASCII digits;
/// `m` followed by one of `B`, `Q`, `N`, `S` also belongs together. `start`
/// must lie on a character boundary; past the end it returns `text.len()`.
pub fn group_end(text: &str, start: usize) -> usize {
    let Some(first) = text.get(start..).and_then(|rest| rest.chars().next()) else {
        return text.len();
    };
    let bytes = text.as_bytes();
    let mut end = start + first.len_utf8();
    while end < bytes.len() {
        let mime = first == 'm' && end == start + 1 && MIME_MODES.contains(&bytes[end]);
        if mime || bytes[end].is_ascii_digit() {
            end += 1;
        } else {
            break;
        }
    }
    end
}
