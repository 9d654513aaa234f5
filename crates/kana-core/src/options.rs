//! Conversion flags and their canonical form.
//!
//! [`ConvertFlags`] is the raw bitmask callers assemble; [`ConvertOptions`] is
//! the normalized value the passes consume. Modifier flags whose direction is
//! absent are dropped during normalization, so a pass can test a modifier
//! without re-checking its prerequisite.

// Flag names double as their rendered names.
#![allow(non_upper_case_globals)]

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ConvertFlags: u32 {
        /// Halfwidth katakana, Hangul and symbols to their wide forms.
        const HalfwidthToWide = 1 << 0;
        /// Fullwidth ASCII variants and ideographic space to ASCII.
        const FullwidthToNarrow = 1 << 1;
        const KatakanaToHiragana = 1 << 2;
        const HiraganaToKatakana = 1 << 3;
        /// Wide katakana and CJK punctuation to halfwidth forms.
        const CompatWideKatakanaToHalfwidth = 1 << 4;
        /// Curly quotes and acute accent narrow to ASCII; FULLWIDTH
        /// QUOTATION MARK and APOSTROPHE stay wide.
        const CompatQuotes = 1 << 5;
        /// HORIZONTAL BAR → EM DASH, FULLWIDTH HYPHEN-MINUS → MINUS SIGN,
        /// and both narrow to `-`.
        const CompatMinus = 1 << 6;
        /// FULLWIDTH MACRON → OVERLINE; FULLWIDTH TILDE stays wide.
        const CompatOverline = 1 << 7;
        /// Fullwidth cent, pound and yen to Latin-1; FULLWIDTH WON stays wide.
        const CompatCurrency = 1 << 8;
        /// Angle brackets narrow to `<` `>`; white parentheses stay wide.
        const CompatBrackets = 1 << 9;
        const CompatOtherSymbols = 1 << 10;
        /// Leave IDEOGRAPHIC SPACE alone when narrowing.
        const CompatKeepSpaces = 1 << 11;
        /// Narrow IDEOGRAPHIC SPACE to two ASCII spaces.
        const CompatDoubleSpaces = 1 << 12;
        /// Bare halfwidth sound marks widen to the spacing marks.
        const CompatVoicedSoundMarks = 1 << 13;
        /// Keep WO and WA undecorated when a voiced mark follows.
        const CompatVoicedKanaRestriction = 1 << 14;
        const CompatKeepHalfwidthHangul = 1 << 15;
        const CompatKeepHalfwidthSymbols = 1 << 16;
        /// Limit kana conversion to letters both scripts encode in the
        /// same JIS row.
        const CompatKanaRestriction = 1 << 17;
    }
}

impl ConvertFlags {
    const NARROW_MODIFIERS: Self = Self::CompatQuotes
        .union(Self::CompatBrackets)
        .union(Self::CompatKeepSpaces)
        .union(Self::CompatDoubleSpaces);

    const WIDE_MODIFIERS: Self = Self::CompatVoicedSoundMarks
        .union(Self::CompatVoicedKanaRestriction)
        .union(Self::CompatKeepHalfwidthHangul)
        .union(Self::CompatKeepHalfwidthSymbols);

    const KANA_DIRECTIONS: Self = Self::KatakanaToHiragana.union(Self::HiraganaToKatakana);

    /// Drop modifiers whose prerequisite direction is absent and resolve the
    /// keep/double space conflict in favor of keeping. Unknown bits survive.
    pub fn normalize(self) -> Self {
        let mut flags = self;
        if !flags.contains(Self::FullwidthToNarrow) {
            flags.remove(Self::NARROW_MODIFIERS);
        }
        if flags.contains(Self::CompatKeepSpaces) {
            flags.remove(Self::CompatDoubleSpaces);
        }
        if !flags.contains(Self::HalfwidthToWide) {
            flags.remove(Self::WIDE_MODIFIERS);
        }
        if !flags.intersects(Self::KANA_DIRECTIONS) {
            flags.remove(Self::CompatKanaRestriction);
        }
        flags
    }
}

impl fmt::Display for ConvertFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0");
        }
        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                f.write_str(" | ")?;
            }
            first = false;
            f.write_str(name)?;
        }
        let residue = self.bits() & !Self::all().bits();
        if residue != 0 {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "0x{residue:x}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFlagsError {
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
}

impl FromStr for ConvertFlags {
    type Err = ParseFlagsError;

    /// Parse names separated by `|` or `,`. `"0"` and the empty string are the
    /// empty set. Hex residues are not accepted back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "0" {
            return Ok(Self::empty());
        }
        s.split(['|', ','])
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .try_fold(Self::empty(), |acc, name| {
                Self::from_name(name)
                    .map(|flag| acc | flag)
                    .ok_or_else(|| ParseFlagsError::UnknownFlag(name.to_string()))
            })
    }
}

impl Serialize for ConvertFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_names().map(|(name, _)| name))
    }
}

/// Normalized conversion options.
///
/// Constructing one always normalizes, so any value of this type already
/// satisfies the modifier/direction constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ConvertOptions(ConvertFlags);

impl ConvertOptions {
    pub fn new(flags: ConvertFlags) -> Self {
        Self(flags.normalize())
    }

    pub fn flags(self) -> ConvertFlags {
        self.0
    }

    pub fn contains(self, flags: ConvertFlags) -> bool {
        self.0.contains(flags)
    }

    pub fn intersects(self, flags: ConvertFlags) -> bool {
        self.0.intersects(flags)
    }
}

impl From<ConvertFlags> for ConvertOptions {
    fn from(flags: ConvertFlags) -> Self {
        Self::new(flags)
    }
}

impl fmt::Display for ConvertOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
