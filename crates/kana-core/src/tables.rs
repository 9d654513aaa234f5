//! Static lookup tables driving the conversion passes.
//!
//! Every table is sorted by key and queried with [`lookup`], so each one is a
//! plain slice in read-only memory with no initialization step.

/// Binary-search a sorted `(key, value)` table.
pub fn lookup<V: Copy>(table: &[(char, V)], ch: char) -> Option<V> {
    table
        .binary_search_by_key(&ch, |&(k, _)| k)
        .ok()
        .map(|i| table[i].1)
}

// --- Unconditional compatibility substitutions ---

pub const COMPAT_MINUS: &[(char, char)] = &[
    ('\u{2015}', '\u{2014}'), // HORIZONTAL BAR → EM DASH
    ('\u{FF0D}', '\u{2212}'), // FULLWIDTH HYPHEN-MINUS → MINUS SIGN
];

pub const COMPAT_OVERLINE: &[(char, char)] = &[
    ('\u{FFE3}', '\u{203E}'), // FULLWIDTH MACRON → OVERLINE
];

pub const COMPAT_CURRENCY: &[(char, char)] = &[
    ('\u{FFE0}', '\u{00A2}'),
    ('\u{FFE1}', '\u{00A3}'),
    ('\u{FFE5}', '\u{00A5}'),
];

pub const COMPAT_OTHER_SYMBOLS: &[(char, char)] = &[
    ('\u{2225}', '\u{2016}'), // PARALLEL TO → DOUBLE VERTICAL LINE
    ('\u{FFE2}', '\u{00AC}'),
    ('\u{FFE4}', '\u{00A6}'),
];

// --- Fullwidth → narrow ---

/// Fullwidth forms outside the linear ASCII range.
pub const FULLWIDTH_EXCEPTIONS: &[(char, char)] = &[
    ('\u{FF5F}', '\u{2985}'),
    ('\u{FF60}', '\u{2986}'),
    ('\u{FFE0}', '\u{00A2}'),
    ('\u{FFE1}', '\u{00A3}'),
    ('\u{FFE2}', '\u{00AC}'),
    // NFKC gives U+0020 U+0304 here; a bare macron is what callers expect.
    ('\u{FFE3}', '\u{00AF}'),
    ('\u{FFE4}', '\u{00A6}'),
    ('\u{FFE5}', '\u{00A5}'),
    ('\u{FFE6}', '\u{20A9}'),
];

// --- Wide katakana → halfwidth ---

/// Ordinary kana and punctuation to one or two halfwidth code points.
/// Voiced letters decompose into base + HALFWIDTH KATAKANA VOICED SOUND MARK.
pub const WIDE_KATAKANA_TO_HALFWIDTH: &[(char, &str)] = &[
    ('\u{3001}', "\u{FF64}"),
    ('\u{3002}', "\u{FF61}"),
    ('\u{300C}', "\u{FF62}"),
    ('\u{300D}', "\u{FF63}"),
    ('\u{3099}', "\u{FF9E}"),
    ('\u{309A}', "\u{FF9F}"),
    ('\u{309B}', "\u{FF9E}"),
    ('\u{309C}', "\u{FF9F}"),
    ('\u{30A1}', "\u{FF67}"),
    ('\u{30A2}', "\u{FF71}"),
    ('\u{30A3}', "\u{FF68}"),
    ('\u{30A4}', "\u{FF72}"),
    ('\u{30A5}', "\u{FF69}"),
    ('\u{30A6}', "\u{FF73}"),
    ('\u{30A7}', "\u{FF6A}"),
    ('\u{30A8}', "\u{FF74}"),
    ('\u{30A9}', "\u{FF6B}"),
    ('\u{30AA}', "\u{FF75}"),
    ('\u{30AB}', "\u{FF76}"),
    ('\u{30AC}', "\u{FF76}\u{FF9E}"),
    ('\u{30AD}', "\u{FF77}"),
    ('\u{30AE}', "\u{FF77}\u{FF9E}"),
    ('\u{30AF}', "\u{FF78}"),
    ('\u{30B0}', "\u{FF78}\u{FF9E}"),
    ('\u{30B1}', "\u{FF79}"),
    ('\u{30B2}', "\u{FF79}\u{FF9E}"),
    ('\u{30B3}', "\u{FF7A}"),
    ('\u{30B4}', "\u{FF7A}\u{FF9E}"),
    ('\u{30B5}', "\u{FF7B}"),
    ('\u{30B6}', "\u{FF7B}\u{FF9E}"),
    ('\u{30B7}', "\u{FF7C}"),
    ('\u{30B8}', "\u{FF7C}\u{FF9E}"),
    ('\u{30B9}', "\u{FF7D}"),
    ('\u{30BA}', "\u{FF7D}\u{FF9E}"),
    ('\u{30BB}', "\u{FF7E}"),
    ('\u{30BC}', "\u{FF7E}\u{FF9E}"),
    ('\u{30BD}', "\u{FF7F}"),
    ('\u{30BE}', "\u{FF7F}\u{FF9E}"),
    ('\u{30BF}', "\u{FF80}"),
    ('\u{30C0}', "\u{FF80}\u{FF9E}"),
    ('\u{30C1}', "\u{FF81}"),
    ('\u{30C2}', "\u{FF81}\u{FF9E}"),
    ('\u{30C3}', "\u{FF6F}"),
    ('\u{30C4}', "\u{FF82}"),
    ('\u{30C5}', "\u{FF82}\u{FF9E}"),
    ('\u{30C6}', "\u{FF83}"),
    ('\u{30C7}', "\u{FF83}\u{FF9E}"),
    ('\u{30C8}', "\u{FF84}"),
    ('\u{30C9}', "\u{FF84}\u{FF9E}"),
    ('\u{30CA}', "\u{FF85}"),
    ('\u{30CB}', "\u{FF86}"),
    ('\u{30CC}', "\u{FF87}"),
    ('\u{30CD}', "\u{FF88}"),
    ('\u{30CE}', "\u{FF89}"),
    ('\u{30CF}', "\u{FF8A}"),
    ('\u{30D0}', "\u{FF8A}\u{FF9E}"),
    ('\u{30D1}', "\u{FF8A}\u{FF9F}"),
    ('\u{30D2}', "\u{FF8B}"),
    ('\u{30D3}', "\u{FF8B}\u{FF9E}"),
    ('\u{30D4}', "\u{FF8B}\u{FF9F}"),
    ('\u{30D5}', "\u{FF8C}"),
    ('\u{30D6}', "\u{FF8C}\u{FF9E}"),
    ('\u{30D7}', "\u{FF8C}\u{FF9F}"),
    ('\u{30D8}', "\u{FF8D}"),
    ('\u{30D9}', "\u{FF8D}\u{FF9E}"),
    ('\u{30DA}', "\u{FF8D}\u{FF9F}"),
    ('\u{30DB}', "\u{FF8E}"),
    ('\u{30DC}', "\u{FF8E}\u{FF9E}"),
    ('\u{30DD}', "\u{FF8E}\u{FF9F}"),
    ('\u{30DE}', "\u{FF8F}"),
    ('\u{30DF}', "\u{FF90}"),
    ('\u{30E0}', "\u{FF91}"),
    ('\u{30E1}', "\u{FF92}"),
    ('\u{30E2}', "\u{FF93}"),
    ('\u{30E3}', "\u{FF6C}"),
    ('\u{30E4}', "\u{FF94}"),
    ('\u{30E5}', "\u{FF6D}"),
    ('\u{30E6}', "\u{FF95}"),
    ('\u{30E7}', "\u{FF6E}"),
    ('\u{30E8}', "\u{FF96}"),
    ('\u{30E9}', "\u{FF97}"),
    ('\u{30EA}', "\u{FF98}"),
    ('\u{30EB}', "\u{FF99}"),
    ('\u{30EC}', "\u{FF9A}"),
    ('\u{30ED}', "\u{FF9B}"),
    ('\u{30EF}', "\u{FF9C}"),
    ('\u{30F2}', "\u{FF66}"),
    ('\u{30F3}', "\u{FF9D}"),
    ('\u{30F4}', "\u{FF73}\u{FF9E}"),
    ('\u{30FB}', "\u{FF65}"),
    ('\u{30FC}', "\u{FF70}"),
];

// --- Halfwidth → wide ---

pub const HALFWIDTH_TO_WIDE: &[(char, char)] = &[
    // Katakana and the punctuation that travels with it
    ('\u{FF61}', '\u{3002}'),
    ('\u{FF62}', '\u{300C}'),
    ('\u{FF63}', '\u{300D}'),
    ('\u{FF64}', '\u{3001}'),
    ('\u{FF65}', '\u{30FB}'),
    ('\u{FF66}', '\u{30F2}'),
    ('\u{FF67}', '\u{30A1}'),
    ('\u{FF68}', '\u{30A3}'),
    ('\u{FF69}', '\u{30A5}'),
    ('\u{FF6A}', '\u{30A7}'),
    ('\u{FF6B}', '\u{30A9}'),
    ('\u{FF6C}', '\u{30E3}'),
    ('\u{FF6D}', '\u{30E5}'),
    ('\u{FF6E}', '\u{30E7}'),
    ('\u{FF6F}', '\u{30C3}'),
    ('\u{FF70}', '\u{30FC}'),
    ('\u{FF71}', '\u{30A2}'),
    ('\u{FF72}', '\u{30A4}'),
    ('\u{FF73}', '\u{30A6}'),
    ('\u{FF74}', '\u{30A8}'),
    ('\u{FF75}', '\u{30AA}'),
    ('\u{FF76}', '\u{30AB}'),
    ('\u{FF77}', '\u{30AD}'),
    ('\u{FF78}', '\u{30AF}'),
    ('\u{FF79}', '\u{30B1}'),
    ('\u{FF7A}', '\u{30B3}'),
    ('\u{FF7B}', '\u{30B5}'),
    ('\u{FF7C}', '\u{30B7}'),
    ('\u{FF7D}', '\u{30B9}'),
    ('\u{FF7E}', '\u{30BB}'),
    ('\u{FF7F}', '\u{30BD}'),
    ('\u{FF80}', '\u{30BF}'),
    ('\u{FF81}', '\u{30C1}'),
    ('\u{FF82}', '\u{30C4}'),
    ('\u{FF83}', '\u{30C6}'),
    ('\u{FF84}', '\u{30C8}'),
    ('\u{FF85}', '\u{30CA}'),
    ('\u{FF86}', '\u{30CB}'),
    ('\u{FF87}', '\u{30CC}'),
    ('\u{FF88}', '\u{30CD}'),
    ('\u{FF89}', '\u{30CE}'),
    ('\u{FF8A}', '\u{30CF}'),
    ('\u{FF8B}', '\u{30D2}'),
    ('\u{FF8C}', '\u{30D5}'),
    ('\u{FF8D}', '\u{30D8}'),
    ('\u{FF8E}', '\u{30DB}'),
    ('\u{FF8F}', '\u{30DE}'),
    ('\u{FF90}', '\u{30DF}'),
    ('\u{FF91}', '\u{30E0}'),
    ('\u{FF92}', '\u{30E1}'),
    ('\u{FF93}', '\u{30E2}'),
    ('\u{FF94}', '\u{30E4}'),
    ('\u{FF95}', '\u{30E6}'),
    ('\u{FF96}', '\u{30E8}'),
    ('\u{FF97}', '\u{30E9}'),
    ('\u{FF98}', '\u{30EA}'),
    ('\u{FF99}', '\u{30EB}'),
    ('\u{FF9A}', '\u{30EC}'),
    ('\u{FF9B}', '\u{30ED}'),
    ('\u{FF9C}', '\u{30EF}'),
    ('\u{FF9D}', '\u{30F3}'),
    // The halfwidth marks are spacing characters, but they widen to the
    // combining marks, as NFKC does. Compat mode picks the spacing marks.
    ('\u{FF9E}', '\u{3099}'),
    ('\u{FF9F}', '\u{309A}'),
    // Hangul Compatibility Jamo, not conjoining jamo: these carry no
    // leading/trailing distinction, so no syllable composition is attempted.
    ('\u{FFA0}', '\u{3164}'),
    ('\u{FFA1}', '\u{3131}'),
    ('\u{FFA2}', '\u{3132}'),
    ('\u{FFA3}', '\u{3133}'),
    ('\u{FFA4}', '\u{3134}'),
    ('\u{FFA5}', '\u{3135}'),
    ('\u{FFA6}', '\u{3136}'),
    ('\u{FFA7}', '\u{3137}'),
    ('\u{FFA8}', '\u{3138}'),
    ('\u{FFA9}', '\u{3139}'),
    ('\u{FFAA}', '\u{313A}'),
    ('\u{FFAB}', '\u{313B}'),
    ('\u{FFAC}', '\u{313C}'),
    ('\u{FFAD}', '\u{313D}'),
    ('\u{FFAE}', '\u{313E}'),
    ('\u{FFAF}', '\u{313F}'),
    ('\u{FFB0}', '\u{3140}'),
    ('\u{FFB1}', '\u{3141}'),
    ('\u{FFB2}', '\u{3142}'),
    ('\u{FFB3}', '\u{3143}'),
    ('\u{FFB4}', '\u{3144}'),
    ('\u{FFB5}', '\u{3145}'),
    ('\u{FFB6}', '\u{3146}'),
    ('\u{FFB7}', '\u{3147}'),
    ('\u{FFB8}', '\u{3148}'),
    ('\u{FFB9}', '\u{3149}'),
    ('\u{FFBA}', '\u{314A}'),
    ('\u{FFBB}', '\u{314B}'),
    ('\u{FFBC}', '\u{314C}'),
    ('\u{FFBD}', '\u{314D}'),
    ('\u{FFBE}', '\u{314E}'),
    ('\u{FFC2}', '\u{314F}'),
    ('\u{FFC3}', '\u{3150}'),
    ('\u{FFC4}', '\u{3151}'),
    ('\u{FFC5}', '\u{3152}'),
    ('\u{FFC6}', '\u{3153}'),
    ('\u{FFC7}', '\u{3154}'),
    ('\u{FFCA}', '\u{3155}'),
    ('\u{FFCB}', '\u{3156}'),
    ('\u{FFCC}', '\u{3157}'),
    ('\u{FFCD}', '\u{3158}'),
    ('\u{FFCE}', '\u{3159}'),
    ('\u{FFCF}', '\u{315A}'),
    ('\u{FFD2}', '\u{315B}'),
    ('\u{FFD3}', '\u{315C}'),
    ('\u{FFD4}', '\u{315D}'),
    ('\u{FFD5}', '\u{315E}'),
    ('\u{FFD6}', '\u{315F}'),
    ('\u{FFD7}', '\u{3160}'),
    ('\u{FFDA}', '\u{3161}'),
    ('\u{FFDB}', '\u{3162}'),
    ('\u{FFDC}', '\u{3163}'),
    // Symbols. HALFWIDTH FORMS LIGHT VERTICAL has no decomposition; the box
    // drawing vertical is its closest general-purpose counterpart.
    ('\u{FFE8}', '\u{2502}'),
    ('\u{FFE9}', '\u{2190}'),
    ('\u{FFEA}', '\u{2191}'),
    ('\u{FFEB}', '\u{2192}'),
    ('\u{FFEC}', '\u{2193}'),
    ('\u{FFED}', '\u{25A0}'),
    ('\u{FFEE}', '\u{25CB}'),
];

/// Halfwidth base followed by HALFWIDTH KATAKANA VOICED SOUND MARK.
pub const HALFWIDTH_VOICED: &[(char, char)] = &[
    ('\u{FF66}', '\u{30FA}'),
    ('\u{FF73}', '\u{30F4}'),
    ('\u{FF76}', '\u{30AC}'),
    ('\u{FF77}', '\u{30AE}'),
    ('\u{FF78}', '\u{30B0}'),
    ('\u{FF79}', '\u{30B2}'),
    ('\u{FF7A}', '\u{30B4}'),
    ('\u{FF7B}', '\u{30B6}'),
    ('\u{FF7C}', '\u{30B8}'),
    ('\u{FF7D}', '\u{30BA}'),
    ('\u{FF7E}', '\u{30BC}'),
    ('\u{FF7F}', '\u{30BE}'),
    ('\u{FF80}', '\u{30C0}'),
    ('\u{FF81}', '\u{30C2}'),
    ('\u{FF82}', '\u{30C5}'),
    ('\u{FF83}', '\u{30C7}'),
    ('\u{FF84}', '\u{30C9}'),
    ('\u{FF8A}', '\u{30D0}'),
    ('\u{FF8B}', '\u{30D3}'),
    ('\u{FF8C}', '\u{30D6}'),
    ('\u{FF8D}', '\u{30D9}'),
    ('\u{FF8E}', '\u{30DC}'),
    ('\u{FF9C}', '\u{30F7}'),
];

/// Halfwidth base followed by HALFWIDTH KATAKANA SEMI-VOICED SOUND MARK.
pub const HALFWIDTH_SEMI_VOICED: &[(char, char)] = &[
    ('\u{FF8A}', '\u{30D1}'),
    ('\u{FF8B}', '\u{30D4}'),
    ('\u{FF8C}', '\u{30D7}'),
    ('\u{FF8D}', '\u{30DA}'),
    ('\u{FF8E}', '\u{30DD}'),
];

/// Halfwidth bases whose voiced precomposition is not canonical
/// (WO → VO, WA → VA). Legacy converters leave them decomposed.
pub const NONCANONICAL_VOICED_BASES: [char; 2] = ['\u{FF66}', '\u{FF9C}'];

// --- Katakana ↔ hiragana ---

/// KATAKANA LETTER VA..VO decompose to hiragana + combining voiced mark.
pub const KATAKANA_V_SERIES: &[(char, char)] = &[
    ('\u{30F7}', '\u{308F}'),
    ('\u{30F8}', '\u{3090}'),
    ('\u{30F9}', '\u{3091}'),
    ('\u{30FA}', '\u{3092}'),
];

/// Small Kana Extension: katakana to hiragana. Read right-to-left for the
/// reverse direction.
pub const SMALL_KANA_SUPPLEMENT: &[(char, char)] = &[
    ('\u{1B155}', '\u{1B132}'), // SMALL KO
    ('\u{1B164}', '\u{1B150}'), // SMALL WI
    ('\u{1B165}', '\u{1B151}'), // SMALL WE
    ('\u{1B166}', '\u{1B152}'), // SMALL WO
];

/// Reverse lookup in [`SMALL_KANA_SUPPLEMENT`]. The hiragana column is sorted
/// in the same order, so binary search still applies.
pub fn small_hiragana_to_katakana(ch: char) -> Option<char> {
    SMALL_KANA_SUPPLEMENT
        .binary_search_by_key(&ch, |&(_, h)| h)
        .ok()
        .map(|i| SMALL_KANA_SUPPLEMENT[i].0)
}
