use super::convert;
use crate::options::ConvertFlags as F;

/// One fixture: convert `$input` under `$flags` and compare verbatim.
macro_rules! case {
    ($name:ident, $flags:expr, $input:expr, $expect:expr) => {
        #[test]
        fn $name() {
            assert_eq!($crate::convert::convert($input, $flags), $expect);
        }
    };
}


#[test]
fn empty_input() {
    assert_eq!(convert("", F::all()), "");
}

#[test]
fn no_flags_is_identity() {
    let text = "ＡＢＣ　ｱｲｳ　カナ かな";
    assert_eq!(convert(text, F::empty()), text);
}

#[test]
fn fullwidth_example() {
    assert_eq!(convert("ＡＢＣ　ＤＥＦ", F::FullwidthToNarrow), "ABC DEF");
}

#[test]
fn orphan_modifiers_have_no_effect() {
    // Normalization strips these before any pass is built.
    let text = "〈〉＂　ﾞﾟ\u{FFA0}￩ヵ";
    let flags = F::CompatQuotes
        | F::CompatBrackets
        | F::CompatDoubleSpaces
        | F::CompatVoicedSoundMarks
        | F::CompatKeepHalfwidthHangul
        | F::CompatKeepHalfwidthSymbols
        | F::CompatKanaRestriction;
    assert_eq!(convert(text, flags), text);
}

#[test]
fn mark_at_end_of_input() {
    assert_eq!(convert("ｶ", F::HalfwidthToWide), "カ");
    assert_eq!(convert("ｶﾞ", F::HalfwidthToWide), "ガ");
    assert_eq!(convert("ﾊﾟﾊ", F::HalfwidthToWide), "パハ");
}

#[test]
fn composed_mark_is_not_reused() {
    // The mark joins the base before it and is then gone.
    assert_eq!(convert("ｶﾞﾞ", F::HalfwidthToWide), "ガ\u{3099}");
    assert_eq!(
        convert("ｶﾞﾞ", F::HalfwidthToWide | F::CompatVoicedSoundMarks),
        "ガ゛"
    );
}

#[test]
fn passes_see_each_other() {
    // Widened halfwidth katakana continues into the kana pass.
    assert_eq!(
        convert("ｶﾞｷﾞ", F::HalfwidthToWide | F::KatakanaToHiragana),
        "がぎ"
    );
    // Narrowing and widening in one call.
    assert_eq!(
        convert("Ａｱ", F::FullwidthToNarrow | F::HalfwidthToWide),
        "Aア"
    );
}

#[test]
fn double_and_keep_spaces() {
    let narrow = F::FullwidthToNarrow;
    assert_eq!(convert("a　b", narrow), "a b");
    assert_eq!(convert("a　b", narrow | F::CompatDoubleSpaces), "a  b");
    assert_eq!(convert("a　b", narrow | F::CompatKeepSpaces), "a　b");
    assert_eq!(
        convert("a　b", narrow | F::CompatKeepSpaces | F::CompatDoubleSpaces),
        "a　b"
    );
}

#[test]
fn wide_katakana_to_halfwidth() {
    assert_eq!(
        convert("「ガッパ」、。", F::CompatWideKatakanaToHalfwidth),
        "｢ｶﾞｯﾊﾟ｣､｡"
    );
    assert_eq!(convert("ヴ・ー", F::CompatWideKatakanaToHalfwidth), "ｳﾞ･ｰ");
    // Letters without a halfwidth form stay wide.
    assert_eq!(
        convert("ヮヰヱヵヶヷヽ", F::CompatWideKatakanaToHalfwidth),
        "ヮヰヱヵヶヷヽ"
    );
}

#[test]
fn voiced_kana_restriction() {
    let wide = F::HalfwidthToWide | F::CompatVoicedKanaRestriction;
    assert_eq!(convert("ｦﾞﾜﾞ", wide), "ヲ\u{3099}ワ\u{3099}");
    assert_eq!(convert("ｶﾞｳﾞ", wide), "ガヴ");
    assert_eq!(
        convert("ｦﾞﾜﾞ", wide | F::CompatVoicedSoundMarks),
        "ヲ゛ワ゛"
    );
}
