use std::collections::VecDeque;

use crate::options::{ConvertFlags, ConvertOptions};
use crate::stream::{Produce, RuneStream};
use crate::tables::{lookup, small_hiragana_to_katakana, KATAKANA_V_SERIES, SMALL_KANA_SUPPLEMENT};
use crate::unicode::{
    is_core_hiragana, is_core_katakana, is_hiragana_iteration_mark, is_katakana_iteration_mark,
    is_small_hiragana_ka_ke, is_small_katakana_ka_ke, shift_down, shift_up,
    COMBINING_VOICED_MARK, KANA_OFFSET,
};

type F = ConvertFlags;

pub(super) fn apply(stream: RuneStream<'_>, options: ConvertOptions) -> RuneStream<'_> {
    if !options.intersects(F::KatakanaToHiragana | F::HiraganaToKatakana) {
        return stream;
    }
    RuneStream::new(KanaPass {
        upstream: stream,
        options,
    })
}

struct KanaPass<'a> {
    upstream: RuneStream<'a>,
    options: ConvertOptions,
}

impl Produce for KanaPass<'_> {
    fn produce(&mut self, buf: &mut VecDeque<char>) {
        let Some(ch) = self.upstream.read_one() else {
            return;
        };
        let restricted = self.options.contains(F::CompatKanaRestriction);
        let handled = (self.options.contains(F::KatakanaToHiragana)
            && katakana_to_hiragana(ch, restricted, buf))
            || (self.options.contains(F::HiraganaToKatakana)
                && hiragana_to_katakana(ch, restricted, buf));
        if !handled {
            buf.push_back(ch);
        }
    }
}

fn katakana_to_hiragana(ch: char, restricted: bool, buf: &mut VecDeque<char>) -> bool {
    let common = is_core_katakana(ch) || is_katakana_iteration_mark(ch);
    if restricted && !common {
        return false;
    }
    if common || is_small_katakana_ka_ke(ch) {
        buf.push_back(shift_down(ch, KANA_OFFSET));
    } else if let Some(base) = lookup(KATAKANA_V_SERIES, ch) {
        buf.extend([base, COMBINING_VOICED_MARK]);
    } else if let Some(small) = lookup(SMALL_KANA_SUPPLEMENT, ch) {
        buf.push_back(small);
    } else {
        return false;
    }
    true
}

fn hiragana_to_katakana(ch: char, restricted: bool, buf: &mut VecDeque<char>) -> bool {
    let common = is_core_hiragana(ch) || is_hiragana_iteration_mark(ch);
    if restricted && !common {
        return false;
    }
    if common || is_small_hiragana_ka_ke(ch) {
        buf.push_back(shift_up(ch, KANA_OFFSET));
    } else if let Some(small) = small_hiragana_to_katakana(ch) {
        buf.push_back(small);
    } else {
        return false;
    }
    true
}
