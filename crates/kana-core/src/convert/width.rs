use std::collections::VecDeque;

use crate::options::{ConvertFlags, ConvertOptions};
use crate::stream::{Produce, RuneStream};
use crate::tables::{
    lookup, FULLWIDTH_EXCEPTIONS, HALFWIDTH_SEMI_VOICED, HALFWIDTH_TO_WIDE, HALFWIDTH_VOICED,
    NONCANONICAL_VOICED_BASES, WIDE_KATAKANA_TO_HALFWIDTH,
};
use crate::unicode::{
    is_fullwidth_ascii, is_halfwidth_form, is_halfwidth_hangul, is_halfwidth_symbol, shift_down,
    FULLWIDTH_ASCII_OFFSET, HALFWIDTH_SEMI_VOICED_MARK, HALFWIDTH_VOICED_MARK, IDEOGRAPHIC_SPACE,
};

type F = ConvertFlags;

const DIRECTIONS: F = F::FullwidthToNarrow
    .union(F::CompatWideKatakanaToHalfwidth)
    .union(F::HalfwidthToWide);

pub(super) fn apply(stream: RuneStream<'_>, options: ConvertOptions) -> RuneStream<'_> {
    if !options.intersects(DIRECTIONS) {
        return stream;
    }
    RuneStream::new(WidthPass {
        upstream: stream,
        options,
    })
}

struct WidthPass<'a> {
    upstream: RuneStream<'a>,
    options: ConvertOptions,
}

impl Produce for WidthPass<'_> {
    fn produce(&mut self, buf: &mut VecDeque<char>) {
        let Some(ch) = self.upstream.read_one() else {
            return;
        };
        let handled = self.narrow(ch, buf)
            || self.wide_katakana_to_halfwidth(ch, buf)
            || self.widen(ch, buf);
        if !handled {
            buf.push_back(ch);
        }
    }
}

impl WidthPass<'_> {
    fn has(&self, flag: F) -> bool {
        self.options.contains(flag)
    }

    /// Fullwidth to narrow. Returning `false` for a character this rule
    /// recognizes lets it fall through to the later rules unchanged.
    fn narrow(&self, ch: char, buf: &mut VecDeque<char>) -> bool {
        if !self.has(F::FullwidthToNarrow) {
            return false;
        }
        if self.has(F::CompatQuotes) {
            match ch {
                '\u{00B4}' | '\u{2019}' => return emit(buf, '\''),
                '\u{2018}' => return emit(buf, '`'),
                '\u{201C}' | '\u{201D}' => return emit(buf, '"'),
                '\u{FF02}' | '\u{FF07}' => return false,
                _ => {}
            }
        }
        // HORIZONTAL BAR and FULLWIDTH HYPHEN-MINUS arrive here already
        // rewritten by the compatibility pass.
        if self.has(F::CompatMinus) && matches!(ch, '\u{2014}' | '\u{2212}') {
            return emit(buf, '-');
        }
        if self.has(F::CompatOverline) && ch == '\u{FF5E}' {
            return false;
        }
        if self.has(F::CompatCurrency) && ch == '\u{FFE6}' {
            return false;
        }
        if self.has(F::CompatBrackets) {
            match ch {
                '\u{3008}' => return emit(buf, '<'),
                '\u{3009}' => return emit(buf, '>'),
                '\u{FF5F}' | '\u{FF60}' => return false,
                _ => {}
            }
        }
        if ch == IDEOGRAPHIC_SPACE {
            if self.has(F::CompatKeepSpaces) {
                return false;
            }
            if self.has(F::CompatDoubleSpaces) {
                buf.push_back(' ');
            }
            return emit(buf, ' ');
        }
        if is_fullwidth_ascii(ch) {
            return emit(buf, shift_down(ch, FULLWIDTH_ASCII_OFFSET));
        }
        match lookup(FULLWIDTH_EXCEPTIONS, ch) {
            Some(narrow) => emit(buf, narrow),
            None => false,
        }
    }

    fn wide_katakana_to_halfwidth(&self, ch: char, buf: &mut VecDeque<char>) -> bool {
        if !self.has(F::CompatWideKatakanaToHalfwidth) {
            return false;
        }
        match lookup(WIDE_KATAKANA_TO_HALFWIDTH, ch) {
            Some(half) => {
                buf.extend(half.chars());
                true
            }
            None => false,
        }
    }

    /// Halfwidth to wide, composing a base with the sound mark after it.
    fn widen(&mut self, ch: char, buf: &mut VecDeque<char>) -> bool {
        if !self.has(F::HalfwidthToWide) {
            return false;
        }
        if self.has(F::CompatVoicedSoundMarks) {
            match ch {
                HALFWIDTH_VOICED_MARK => return emit(buf, '\u{309B}'),
                HALFWIDTH_SEMI_VOICED_MARK => return emit(buf, '\u{309C}'),
                _ => {}
            }
        }
        if self.has(F::CompatKeepHalfwidthHangul) && is_halfwidth_hangul(ch) {
            return false;
        }
        if self.has(F::CompatKeepHalfwidthSymbols) && is_halfwidth_symbol(ch) {
            return false;
        }
        if !is_halfwidth_form(ch) {
            return false;
        }
        let Some(wide) = lookup(HALFWIDTH_TO_WIDE, ch) else {
            return false;
        };
        let next = self.upstream.peek_one();
        let composed = match next {
            Some(HALFWIDTH_VOICED_MARK)
                if self.has(F::CompatVoicedKanaRestriction)
                    && NONCANONICAL_VOICED_BASES.contains(&ch) =>
            {
                None
            }
            Some(HALFWIDTH_VOICED_MARK) => lookup(HALFWIDTH_VOICED, ch),
            Some(HALFWIDTH_SEMI_VOICED_MARK) => lookup(HALFWIDTH_SEMI_VOICED, ch),
            _ => None,
        };
        match composed {
            Some(precomposed) => {
                self.upstream.consume(1);
                emit(buf, precomposed)
            }
            None => emit(buf, wide),
        }
    }
}

fn emit(buf: &mut VecDeque<char>, ch: char) -> bool {
    buf.push_back(ch);
    true
}
