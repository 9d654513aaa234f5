//! Width and kana normalization pipeline.
//!
//! Text flows through three passes, each wrapping the stream of the one
//! before it:
//!
//! 1. compatibility substitutions (minus, overline, currency, symbols)
//! 2. width normalization (narrowing, halfwidth katakana, widening)
//! 3. kana script conversion
//!
//! A pass whose flags are all absent is skipped entirely, leaving the
//! upstream stream in place.

mod compat;
mod kana;
mod width;

#[cfg(test)]
mod tests;

use tracing::debug_span;

use crate::options::ConvertOptions;
use crate::stream::RuneStream;

/// Convert `input` under `options`. Options are normalized first.
pub fn convert(input: &str, options: impl Into<ConvertOptions>) -> String {
    let options = options.into();
    let _span = debug_span!("convert", len = input.len(), %options).entered();
    pipeline(RuneStream::from_text(input), options).drain()
}

/// Wrap `source` in every pass `options` enables. Nothing is read from
/// `source` until the returned stream is pulled.
pub fn pipeline(source: RuneStream<'_>, options: ConvertOptions) -> RuneStream<'_> {
    let stream = compat::apply(source, options);
    let stream = width::apply(stream, options);
    kana::apply(stream, options)
}
