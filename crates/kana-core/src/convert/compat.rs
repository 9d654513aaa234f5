use crate::options::{ConvertFlags, ConvertOptions};
use crate::stream::RuneStream;
use crate::tables::{
    lookup, COMPAT_CURRENCY, COMPAT_MINUS, COMPAT_OTHER_SYMBOLS, COMPAT_OVERLINE,
};

const GROUPS: [(ConvertFlags, &[(char, char)]); 4] = [
    (ConvertFlags::CompatMinus, COMPAT_MINUS),
    (ConvertFlags::CompatOverline, COMPAT_OVERLINE),
    (ConvertFlags::CompatCurrency, COMPAT_CURRENCY),
    (ConvertFlags::CompatOtherSymbols, COMPAT_OTHER_SYMBOLS),
];

/// Substitute the compatibility forms selected by `options`, one for one.
pub(super) fn apply(stream: RuneStream<'_>, options: ConvertOptions) -> RuneStream<'_> {
    let tables: Vec<&[(char, char)]> = GROUPS
        .iter()
        .filter(|(flag, _)| options.contains(*flag))
        .map(|&(_, table)| table)
        .collect();
    if tables.is_empty() {
        return stream;
    }
    stream.map(move |ch| {
        tables
            .iter()
            .find_map(|table| lookup(table, ch))
            .unwrap_or(ch)
    })
}
