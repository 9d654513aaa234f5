//! Pull-based character stream with a growable lookahead buffer.
//!
//! Each conversion pass is a [`Produce`] implementation that owns the stream
//! it reads from, so a pipeline is a linear chain of `RuneStream`s. Nothing is
//! pulled from upstream until a downstream reader asks for it.

use std::collections::VecDeque;

/// Appends characters to a stream buffer on demand.
///
/// An implementation must append at least one character per call until its
/// input is exhausted; a call that appends nothing ends the stream.
pub trait Produce {
    fn produce(&mut self, buf: &mut VecDeque<char>);
}

pub struct RuneStream<'a> {
    buf: VecDeque<char>,
    end: bool,
    producer: Box<dyn Produce + 'a>,
}

impl<'a> RuneStream<'a> {
    pub fn new(producer: impl Produce + 'a) -> Self {
        Self {
            buf: VecDeque::new(),
            end: false,
            producer: Box::new(producer),
        }
    }

    /// Stream the characters of `text`.
    pub fn from_text(text: &'a str) -> Self {
        Self::from_chars(text.chars())
    }

    /// Stream the characters of any iterator, pulling one per demand.
    pub fn from_chars(chars: impl Iterator<Item = char> + 'a) -> Self {
        Self::new(CharSource(chars))
    }

    /// Apply `f` to every character of `self`, one for one.
    pub fn map(self, f: impl FnMut(char) -> char + 'a) -> RuneStream<'a> {
        RuneStream::new(MapPass { upstream: self, f })
    }

    /// Buffer at least `demand` characters unless the producer runs dry first.
    /// Returns how many characters are buffered afterwards.
    ///
    /// Repeated calls without consuming return the same buffered characters.
    pub fn fill(&mut self, demand: usize) -> usize {
        while !self.end && self.buf.len() < demand {
            let before = self.buf.len();
            self.producer.produce(&mut self.buf);
            if self.buf.len() == before {
                self.end = true;
            }
        }
        self.buf.len()
    }

    pub fn peek_one(&mut self) -> Option<char> {
        self.fill(1);
        self.buf.front().copied()
    }

    pub fn read_one(&mut self) -> Option<char> {
        self.fill(1);
        self.buf.pop_front()
    }

    /// Drop `num` already-buffered characters.
    pub fn consume(&mut self, num: usize) {
        let num = num.min(self.buf.len());
        self.buf.drain(..num);
    }

    /// Run the stream to completion and collect the output.
    pub fn drain(self) -> String {
        self.collect()
    }
}

impl Iterator for RuneStream<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.read_one()
    }
}

struct CharSource<I>(I);

impl<I: Iterator<Item = char>> Produce for CharSource<I> {
    fn produce(&mut self, buf: &mut VecDeque<char>) {
        if let Some(ch) = self.0.next() {
            buf.push_back(ch);
        }
    }
}

struct MapPass<'a, F> {
    upstream: RuneStream<'a>,
    f: F,
}

impl<F: FnMut(char) -> char> Produce for MapPass<'_, F> {
    fn produce(&mut self, buf: &mut VecDeque<char>) {
        self.upstream.fill(1);
        // Whatever upstream already buffered can be mapped in one go.
        buf.extend(self.upstream.buf.drain(..).map(&mut self.f));
    }
}
