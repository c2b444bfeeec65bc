//! Decomposition of precomposed Hangul syllables (and compound jamo) into
//! plain sequences of basic jamo letters.
//!
//! Every character in the Unicode Hangul syllables block U+AC00–U+D7A3
//! (가–힣) is an arithmetic composition of a leading consonant (초성), a
//! medial vowel (중성), and optionally a trailing consonant (종성).
//! [`decompose`] splits each such syllable back into those letters, and
//! then goes one step further: letters that are themselves doubled or
//! clustered — ㄲ, ㅆ, the consonant clusters like ㅄ, and the diphthongs
//! like ㅘ — are expanded into the basic letters they're built from. So
//! `decompose("값")` yields `"ㄱㅏㅂㅅ"`, with the trailing cluster ㅄ
//! spelled out as ㅂ then ㅅ. Compound jamo appearing on their own in the
//! input (not inside a syllable) are expanded the same way, and everything
//! else — basic jamo, ASCII, punctuation, any other script — passes
//! through verbatim. The transformation is a pure function of each
//! individual character: no state is carried between characters, and there
//! is no input it can fail on.
//!
//! ---
//!
//! This is **not** Unicode normalization, and if canonical decomposition
//! is what you're after then you should use
//! [`unicode_normalization`](https://docs.rs/unicode-normalization/latest/unicode_normalization/)
//! instead. The differences are deliberate:
//!
//! - NFD maps syllables to *conjoining* jamo (U+1100 onward), which
//!   recombine into syllable blocks again when rendered. This library maps
//!   to *compatibility* jamo (U+3131–U+3163), the standalone letter forms
//!   that stay visibly separate. Staying separate is the point: the output
//!   is for spelling a word out letter by letter, as when teaching the
//!   alphabet, laying out a letter-per-key keyboard display, or rendering
//!   text in a deliberately "unravelled" style.
//!
//! - NFD stops at the syllable's three slots. This library also expands
//!   compound letters into their components (two levels of decomposition
//!   in total — the expansion letters are always basic, so it never goes
//!   deeper), and consequently the result cannot be losslessly recomposed.
//!
//! The entry points, from most to least convenient:
//!
//! - [`decompose`] transforms a whole `&str` into a `String`.
//! - [`decompose_chars`] does the same lazily, yielding one `char` at a
//!   time without allocating.
//! - [`decompose_char`] and [`decompose_u8char`] decompose a single
//!   character, returning the small [`Jamos`] iterator. These are handy
//!   when the caller is already walking text character-by-character.
//!
//! The layers underneath are public too, in case the lookup data is useful
//! on its own: [`Syllable`] exposes the syllable-block arithmetic, and
//! [`jamo`] holds the slot tables and compound-letter expansions.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod jamo;
mod syllable;

pub use syllable::Syllable;

use alloc::string::String;
use u8char::u8char;

/// Decomposes every Hangul syllable and compound jamo in the given text
/// into basic jamo letters, leaving all other characters unchanged.
///
/// The result is never shorter than the input in characters, and the
/// relative order of everything is preserved. Applying `decompose` to its
/// own output returns it unchanged, since fully-decomposed text contains
/// nothing left to expand.
pub fn decompose(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    out.extend(decompose_chars(text));
    out
}

/// Returns an iterator over the decomposition of the given text, yielding
/// the same characters [`decompose`] would produce but lazily and without
/// allocating.
pub fn decompose_chars(text: &str) -> Decompositions<'_> {
    Decompositions {
        chars: text.chars(),
        pending: Jamos::EMPTY,
    }
}

/// Decomposes a single character, returning an iterator over the resulting
/// letters.
///
/// The classification goes, in order: a precomposed syllable is split into
/// its slot letters with each compound letter expanded (producing 2 to 6
/// characters); a standalone compound consonant or vowel yields its
/// two-letter expansion; anything else yields exactly itself. This is a
/// total function — there is no character it rejects.
pub const fn decompose_char(c: char) -> Jamos {
    if let Some(s) = Syllable::from_char(c) {
        let jamos = Jamos::EMPTY
            .push_consonant(s.lead_jamo())
            .push_vowel(s.medial_jamo());
        return match s.trailing_jamo() {
            Some(t) => jamos.push_consonant(t),
            None => jamos,
        };
    }
    if let Some(pair) = jamo::expand_compound_consonant(c) {
        return Jamos::pair(pair);
    }
    if let Some(pair) = jamo::expand_compound_vowel(c) {
        return Jamos::pair(pair);
    }
    Jamos::single(c)
}

/// Decomposes a single character represented as a [`u8char`] value.
///
/// This is a convenience for callers that are already chomping UTF-8
/// sequences from a buffer the way [`u8char`] encourages; it behaves
/// exactly like [`decompose_char`].
pub fn decompose_u8char(c: u8char) -> Jamos {
    // A u8char always encodes exactly one scalar value.
    match c.as_str().chars().next() {
        Some(c) => decompose_char(c),
        None => Jamos::EMPTY,
    }
}

/// Iterator over the letters produced by decomposing a single character.
///
/// Returned by [`decompose_char`] and [`decompose_u8char`]. Yields between
/// one and six characters: one for a passthrough character, two for a
/// standalone compound jamo, and two to six for a syllable (three slots,
/// each possibly expanding into two letters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jamos {
    /// Letters at indices `pos..len`; the rest is NUL padding, which
    /// decomposition itself never produces.
    buf: [char; 6],
    pos: u8,
    len: u8,
}

impl Jamos {
    const EMPTY: Self = Self {
        buf: ['\0'; 6],
        pos: 0,
        len: 0,
    };

    const fn single(c: char) -> Self {
        Self::EMPTY.push(c)
    }

    const fn pair(pair: [char; 2]) -> Self {
        Self::EMPTY.push(pair[0]).push(pair[1])
    }

    const fn push(mut self, c: char) -> Self {
        self.buf[self.len as usize] = c;
        self.len += 1;
        self
    }

    /// Pushes a consonant slot letter, expanded into its two components if
    /// it's a doubled consonant or cluster.
    const fn push_consonant(self, c: char) -> Self {
        match jamo::expand_compound_consonant(c) {
            Some([a, b]) => self.push(a).push(b),
            None => self.push(c),
        }
    }

    /// Pushes a vowel slot letter, expanded into its two components if
    /// it's a diphthong.
    const fn push_vowel(self, c: char) -> Self {
        match jamo::expand_compound_vowel(c) {
            Some([a, b]) => self.push(a).push(b),
            None => self.push(c),
        }
    }
}

impl Iterator for Jamos {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.pos >= self.len {
            return None;
        }
        let c = self.buf[self.pos as usize];
        self.pos += 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remain = (self.len - self.pos) as usize;
        (remain, Some(remain))
    }
}

impl ExactSizeIterator for Jamos {}

impl core::iter::FusedIterator for Jamos {}

/// Iterator over the decomposition of a whole string, returned by
/// [`decompose_chars`].
#[derive(Debug, Clone)]
pub struct Decompositions<'a> {
    chars: core::str::Chars<'a>,
    pending: Jamos,
}

impl Iterator for Decompositions<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(c) = self.pending.next() {
                return Some(c);
            }
            self.pending = decompose_char(self.chars.next()?);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Each remaining input character yields at least one and at most
        // six output characters.
        let pending = self.pending.len();
        let (lower, upper) = self.chars.size_hint();
        (
            lower.saturating_add(pending),
            upper.map(|n| n.saturating_mul(6).saturating_add(pending)),
        )
    }
}

impl core::iter::FusedIterator for Decompositions<'_> {}

#[cfg(test)]
mod tests;
