//! The jamo lookup tables behind syllable decomposition.
//!
//! All of the characters in these tables are Hangul *compatibility* jamo
//! from the block U+3131–U+3163: the standalone letter forms that render as
//! individual letters rather than recombining into syllable blocks. The
//! three slot tables ([`LEAD`], [`MEDIAL`], [`TRAILING`]) give the letter
//! for each slot index that the syllable code-point arithmetic can produce,
//! and the two expansion functions give the second (and final) level of
//! decomposition for letters that are themselves doubled or clustered.
//!
//! Every character a slot table can produce is either basic or an argument
//! for which exactly one of the two expansion functions returns `Some`, and
//! the characters in the expansions are always basic, so expansion never
//! needs to be applied more than once. `crate::syllable::tests` checks both
//! properties exhaustively.

/// The leading consonant (초성) for each of the 19 lead slots of a
/// syllable block.
pub const LEAD: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// The medial vowel (중성) for each of the 21 vowel slots of a syllable
/// block. Seven of these are diphthongs that expand further via
/// [`expand_compound_vowel`].
pub const MEDIAL: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// The trailing consonant (종성) for trailing slots 1 through 27. Slot 0
/// means the syllable has no trailing consonant at all, so it has no entry
/// here; subtract one from a nonzero trailing index before looking it up.
pub const TRAILING: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
    'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Returns the two-letter expansion of a doubled consonant or consonant
/// cluster, or `None` if the given character is not one of the 16 compound
/// consonants.
///
/// The doubled consonants (ㄲ, ㄸ, ㅃ, ㅆ, ㅉ) expand to two copies of the
/// same letter; the clusters (ㄳ through ㅄ) expand to their two distinct
/// component letters, in spelling order.
pub const fn expand_compound_consonant(c: char) -> Option<[char; 2]> {
    match c {
        'ㄲ' => Some(['ㄱ', 'ㄱ']),
        'ㄳ' => Some(['ㄱ', 'ㅅ']),
        'ㄵ' => Some(['ㄴ', 'ㅈ']),
        'ㄶ' => Some(['ㄴ', 'ㅎ']),
        'ㄸ' => Some(['ㄷ', 'ㄷ']),
        'ㄺ' => Some(['ㄹ', 'ㄱ']),
        'ㄻ' => Some(['ㄹ', 'ㅁ']),
        'ㄼ' => Some(['ㄹ', 'ㅂ']),
        'ㄽ' => Some(['ㄹ', 'ㅅ']),
        'ㄾ' => Some(['ㄹ', 'ㅌ']),
        'ㄿ' => Some(['ㄹ', 'ㅍ']),
        'ㅀ' => Some(['ㄹ', 'ㅎ']),
        'ㅃ' => Some(['ㅂ', 'ㅂ']),
        'ㅄ' => Some(['ㅂ', 'ㅅ']),
        'ㅆ' => Some(['ㅅ', 'ㅅ']),
        'ㅉ' => Some(['ㅈ', 'ㅈ']),
        _ => None,
    }
}

/// Returns the two-letter expansion of a diphthong vowel, or `None` if the
/// given character is not one of the 7 compound vowels.
///
/// Note that this covers only the vowels written as a visible combination
/// of two vowel shapes (ㅘ, ㅙ, ㅚ, ㅝ, ㅞ, ㅟ, ㅢ). The "y"-vowels such as
/// ㅐ and ㅖ are historically compounds too, but they're typed as single
/// keys and so are treated as basic here.
pub const fn expand_compound_vowel(c: char) -> Option<[char; 2]> {
    match c {
        'ㅘ' => Some(['ㅗ', 'ㅏ']),
        'ㅙ' => Some(['ㅗ', 'ㅐ']),
        'ㅚ' => Some(['ㅗ', 'ㅣ']),
        'ㅝ' => Some(['ㅜ', 'ㅓ']),
        'ㅞ' => Some(['ㅜ', 'ㅔ']),
        'ㅟ' => Some(['ㅜ', 'ㅣ']),
        'ㅢ' => Some(['ㅡ', 'ㅣ']),
        _ => None,
    }
}
