use crate::jamo;

/// Start of the precomposed Hangul syllables block (가).
const S_BASE: u32 = 0xAC00;
/// Number of precomposed syllables in the block, which runs through 힣
/// (U+D7A3).
const S_COUNT: u32 = 11172;
/// Number of medial vowel slots per leading consonant.
const V_COUNT: u32 = 21;
/// Number of trailing consonant slots per vowel, counting slot zero for
/// "no trailing consonant".
const T_COUNT: u32 = 28;
/// `V_COUNT * T_COUNT`: the number of syllables sharing one leading
/// consonant.
const N_COUNT: u32 = 588;

/// A precomposed Hangul syllable, split into its three letter slots.
///
/// The syllables block is laid out arithmetically: the code point of a
/// syllable is `S_BASE + lead * 588 + medial * 28 + trailing`, so splitting
/// a syllable into slots is pure integer arithmetic with no table involved.
/// The slot indices then select letters from the tables in [`crate::jamo`].
///
/// A `Syllable` gives the letters exactly as they appear in the syllable
/// block, so a compound letter such as ㄲ or ㅘ comes back as that single
/// compound character. Expanding compounds into their basic letters is the
/// second decomposition level, applied by [`crate::decompose_char`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    lead: u8,
    medial: u8,
    trailing: u8,
}

impl Syllable {
    /// Splits the given character into its syllable slots, or returns
    /// `None` if the character is not a precomposed Hangul syllable
    /// (everything outside U+AC00–U+D7A3, including isolated jamo).
    pub const fn from_char(c: char) -> Option<Self> {
        let offset = (c as u32).wrapping_sub(S_BASE);
        if offset >= S_COUNT {
            return None;
        }
        Some(Self {
            lead: (offset / N_COUNT) as u8,
            medial: ((offset / T_COUNT) % V_COUNT) as u8,
            trailing: (offset % T_COUNT) as u8,
        })
    }

    /// The leading consonant (초성), as a compatibility jamo character.
    pub const fn lead_jamo(self) -> char {
        jamo::LEAD[self.lead as usize]
    }

    /// The medial vowel (중성), as a compatibility jamo character.
    pub const fn medial_jamo(self) -> char {
        jamo::MEDIAL[self.medial as usize]
    }

    /// The trailing consonant (종성), as a compatibility jamo character,
    /// or `None` for an open syllable like 가.
    pub const fn trailing_jamo(self) -> Option<char> {
        if self.trailing == 0 {
            None
        } else {
            Some(jamo::TRAILING[self.trailing as usize - 1])
        }
    }
}
