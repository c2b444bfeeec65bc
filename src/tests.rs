use super::*;

// The tests in this file are only for the public string-level API. The
// syllable arithmetic and the lookup-table invariants have their own tests
// under `crate::syllable::tests`, including an exhaustive sweep of the
// whole syllables block.

use pretty_assertions::assert_eq;

#[test]
fn basic_syllables() {
    assert_eq!(decompose("한"), "ㅎㅏㄴ");
    assert_eq!(decompose("한글"), "ㅎㅏㄴㄱㅡㄹ");
    assert_eq!(decompose("의"), "ㅇㅡㅣ");
}

#[test]
fn compound_letters_inside_syllables() {
    // Trailing cluster ㅄ spells out as ㅂ then ㅅ.
    assert_eq!(decompose("값"), "ㄱㅏㅂㅅ");
    // Compound letters in all three slots at once.
    assert_eq!(decompose("꽉"), "ㄱㄱㅗㅏㄱ");
    // Doubled trailing consonant.
    assert_eq!(decompose("있"), "ㅇㅣㅅㅅ");
}

#[test]
fn isolated_compound_jamo() {
    // Compound jamo typed on their own, outside any syllable block.
    assert_eq!(decompose("ㅆ"), "ㅅㅅ");
    assert_eq!(decompose("ㅄ"), "ㅂㅅ");
    assert_eq!(decompose("ㅢ"), "ㅡㅣ");
}

#[test]
fn passthrough() {
    assert_eq!(decompose(""), "");
    assert_eq!(decompose("abc 123!"), "abc 123!");
    assert_eq!(decompose("漢字"), "漢字");
    assert_eq!(decompose("🧑‍🌾"), "🧑‍🌾");
    // Basic jamo are already fully decomposed.
    assert_eq!(decompose("ㄱㅏㅂㅅ"), "ㄱㅏㅂㅅ");
}

#[test]
fn mixed_text() {
    assert_eq!(decompose("한glish 쓰기!"), "ㅎㅏㄴglish ㅅㅅㅡㄱㅣ!");
}

#[test]
fn idempotent_once_decomposed() {
    let once = decompose("값있는 의의, 꽉!");
    assert_eq!(decompose(&once), once);
}

#[test]
fn lazy_iterator_matches_eager() {
    let text = "꽃밭, ok? 의ㅢ";
    assert_eq!(decompose_chars(text).collect::<String>(), decompose(text));

    // The size hint must bracket the real count at every step.
    let mut iter = decompose_chars(text);
    loop {
        let (lower, upper) = iter.size_hint();
        let remaining = iter.clone().count();
        assert!(lower <= remaining);
        assert!(upper.expect("bounded input has an upper bound") >= remaining);
        if iter.next().is_none() {
            break;
        }
    }
}

#[test]
fn single_character_jamos() {
    let got: Vec<char> = decompose_char('값').collect();
    assert_eq!(got, vec!['ㄱ', 'ㅏ', 'ㅂ', 'ㅅ']);

    let got: Vec<char> = decompose_char('a').collect();
    assert_eq!(got, vec!['a']);

    // ExactSizeIterator stays truthful while consuming.
    let mut jamos = decompose_char('꽉');
    assert_eq!(jamos.len(), 5);
    jamos.next();
    assert_eq!(jamos.len(), 4);
}

#[test]
fn u8char_entry_point() {
    use ::u8char::AsU8Chars;

    let mut out = String::new();
    for c in "한글 ok".u8chars() {
        for j in decompose_u8char(c) {
            out.push(j);
        }
    }
    assert_eq!(out, "ㅎㅏㄴㄱㅡㄹ ok");
}
