//! 한글 음절 -> 자모 분해기

use crate::core::tables::{
    CHOSEONG_TABLE, COMPLEX_CONSONANTS, COMPLEX_VOWELS, JONGSEONG_TABLE, JUNGSEONG_TABLE,
};
use crate::core::unicode::decompose_syllable;
use std::fmt::Display;

/// 문자 하나를 자모로 분해
/// 완성형 음절이 아닌 문자(숫자, 영문, 낱자모, 한자 등)는 그대로 반환
pub fn decompose(c: char) -> String {
    let Some((cho, jung, jong)) = decompose_syllable(c) else {
        return c.to_string();
    };

    // 인덱스 범위는 decompose_syllable이 보장
    let mut out = String::new();
    push_consonant(&mut out, CHOSEONG_TABLE[cho as usize]);
    push_vowel(&mut out, JUNGSEONG_TABLE[jung as usize]);
    if let Some(trail) = JONGSEONG_TABLE[jong as usize] {
        push_consonant(&mut out, trail);
    }
    out
}

/// 임의 값을 문자열로 렌더링한 뒤 문자 단위로 분해해 이어붙임
/// 렌더링 정책은 `Display` (숫자는 십진 표기, 문자열은 그대로)
pub fn unpack(input: impl Display) -> String {
    input.to_string().chars().map(decompose).collect()
}

/// 자음 추가 (복합 자음은 낱자음 두 개로 풀어서)
fn push_consonant(out: &mut String, c: char) {
    match COMPLEX_CONSONANTS.get(&c) {
        Some([first, second]) => {
            out.push(*first);
            out.push(*second);
        }
        None => out.push(c),
    }
}

/// 모음 추가 (복합 모음은 낱모음 두 개로 풀어서)
fn push_vowel(out: &mut String, v: char) {
    match COMPLEX_VOWELS.get(&v) {
        Some([first, second]) => {
            out.push(*first);
            out.push(*second);
        }
        None => out.push(v),
    }
}
