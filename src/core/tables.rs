//! 한글 자모 상수 테이블
//!
//! 유니코드 완성형 음절 인코딩이 정의하는 초성/중성/종성 순서를 그대로 따릅니다.
//! 인덱스가 곧 음절 코드포인트의 위치 필드이므로 순서를 바꾸면 안 됩니다.

use std::collections::HashMap;
use std::sync::LazyLock;

/// 초성 테이블 (19개)
///
/// ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
/// ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
#[rustfmt::skip]
pub const CHOSEONG_TABLE: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 테이블 (21개)
///
/// ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
/// ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
#[rustfmt::skip]
pub const JUNGSEONG_TABLE: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ',
    'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ',
    'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ',
    'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 테이블 (28개, 인덱스 0 = 종성 없음)
///
/// 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
/// ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
/// ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
#[rustfmt::skip]
pub const JONGSEONG_TABLE: [Option<char>; 28] = [
    None,       Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'),
    Some('ㄶ'), Some('ㄷ'), Some('ㄹ'), Some('ㄺ'), Some('ㄻ'),
    Some('ㄼ'), Some('ㄽ'), Some('ㄾ'), Some('ㄿ'), Some('ㅀ'),
    Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'),
    Some('ㅇ'), Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 복합 자음 -> 낱자음 두 개 (순서 유지)
/// 낱자음은 키가 아니므로 조회 실패 = 이미 낱자음
pub static COMPLEX_CONSONANTS: LazyLock<HashMap<char, [char; 2]>> = LazyLock::new(|| {
    HashMap::from([
        ('ㄲ', ['ㄱ', 'ㄱ']),
        ('ㄳ', ['ㄱ', 'ㅅ']),
        ('ㄵ', ['ㄴ', 'ㅈ']),
        ('ㄶ', ['ㄴ', 'ㅎ']),
        ('ㄸ', ['ㄷ', 'ㄷ']),
        ('ㄺ', ['ㄹ', 'ㄱ']),
        ('ㄻ', ['ㄹ', 'ㅁ']),
        ('ㄼ', ['ㄹ', 'ㅂ']),
        ('ㄽ', ['ㄹ', 'ㅅ']),
        ('ㄾ', ['ㄹ', 'ㅌ']),
        ('ㄿ', ['ㄹ', 'ㅍ']),
        ('ㅀ', ['ㄹ', 'ㅎ']),
        ('ㅄ', ['ㅂ', 'ㅅ']),
        ('ㅃ', ['ㅂ', 'ㅂ']),
        ('ㅆ', ['ㅅ', 'ㅅ']),
        ('ㅉ', ['ㅈ', 'ㅈ']),
    ])
});

/// 복합 모음 -> 낱모음 두 개 (순서 유지)
pub static COMPLEX_VOWELS: LazyLock<HashMap<char, [char; 2]>> = LazyLock::new(|| {
    HashMap::from([
        ('ㅘ', ['ㅗ', 'ㅏ']),
        ('ㅙ', ['ㅗ', 'ㅐ']),
        ('ㅚ', ['ㅗ', 'ㅣ']),
        ('ㅝ', ['ㅜ', 'ㅓ']),
        ('ㅞ', ['ㅜ', 'ㅔ']),
        ('ㅟ', ['ㅜ', 'ㅣ']),
        ('ㅢ', ['ㅡ', 'ㅣ']),
        ('ㅒ', ['ㅑ', 'ㅣ']),
        ('ㅖ', ['ㅕ', 'ㅣ']),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_sizes() {
        assert_eq!(COMPLEX_CONSONANTS.len(), 16);
        assert_eq!(COMPLEX_VOWELS.len(), 9);
    }

    #[test]
    fn test_complex_consonant_keys_appear_in_tables() {
        // 복합 자음 키는 모두 초성 또는 종성 테이블에 존재해야 함
        for key in COMPLEX_CONSONANTS.keys() {
            let in_choseong = CHOSEONG_TABLE.contains(key);
            let in_jongseong = JONGSEONG_TABLE.contains(&Some(*key));
            assert!(in_choseong || in_jongseong, "{key} 는 테이블에 없음");
        }
    }

    #[test]
    fn test_complex_vowel_keys_appear_in_table() {
        for key in COMPLEX_VOWELS.keys() {
            assert!(JUNGSEONG_TABLE.contains(key), "{key} 는 중성 테이블에 없음");
        }
    }

    #[test]
    fn test_expansion_results_are_atomic() {
        // 분해 결과 낱자모가 다시 키가 되면 분해가 한 단계로 끝나지 않음
        for pair in COMPLEX_CONSONANTS.values() {
            for atom in pair {
                assert!(!COMPLEX_CONSONANTS.contains_key(atom), "{atom} 가 복합 키임");
            }
        }
        for pair in COMPLEX_VOWELS.values() {
            for atom in pair {
                assert!(!COMPLEX_VOWELS.contains_key(atom), "{atom} 가 복합 키임");
            }
        }
    }

    #[test]
    fn test_atomic_glyphs_are_not_keys() {
        for atom in ['ㄱ', 'ㄴ', 'ㄷ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅅ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ'] {
            assert!(!COMPLEX_CONSONANTS.contains_key(&atom));
        }
        for atom in ['ㅏ', 'ㅐ', 'ㅑ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅗ', 'ㅛ', 'ㅜ', 'ㅠ', 'ㅡ', 'ㅣ'] {
            assert!(!COMPLEX_VOWELS.contains_key(&atom));
        }
    }

    #[test]
    fn test_table_contents_against_encoding_order() {
        // 경계 인덱스 확인
        assert_eq!(CHOSEONG_TABLE[0], 'ㄱ');
        assert_eq!(CHOSEONG_TABLE[18], 'ㅎ');
        assert_eq!(JUNGSEONG_TABLE[0], 'ㅏ');
        assert_eq!(JUNGSEONG_TABLE[20], 'ㅣ');
        assert_eq!(JONGSEONG_TABLE[0], None);
        assert_eq!(JONGSEONG_TABLE[1], Some('ㄱ'));
        assert_eq!(JONGSEONG_TABLE[18], Some('ㅄ'));
        assert_eq!(JONGSEONG_TABLE[27], Some('ㅎ'));
    }
}
