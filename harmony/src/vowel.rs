//! トルコ語の母音分類
//!
//! 母音調和で用いる前舌・後舌の分類と、円唇・非円唇の分類を提供します。
//! 小文字の8母音のみを対象とし、それ以外の文字はどの集合にも属しません。
//!
//! 円唇性の分類は複数形接尾辞の補正規則では参照されません。
//! 円唇調和に従う接尾辞（例: `-(y)ı/i/u/ü`）を扱う場合の拡張点として残しています。

/// 前舌母音
const FRONT_VOWELS: [char; 4] = ['e', 'i', 'ö', 'ü'];

/// 後舌母音
const BACK_VOWELS: [char; 4] = ['a', 'ı', 'o', 'u'];

/// 円唇母音
const ROUND_VOWELS: [char; 4] = ['o', 'ö', 'u', 'ü'];

/// 非円唇母音
const UNROUND_VOWELS: [char; 4] = ['a', 'e', 'ı', 'i'];

/// 舌の前後位置
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Backness {
    /// 前舌
    Front,
    /// 後舌
    Back,
}

/// 母音の素性
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vowel {
    /// 舌の前後位置
    pub backness: Backness,
    /// 円唇かどうか
    pub round: bool,
}

/// 前舌母音かどうかを判定します。
#[inline(always)]
pub fn is_front_vowel(c: char) -> bool {
    FRONT_VOWELS.contains(&c)
}

/// 後舌母音かどうかを判定します。
#[inline(always)]
pub fn is_back_vowel(c: char) -> bool {
    BACK_VOWELS.contains(&c)
}

/// 円唇母音かどうかを判定します。
#[inline(always)]
pub fn is_round_vowel(c: char) -> bool {
    ROUND_VOWELS.contains(&c)
}

/// 非円唇母音かどうかを判定します。
#[inline(always)]
pub fn is_unround_vowel(c: char) -> bool {
    UNROUND_VOWELS.contains(&c)
}

/// 文字を母音として分類します。
///
/// # 引数
///
/// * `c` - 分類対象の文字
///
/// # 戻り値
///
/// 母音であればその素性、母音でなければ `None`
pub fn classify(c: char) -> Option<Vowel> {
    let backness = if is_front_vowel(c) {
        Backness::Front
    } else if is_back_vowel(c) {
        Backness::Back
    } else {
        return None;
    };
    Some(Vowel {
        backness,
        round: is_round_vowel(c),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backness_partition() {
        for c in ['a', 'ı', 'o', 'u'] {
            assert!(is_back_vowel(c), "{c}");
            assert!(!is_front_vowel(c), "{c}");
        }
        for c in ['e', 'i', 'ö', 'ü'] {
            assert!(is_front_vowel(c), "{c}");
            assert!(!is_back_vowel(c), "{c}");
        }
    }

    #[test]
    fn test_consonants_match_nothing() {
        for c in ['k', 't', 'p', 'ğ', 'ş', 'ç', ' ', '-', 'I', 'İ'] {
            assert!(!is_front_vowel(c), "{c}");
            assert!(!is_back_vowel(c), "{c}");
            assert!(!is_round_vowel(c), "{c}");
            assert!(!is_unround_vowel(c), "{c}");
            assert_eq!(None, classify(c));
        }
    }

    #[test]
    fn test_roundness_partition() {
        for c in FRONT_VOWELS.iter().chain(BACK_VOWELS.iter()).copied() {
            assert_ne!(is_round_vowel(c), is_unround_vowel(c), "{c}");
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            Some(Vowel {
                backness: Backness::Front,
                round: true
            }),
            classify('ü')
        );
        assert_eq!(
            Some(Vowel {
                backness: Backness::Back,
                round: false
            }),
            classify('ı')
        );
        assert_eq!(
            Some(Vowel {
                backness: Backness::Back,
                round: true
            }),
            classify('o')
        );
        assert_eq!(
            Some(Vowel {
                backness: Backness::Front,
                round: false
            }),
            classify('i')
        );
    }
}
