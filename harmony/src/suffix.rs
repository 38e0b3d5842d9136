//! 複数形接尾辞の予測
//!
//! トルコ語の複数形接尾辞 `-lAr` は、語幹の最後の母音の前後位置に従って
//! `lar`（後舌）か `ler`（前舌）のいずれかで実現されます。

use std::fmt;
use std::str::FromStr;

use crate::vowel::{classify, Backness};

/// 複数形接尾辞の表層形
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PluralSuffix {
    /// 後舌母音に続く `lar`
    Lar,
    /// 前舌母音に続く `ler`
    Ler,
}

impl PluralSuffix {
    /// 接尾辞の文字列を返します。
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lar => "lar",
            Self::Ler => "ler",
        }
    }

    /// 母音の前後位置に調和する接尾辞を返します。
    pub const fn harmonizing_with(backness: Backness) -> Self {
        match backness {
            Backness::Back => Self::Lar,
            Backness::Front => Self::Ler,
        }
    }
}

impl fmt::Display for PluralSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluralSuffix {
    type Err = &'static str;

    /// 文字列が `lar` または `ler` と完全に一致する場合のみ成功します。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lar" => Ok(Self::Lar),
            "ler" => Ok(Self::Ler),
            _ => Err("Not a plural suffix"),
        }
    }
}

/// 見出し語に調和する複数形接尾辞を予測します。
///
/// 見出し語を末尾から走査し、最初に見つかった母音の前後位置だけで決定します。
/// 調和の連鎖は考慮しません。
///
/// # 引数
///
/// * `lemma` - 見出し語
///
/// # 戻り値
///
/// 予測された接尾辞。母音を含まない見出し語（空文字列を含む）では `None`
///
/// # 例
///
/// ```
/// use harmony::suffix::{predict_suffix, PluralSuffix};
///
/// assert_eq!(Some(PluralSuffix::Lar), predict_suffix("kitap"));
/// assert_eq!(Some(PluralSuffix::Ler), predict_suffix("ev"));
/// assert_eq!(None, predict_suffix("krş"));
/// ```
pub fn predict_suffix(lemma: &str) -> Option<PluralSuffix> {
    lemma
        .chars()
        .rev()
        .find_map(classify)
        .map(|v| PluralSuffix::harmonizing_with(v.backness))
}

/// 推論形から見出し語の後ろに付いた部分を切り出します。
///
/// モデルが見出し語を変えずに接尾辞を付加したことが前提です。
/// 見出し語が推論形の接頭辞でない場合（モデルが語幹を変えた場合）は
/// 誤った位置で切り出さずに `None` を返します。
///
/// # 引数
///
/// * `form` - 推論形
/// * `lemma` - 見出し語
///
/// # 戻り値
///
/// 見出し語より後ろの部分文字列。前提が成り立たない場合は `None`
pub fn split_suffix<'a>(form: &'a str, lemma: &str) -> Option<&'a str> {
    form.strip_prefix(lemma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_suffix() {
        assert_eq!(Some(PluralSuffix::Lar), predict_suffix("kitap"));
        assert_eq!(Some(PluralSuffix::Ler), predict_suffix("ev"));
        assert_eq!(Some(PluralSuffix::Ler), predict_suffix("göz"));
        assert_eq!(Some(PluralSuffix::Lar), predict_suffix("kız"));
        assert_eq!(Some(PluralSuffix::Lar), predict_suffix("okul"));
    }

    #[test]
    fn test_predict_suffix_last_vowel_wins() {
        // "kalem": a ... e
        assert_eq!(Some(PluralSuffix::Ler), predict_suffix("kalem"));
        // "silgi" ends in a vowel
        assert_eq!(Some(PluralSuffix::Ler), predict_suffix("silgi"));
        // "otomobil": o ... i
        assert_eq!(Some(PluralSuffix::Ler), predict_suffix("otomobil"));
        // "bisiklet" vs "saat"
        assert_eq!(Some(PluralSuffix::Ler), predict_suffix("bisiklet"));
        assert_eq!(Some(PluralSuffix::Lar), predict_suffix("saat"));
    }

    #[test]
    fn test_predict_suffix_without_vowel() {
        assert_eq!(None, predict_suffix(""));
        assert_eq!(None, predict_suffix("krş"));
        assert_eq!(None, predict_suffix("TV"));
    }

    #[test]
    fn test_plural_suffix_from_str() {
        assert_eq!(Ok(PluralSuffix::Lar), "lar".parse());
        assert_eq!(Ok(PluralSuffix::Ler), "ler".parse());
        assert!("".parse::<PluralSuffix>().is_err());
        assert!("leri".parse::<PluralSuffix>().is_err());
        assert!("Lar".parse::<PluralSuffix>().is_err());
    }

    #[test]
    fn test_split_suffix() {
        assert_eq!(Some("lar"), split_suffix("kitaplar", "kitap"));
        assert_eq!(Some(""), split_suffix("ev", "ev"));
        assert_eq!(Some("leri"), split_suffix("evleri", "ev"));
        assert_eq!(None, split_suffix("kitabı", "kitap"));
        assert_eq!(None, split_suffix("ev", "evler"));
    }
}
