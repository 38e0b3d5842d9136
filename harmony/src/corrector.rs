//! 母音調和による複数形接尾辞の補正
//!
//! 推論形の接尾辞が `lar`/`ler` のうち見出し語に調和しない方であれば、
//! 調和する方に置き換えます。それ以外の推論形は変更しません。

use std::borrow::Cow;

use crate::msd::Msd;
use crate::suffix::{predict_suffix, split_suffix, PluralSuffix};

/// 補正判定の結果の種類
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// 複数名詞ではないため判定していない
    NotApplicable,
    /// 見出し語が推論形の接頭辞ではない（モデルが語幹を変えた）
    StemAltered,
    /// 見出し語の後ろが `lar`/`ler` のいずれとも完全一致しない
    NoPluralSuffix,
    /// 見出し語が母音を含まず、接尾辞を予測できない
    NoVowel,
    /// 接尾辞がすでに調和している
    AlreadyHarmonic,
    /// 接尾辞を置き換えた
    Rewritten {
        /// 推論形に付いていた接尾辞
        from: PluralSuffix,
        /// 置き換え後の接尾辞
        to: PluralSuffix,
    },
}

/// 補正の結果
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Correction<'a> {
    form: Cow<'a, str>,
    outcome: Outcome,
}

impl<'a> Correction<'a> {
    fn unchanged(form: &'a str, outcome: Outcome) -> Self {
        Self {
            form: Cow::Borrowed(form),
            outcome,
        }
    }

    /// 補正後の語形を返します。
    pub fn form(&self) -> &str {
        &self.form
    }

    /// 補正後の語形を取り出します。
    pub fn into_form(self) -> Cow<'a, str> {
        self.form
    }

    /// 判定結果を返します。
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// 語形が書き換えられたかどうか
    pub fn is_rewritten(&self) -> bool {
        matches!(self.outcome, Outcome::Rewritten { .. })
    }
}

/// 推論形を補正します。
///
/// 次のすべてを満たす場合に限り、見出し語に予測された接尾辞を付けた語形を返します。
///
/// 1. MSD が複数名詞を表す
/// 2. 見出し語より後ろの部分が `lar` または `ler` と完全に一致する
/// 3. その接尾辞が [`predict_suffix`] の予測と異なる
///
/// それ以外の場合は推論形をそのまま返します。
///
/// # 引数
///
/// * `form` - 推論形
/// * `lemma` - 見出し語
/// * `msd` - 形態統語記述
///
/// # 例
///
/// ```
/// use harmony::corrector::correct;
/// use harmony::msd::Msd;
///
/// let msd = Msd::from("N;PL");
/// assert_eq!("evler", correct("evlar", "ev", &msd).form());
/// assert_eq!("kitaplar", correct("kitaplar", "kitap", &msd).form());
/// ```
pub fn correct<'a>(form: &'a str, lemma: &str, msd: &Msd) -> Correction<'a> {
    if !msd.is_plural_noun() {
        return Correction::unchanged(form, Outcome::NotApplicable);
    }
    let Some(suffix) = split_suffix(form, lemma) else {
        return Correction::unchanged(form, Outcome::StemAltered);
    };
    let Ok(found) = suffix.parse::<PluralSuffix>() else {
        return Correction::unchanged(form, Outcome::NoPluralSuffix);
    };
    let Some(expected) = predict_suffix(lemma) else {
        return Correction::unchanged(form, Outcome::NoVowel);
    };
    if found == expected {
        return Correction::unchanged(form, Outcome::AlreadyHarmonic);
    }

    let mut corrected = String::with_capacity(lemma.len() + expected.as_str().len());
    corrected.push_str(lemma);
    corrected.push_str(expected.as_str());
    Correction {
        form: Cow::Owned(corrected),
        outcome: Outcome::Rewritten {
            from: found,
            to: expected,
        },
    }
}
