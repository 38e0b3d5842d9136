//! 補正前後の精度の計算
//!
//! 推論データと正解データを位置で対応付け、各推論形を補正器に通して
//! 補正前と補正後の一致数を数えます。

use crate::corrector::{correct, Outcome};
use crate::dataset::{Dataset, Record};
use crate::errors::{HarmonyError, Result};

/// 一致数の集計結果。
///
/// `total` は常に1以上です。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scores {
    /// 補正前に正解と一致したレコード数
    pub correct_before: usize,
    /// 補正後に正解と一致したレコード数
    pub correct_after: usize,
    /// レコード総数
    pub total: usize,
    /// 補正により書き換えられたレコード数
    pub corrected: usize,
    /// 見出し語が推論形の接頭辞でなかった複数名詞のレコード数
    pub stem_altered: usize,
    /// 補正前は一致していたが補正後に一致しなくなったレコード数
    pub regressions: usize,
}

impl Scores {
    /// 補正前の精度（0以上1以下）
    pub fn accuracy_before(&self) -> f64 {
        self.correct_before as f64 / self.total as f64
    }

    /// 補正後の精度（0以上1以下）
    pub fn accuracy_after(&self) -> f64 {
        self.correct_after as f64 / self.total as f64
    }
}

/// 評価結果。
#[derive(Clone, Debug)]
pub struct Evaluation {
    scores: Scores,
    corrected: Dataset,
}

impl Evaluation {
    /// 集計結果を返します。
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// 補正後の推論データを返します。
    ///
    /// 推論データと同じ順序で並んでいます。
    pub fn corrected(&self) -> &Dataset {
        &self.corrected
    }
}

/// 推論データを補正し、補正前後の精度を計算します。
///
/// # 引数
///
/// * `predicted` - 推論データ
/// * `gold` - 正解データ
///
/// # エラー
///
/// 次の場合は途中結果を返さずにエラーとなります。
///
/// - レコード数が異なる
/// - 同じ位置のレコードで見出し語または MSD が異なる
/// - レコードが1件もない
pub fn score(predicted: &[Record], gold: &[Record]) -> Result<Evaluation> {
    if predicted.len() != gold.len() {
        return Err(HarmonyError::LengthMismatch {
            predicted: predicted.len(),
            gold: gold.len(),
        });
    }
    if predicted.is_empty() {
        return Err(HarmonyError::EmptyDataset);
    }

    let mut scores = Scores {
        correct_before: 0,
        correct_after: 0,
        total: 0,
        corrected: 0,
        stem_altered: 0,
        regressions: 0,
    };
    let mut corrected = Vec::with_capacity(predicted.len());

    for (i, (sys, gold)) in predicted.iter().zip(gold).enumerate() {
        if sys.lemma() != gold.lemma() {
            return Err(HarmonyError::misaligned(
                i + 1,
                "lemma",
                sys.lemma(),
                gold.lemma(),
            ));
        }
        if sys.msd() != gold.msd() {
            return Err(HarmonyError::misaligned(
                i + 1,
                "msd",
                sys.msd().as_str(),
                gold.msd().as_str(),
            ));
        }

        let hit_before = sys.form() == gold.form();

        let correction = correct(sys.form(), sys.lemma(), sys.msd());
        match correction.outcome() {
            Outcome::Rewritten { from, to } => {
                log::debug!(
                    "record {}: {} -> {} ({} -> {})",
                    i + 1,
                    sys.form(),
                    correction.form(),
                    from,
                    to,
                );
                scores.corrected += 1;
            }
            Outcome::StemAltered => {
                log::debug!(
                    "record {}: lemma {:?} is not a prefix of {:?}",
                    i + 1,
                    sys.lemma(),
                    sys.form(),
                );
                scores.stem_altered += 1;
            }
            _ => (),
        }
        let hit_after = correction.form() == gold.form();

        if hit_before {
            scores.correct_before += 1;
        }
        if hit_after {
            scores.correct_after += 1;
        }
        if hit_before && !hit_after {
            scores.regressions += 1;
        }
        scores.total += 1;

        corrected.push(sys.with_form(correction.into_form()));
    }

    log::info!(
        "scored {} records: {} corrected, {} with an altered stem",
        scores.total,
        scores.corrected,
        scores.stem_altered,
    );

    Ok(Evaluation {
        scores,
        corrected: corrected.into(),
    })
}
