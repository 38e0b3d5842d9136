//! # harmony
//!
//! トルコ語名詞の複数形について、形態素屈折モデルの推論結果を母音調和規則で後処理し、
//! 補正前後の精度を評価するライブラリです。
//!
//! ## 概要
//!
//! 複数形接尾辞 `-lAr` は語幹の最後の母音に調和して `lar` か `ler` になります。
//! モデルが調和しない方の接尾辞を付けた場合、このライブラリはそれを調和する方に
//! 置き換えます。接尾辞以外の誤りには手を加えません。
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use harmony::{score, Dataset};
//!
//! let predicted = "kitap\tN;PL\tkitaplar\nev\tN;PL\tevlar\n";
//! let gold = "kitap\tN;PL\tkitaplar\nev\tN;PL\tevler\n";
//!
//! let predicted = Dataset::from_reader(predicted.as_bytes(), "predicted")?;
//! let gold = Dataset::from_reader(gold.as_bytes(), "gold")?;
//!
//! let evaluation = score(&predicted, &gold)?;
//! let scores = evaluation.scores();
//! assert_eq!(scores.correct_before, 1);
//! assert_eq!(scores.correct_after, 2);
//! assert_eq!(evaluation.corrected()[1].form(), "evler");
//! # Ok(())
//! # }
//! ```

/// 補正器
pub mod corrector;

/// データセットの読み書き
pub mod dataset;

/// エラー型の定義
pub mod errors;

/// 形態統語記述
pub mod msd;

/// 精度の計算
pub mod scorer;

/// 複数形接尾辞の予測
pub mod suffix;

/// 母音の分類
pub mod vowel;


// Re-exports
pub use corrector::{correct, Correction, Outcome};
pub use dataset::{Dataset, Record};
pub use errors::{HarmonyError, Result};
pub use msd::Msd;
pub use scorer::{score, Evaluation, Scores};
pub use suffix::{predict_suffix, PluralSuffix};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
