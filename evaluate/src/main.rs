//! 推論結果の精度を評価するユーティリティ
//!
//! このバイナリは、形態素屈折モデルが出力したトルコ語名詞の複数形を
//! 母音調和規則で補正し、正解データと比較して補正前後の精度を表示します。

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use harmony::{score, Dataset, HarmonyError};

use clap::Parser;
use thiserror::Error;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(
    name = "evaluate",
    version,
    about = "Corrects plural suffix harmony and evaluates the accuracy"
)]
struct Args {
    /// Predictions of the inflection model (lemma, msd and form per line, tab-separated).
    #[clap(short = 'p', long, default_value = "data/tur.out")]
    predicted_in: PathBuf,

    /// Gold references aligned line by line with the predictions.
    #[clap(short = 'g', long, default_value = "data/tur.dev")]
    gold_in: PathBuf,

    /// A file to which the corrected predictions are written in the input format.
    #[clap(short = 'o', long)]
    corrected_out: Option<PathBuf>,
}

/// 評価中に発生する可能性のあるエラー
#[derive(Debug, Error)]
enum EvaluateError {
    /// 入出力エラー
    #[error("I/O error on {path}: {source}")]
    Io {
        /// 対象のパス
        path: PathBuf,
        /// 原因
        source: io::Error,
    },

    /// 読み込みまたは評価のエラー
    #[error("Evaluation failed: {0}")]
    Harmony(#[from] HarmonyError),
}

/// データセットを読み込む
fn load(path: &Path, name: &'static str) -> Result<Dataset, EvaluateError> {
    let rdr = File::open(path).map_err(|source| EvaluateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Dataset::from_reader(rdr, name)?)
}

/// 比率を小数点以下2桁のパーセント表記にする
fn percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// メイン関数
///
/// 推論データと正解データを読み込み、補正前後の精度を標準出力に出力します。
///
/// # 戻り値
///
/// 実行が成功した場合は `Ok(())`、エラーが発生した場合はエラー情報
fn main() -> Result<(), EvaluateError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    eprintln!("Loading the datasets...");
    let predicted = load(&args.predicted_in, "predicted")?;
    let gold = load(&args.gold_in, "gold")?;

    eprintln!("Scoring {} records...", predicted.len());
    let evaluation = score(&predicted, &gold)?;
    let scores = evaluation.scores();

    eprintln!(
        "Corrected {} forms ({} with an altered stem were left as is)",
        scores.corrected, scores.stem_altered
    );
    if scores.regressions != 0 {
        log::warn!(
            "{} forms matched the gold data before correction but not after",
            scores.regressions
        );
    }

    println!(
        "Accuracy before correction = {}",
        percent(scores.accuracy_before())
    );
    println!(
        "Accuracy after correction = {}",
        percent(scores.accuracy_after())
    );

    if let Some(path) = args.corrected_out {
        let wtr = File::create(&path).map_err(|source| EvaluateError::Io {
            path: path.clone(),
            source,
        })?;
        evaluation.corrected().write(wtr)?;
        eprintln!("Wrote the corrected predictions to {}", path.display());
    }

    Ok(())
}
