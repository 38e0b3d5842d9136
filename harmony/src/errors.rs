//! エラー型の定義
//!
//! このモジュールは、harmonyライブラリで使用されるすべてのエラー型を定義します。
//! 評価はバッチ処理であり、いずれのエラーも回復不能として呼び出し元に返されます。

use std::error::Error;
use std::fmt;

/// harmony専用のResult型
///
/// エラー型としてデフォルトで[`HarmonyError`]を使用します。
pub type Result<T, E = HarmonyError> = std::result::Result<T, E>;

/// harmonyのエラー型
#[derive(Debug, thiserror::Error)]
pub enum HarmonyError {
    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// 整列エラー
    ///
    /// [`MisalignedError`]のエラーバリアント。
    #[error(transparent)]
    Misaligned(MisalignedError),

    /// 予測データと正解データのレコード数が異なる場合に発生します。
    #[error("Datasets have different lengths: {predicted} predicted vs {gold} gold records")]
    LengthMismatch {
        /// 予測データのレコード数
        predicted: usize,
        /// 正解データのレコード数
        gold: usize,
    },

    /// レコードが1件もない場合に発生します。
    ///
    /// 精度の分母が0になるため、評価を行えません。
    #[error("No data: the datasets contain no records")]
    EmptyDataset,

    /// I/Oエラー
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HarmonyError {
    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `source` - 入力の名前
    /// * `line` - 1始まりの行番号
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(source: &'static str, line: usize, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            source,
            line,
            msg: msg.into(),
        })
    }

    /// 整列エラーを生成します
    ///
    /// # 引数
    ///
    /// * `position` - 1始まりのレコード位置
    /// * `field` - 食い違ったフィールド名
    /// * `predicted` - 予測側の値
    /// * `gold` - 正解側の値
    pub(crate) fn misaligned<P, G>(
        position: usize,
        field: &'static str,
        predicted: P,
        gold: G,
    ) -> Self
    where
        P: Into<String>,
        G: Into<String>,
    {
        Self::Misaligned(MisalignedError {
            position,
            field,
            predicted: predicted.into(),
            gold: gold.into(),
        })
    }
}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// 入力の名前
    pub(crate) source: &'static str,

    /// 1始まりの行番号
    pub(crate) line: usize,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl InvalidFormatError {
    /// 問題のあった行番号を返します。
    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "InvalidFormatError: {}: line {}: {}",
            self.source, self.line, self.msg
        )
    }
}

impl Error for InvalidFormatError {}

/// 予測レコードと正解レコードの見出し語またはMSDが一致しない場合に使用されるエラー
///
/// 2つのデータセットが正しく整列していないことを示します。
#[derive(Debug)]
pub struct MisalignedError {
    /// 1始まりのレコード位置
    pub(crate) position: usize,

    /// 食い違ったフィールド名（`lemma` または `msd`）
    pub(crate) field: &'static str,

    /// 予測側の値
    pub(crate) predicted: String,

    /// 正解側の値
    pub(crate) gold: String,
}

impl MisalignedError {
    /// 食い違いが見つかったレコード位置を返します。
    pub fn position(&self) -> usize {
        self.position
    }

    /// 食い違ったフィールド名を返します。
    pub fn field(&self) -> &'static str {
        self.field
    }
}

impl fmt::Display for MisalignedError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "MisalignedError: record {}: {} differs (predicted {:?}, gold {:?})",
            self.position, self.field, self.predicted, self.gold
        )
    }
}

impl Error for MisalignedError {}
