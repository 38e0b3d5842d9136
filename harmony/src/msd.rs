//! 形態統語記述（MSD）
//!
//! UniMorph形式の `;` 区切りのタグ列（例: `N;NOM;PL`）を扱います。
//! タグは完全一致で照合し、部分文字列では照合しません（`NOM` は `N` ではありません）。

use std::fmt;

/// 名詞を表すタグ
pub const NOUN_TAG: &str = "N";

/// 複数を表すタグ
pub const PLURAL_TAG: &str = "PL";

/// 形態統語記述
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Msd(String);

impl Msd {
    /// 記述文字列から作成します。
    pub fn new<S>(msd: S) -> Self
    where
        S: Into<String>,
    {
        Self(msd.into())
    }

    /// 記述文字列をそのまま返します。
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// タグのイテレータを返します。
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.0.split(';').map(str::trim)
    }

    /// 指定されたタグを含むかどうかを判定します。
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().any(|t| t == tag)
    }

    /// 名詞かどうか
    pub fn is_noun(&self) -> bool {
        self.has_tag(NOUN_TAG)
    }

    /// 複数かどうか
    pub fn is_plural(&self) -> bool {
        self.has_tag(PLURAL_TAG)
    }

    /// 複数形接尾辞の補正対象となる複数名詞かどうかを判定します。
    ///
    /// 補正を行うかどうかの唯一の判定条件です。
    pub fn is_plural_noun(&self) -> bool {
        self.is_noun() && self.is_plural()
    }
}

impl From<&str> for Msd {
    fn from(msd: &str) -> Self {
        Self::new(msd)
    }
}

impl fmt::Display for Msd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
