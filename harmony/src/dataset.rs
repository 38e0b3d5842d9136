//! データセットのモジュール。
//!
//! 推論結果と正解データは同じ形式のテキストで与えられます。
//! 各行が「見出し語\tMSD\t語形」の3列からなり、空行は読み飛ばされます。

use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::ops::Deref;

use crate::errors::{HarmonyError, Result};
use crate::msd::Msd;

/// 見出し語・形態統語記述・語形の組。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    lemma: String,
    msd: Msd,
    form: String,
}

impl Record {
    /// 新しいレコードを作成します。
    ///
    /// # 引数
    ///
    /// * `lemma` - 見出し語
    /// * `msd` - 形態統語記述
    /// * `form` - 語形（推論形または正解形）
    pub fn new<L, M, F>(lemma: L, msd: M, form: F) -> Self
    where
        L: Into<String>,
        M: Into<Msd>,
        F: Into<String>,
    {
        Self {
            lemma: lemma.into(),
            msd: msd.into(),
            form: form.into(),
        }
    }

    /// 見出し語を返します。
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// 形態統語記述を返します。
    pub fn msd(&self) -> &Msd {
        &self.msd
    }

    /// 語形を返します。
    pub fn form(&self) -> &str {
        &self.form
    }

    /// 語形だけを置き換えたレコードを返します。
    pub fn with_form<F>(&self, form: F) -> Self
    where
        F: Into<String>,
    {
        Self {
            lemma: self.lemma.clone(),
            msd: self.msd.clone(),
            form: form.into(),
        }
    }

    /// 1行をパースします。
    ///
    /// # エラー
    ///
    /// ちょうど3列に分割できない場合、[`HarmonyError`] が返されます。
    fn parse(line: &str, source: &'static str, lineno: usize) -> Result<Self> {
        let mut spl = line.split('\t');
        let lemma = spl.next();
        let msd = spl.next();
        let form = spl.next();
        let rest = spl.next();
        match (lemma, msd, form, rest) {
            (Some(lemma), Some(msd), Some(form), None) => Ok(Self::new(lemma, msd, form)),
            _ => Err(HarmonyError::invalid_format(
                source,
                lineno,
                "Each line must have exactly three tab-separated fields: lemma, msd and form",
            )),
        }
    }
}

/// 整列済みのレコード列。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// 指定されたリーダーからデータセットを読み込みます。
    ///
    /// 各行は前後の空白を除去してから3列に分割されます。
    ///
    /// # 引数
    ///
    /// * `rdr` - データセットのリーダー
    /// * `source` - エラーメッセージに使われる入力の名前
    ///
    /// # エラー
    ///
    /// 入力形式が不正な場合、[`HarmonyError`] が返されます。
    pub fn from_reader<R>(rdr: R, source: &'static str) -> Result<Self>
    where
        R: Read,
    {
        let buf = BufReader::new(rdr);

        let mut records = vec![];
        for (i, line) in buf.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            records.push(Record::parse(line, source, i + 1)?);
        }

        Ok(Self { records })
    }

    /// データセットを「見出し語\tMSD\t語形」の形式で書き出します。
    ///
    /// # エラー
    ///
    /// 書き込みに失敗した場合、I/Oエラーが返されます。
    pub fn write<W>(&self, wtr: W) -> Result<()>
    where
        W: Write,
    {
        let mut wtr = BufWriter::new(wtr);
        for record in &self.records {
            writeln!(&mut wtr, "{}\t{}\t{}", record.lemma, record.msd, record.form)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Deref for Dataset {
    type Target = [Record];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_dataset() {
        let data = "\
kitap\tN;PL\tkitaplar
ev\tN;PL\tevlar

gitmek\tV;PST;3;SG\tgitti
";

        let dataset = Dataset::from_reader(data.as_bytes(), "data").unwrap();

        assert_eq!(3, dataset.len());
        assert_eq!("kitap", dataset[0].lemma());
        assert_eq!("N;PL", dataset[0].msd().as_str());
        assert_eq!("kitaplar", dataset[0].form());
        assert_eq!("evlar", dataset[1].form());
        assert_eq!("gitmek", dataset[2].lemma());
        assert_eq!("V;PST;3;SG", dataset[2].msd().as_str());
    }

    #[test]
    fn test_load_dataset_with_crlf() {
        let data = "kitap\tN;PL\tkitaplar\r\nev\tN;PL\tevler\r\n";

        let dataset = Dataset::from_reader(data.as_bytes(), "data").unwrap();

        assert_eq!(2, dataset.len());
        assert_eq!("kitaplar", dataset[0].form());
        assert_eq!("evler", dataset[1].form());
    }

    #[test]
    fn test_load_empty_dataset() {
        let dataset = Dataset::from_reader("\n\n".as_bytes(), "data").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_too_few_fields() {
        let data = "kitap\tN;PL\tkitaplar\nev\tN;PL\n";

        let result = Dataset::from_reader(data.as_bytes(), "data");

        match result {
            Err(HarmonyError::InvalidFormat(e)) => assert_eq!(2, e.line()),
            _ => panic!("expected an invalid format error"),
        }
    }

    #[test]
    fn test_too_many_fields() {
        let data = "kitap\tN;PL\tkitaplar\textra\n";

        let result = Dataset::from_reader(data.as_bytes(), "data");

        assert!(matches!(result, Err(HarmonyError::InvalidFormat(_))));
    }

    #[test]
    fn test_write_dataset() {
        let dataset: Dataset = vec![
            Record::new("kitap", "N;PL", "kitaplar"),
            Record::new("ev", "N;PL", "evler"),
        ]
        .into();

        let mut out = vec![];
        dataset.write(&mut out).unwrap();

        assert_eq!(
            "kitap\tN;PL\tkitaplar\nev\tN;PL\tevler\n",
            String::from_utf8(out).unwrap()
        );
    }
}
