use std::collections::HashSet;
use std::path::Path;

use polars::prelude::*;
use thiserror::Error;

use crate::models::Comment;
use crate::utils::timestamp::{parse_timestamp, to_millis};

pub const TIME: &str = "Time";
pub const COMPANY: &str = "Company";
pub const LABEL: &str = "BERT_Label";
pub const UPVOTES: &str = "Upvotes";

const REQUIRED_COLUMNS: [&str; 4] = [TIME, COMPANY, LABEL, UPVOTES];

#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),
    #[error("unparseable timestamp {value:?} at row {row}")]
    InvalidTimestamp { row: usize, value: String },
    #[error("column {column} contains non-numeric values")]
    NonNumeric { column: &'static str },
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// 规范化后的评论数据集：Time(Datetime ms) / Company / BERT_Label / Upvotes(f64)
#[derive(Debug, Clone)]
pub struct CommentFrame {
    df: DataFrame,
}

impl CommentFrame {
    pub fn from_comments(comments: &[Comment]) -> PolarsResult<Self> {
        let times: Vec<i64> = comments.iter().map(|c| to_millis(&c.time)).collect();
        let companies: Vec<&str> = comments.iter().map(|c| c.company.as_str()).collect();
        let labels: Vec<Option<&str>> = comments.iter().map(|c| c.label.as_deref()).collect();
        let upvotes: Vec<f64> = comments.iter().map(|c| c.upvotes).collect();

        let time = Series::new(TIME, times)
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;
        let df = DataFrame::new(vec![
            time,
            Series::new(COMPANY, companies),
            Series::new(LABEL, labels),
            Series::new(UPVOTES, upvotes),
        ])?;
        Ok(Self { df })
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// 去重后的公司列表，保持首次出现顺序；空白公司名不可选，直接跳过
    pub fn companies(&self) -> PolarsResult<Vec<String>> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        for name in self.df.column(COMPANY)?.str()?.into_iter().flatten() {
            if name.trim().is_empty() {
                continue;
            }
            if seen.insert(name) {
                out.push(name.to_string());
            }
        }
        Ok(out)
    }

    /// 按公司名精确匹配（区分大小写）
    pub fn filter_company(&self, company: &str) -> PolarsResult<CommentFrame> {
        let df = self
            .df
            .clone()
            .lazy()
            .filter(col(COMPANY).eq(lit(company)))
            .collect()?;
        Ok(Self { df })
    }
}

pub fn load_comments(path: &Path) -> Result<CommentFrame, DataFormatError> {
    let raw = CsvReadOptions::default()
        .with_has_header(true)
        // 全量推断类型，避免前 100 行全是整数时后面的小数无法解析
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let comments = parse_comments(&raw)?;
    let frame = CommentFrame::from_comments(&comments)?;
    tracing::info!(
        "loaded {} comments from {}",
        frame.height(),
        path.display()
    );
    Ok(frame)
}

/// 校验必需列并把原始 CSV 转成评论记录
pub fn parse_comments(raw: &DataFrame) -> Result<Vec<Comment>, DataFormatError> {
    let missing: Vec<&'static str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| raw.get_column_index(name).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(DataFormatError::MissingColumns(missing));
    }

    let times = raw.column(TIME)?.cast(&DataType::String)?;
    let companies = raw.column(COMPANY)?.cast(&DataType::String)?;
    let labels = raw.column(LABEL)?.cast(&DataType::String)?;

    let upvotes_raw = raw.column(UPVOTES)?;
    let upvotes = upvotes_raw.cast(&DataType::Float64)?;
    // 非数值在宽松转换后会变成 null
    if upvotes.null_count() > upvotes_raw.null_count() {
        return Err(DataFormatError::NonNumeric { column: UPVOTES });
    }

    let rows = times
        .str()?
        .into_iter()
        .zip(companies.str()?.into_iter())
        .zip(labels.str()?.into_iter())
        .zip(upvotes.f64()?.into_iter());

    let mut comments = Vec::with_capacity(raw.height());
    for (idx, (((time, company), label), upvotes)) in rows.enumerate() {
        let time = time
            .and_then(|t| parse_timestamp(t))
            .ok_or_else(|| DataFormatError::InvalidTimestamp {
                row: idx + 1,
                value: time.unwrap_or_default().to_string(),
            })?;
        comments.push(Comment {
            time,
            company: company.unwrap_or_default().to_string(),
            // 空标签等同缺失值，聚合时整组丢弃
            label: label.filter(|l| !l.is_empty()).map(str::to_string),
            upvotes: upvotes.unwrap_or(0.0),
        });
    }
    Ok(comments)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    use super::*;

    fn csv_file(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_and_normalizes_rows() {
        let file = csv_file(
            "Time,Company,BERT_Label,Upvotes,Comment\n\
             2024-01-15,TCS,POSITIVE,10,great\n\
             2024-01-15 09:30:00,INFY,NEGATIVE,-3,meh\n\
             2024-01-16,TCS,NEUTRAL,2,ok\n",
        );
        let frame = load_comments(file.path()).unwrap();
        assert_eq!(frame.height(), 3);
        assert_eq!(frame.companies().unwrap(), vec!["TCS", "INFY"]);

        let df = frame.dataframe();
        assert_eq!(
            df.column(TIME).unwrap().dtype(),
            &DataType::Datetime(TimeUnit::Milliseconds, None)
        );
        assert_eq!(df.column(UPVOTES).unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn float_upvotes_and_missing_values() {
        let file = csv_file(
            "Time,Company,BERT_Label,Upvotes\n\
             2024-01-15,TCS,POSITIVE,1.5\n\
             2024-01-15,TCS,NEGATIVE,\n",
        );
        let frame = load_comments(file.path()).unwrap();
        let upvotes: Vec<Option<f64>> = frame
            .dataframe()
            .column(UPVOTES)
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(upvotes, vec![Some(1.5), Some(0.0)]);
    }

    #[test]
    fn late_float_upvotes_after_many_integers() {
        let mut body = String::from("Time,Company,BERT_Label,Upvotes\n");
        for _ in 0..150 {
            body.push_str("2024-01-15,TCS,POSITIVE,3\n");
        }
        body.push_str("2024-01-16,TCS,NEGATIVE,2.5\n");
        let file = csv_file(&body);

        let frame = load_comments(file.path()).unwrap();
        assert_eq!(frame.height(), 151);
        let last = frame
            .dataframe()
            .column(UPVOTES)
            .unwrap()
            .f64()
            .unwrap()
            .get(150);
        assert_eq!(last, Some(2.5));
    }

    #[test]
    fn late_text_company_after_numeric_names() {
        let mut body = String::from("Time,Company,BERT_Label,Upvotes\n");
        for _ in 0..150 {
            body.push_str("2024-01-15,500325,POSITIVE,1\n");
        }
        body.push_str("2024-01-15,TCS,POSITIVE,1\n");
        let file = csv_file(&body);

        let frame = load_comments(file.path()).unwrap();
        assert_eq!(frame.companies().unwrap(), vec!["500325", "TCS"]);
    }

    #[test]
    fn missing_labels_stay_missing() {
        let file = csv_file(
            "Time,Company,BERT_Label,Upvotes\n\
             2024-01-15,A,POSITIVE,3\n\
             2024-01-16,A,,9\n",
        );
        let frame = load_comments(file.path()).unwrap();
        let labels: Vec<Option<&str>> = frame
            .dataframe()
            .column(LABEL)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(labels, vec![Some("POSITIVE"), None]);
    }

    #[test]
    fn blank_company_names_are_not_listed() {
        let file = csv_file(
            "Time,Company,BERT_Label,Upvotes\n\
             2024-01-15,,POSITIVE,3\n\
             2024-01-15,INFY,POSITIVE,1\n",
        );
        let frame = load_comments(file.path()).unwrap();
        assert_eq!(frame.companies().unwrap(), vec!["INFY"]);
    }

    #[test]
    fn reports_every_missing_column() {
        let file = csv_file("Time,Company\n2024-01-15,TCS\n");
        match load_comments(file.path()) {
            Err(DataFormatError::MissingColumns(cols)) => {
                assert_eq!(cols, vec![LABEL, UPVOTES]);
            }
            other => panic!("expected missing columns, got {:?}", other),
        }
    }

    #[test]
    fn rejects_unparseable_timestamp() {
        let file = csv_file(
            "Time,Company,BERT_Label,Upvotes\n\
             2024-01-15,TCS,POSITIVE,1\n\
             not-a-date,TCS,POSITIVE,1\n",
        );
        match load_comments(file.path()) {
            Err(DataFormatError::InvalidTimestamp { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("expected invalid timestamp, got {:?}", other),
        }
    }

    #[test]
    fn rejects_non_numeric_upvotes() {
        let file = csv_file(
            "Time,Company,BERT_Label,Upvotes\n\
             2024-01-15,TCS,POSITIVE,lots\n",
        );
        assert!(matches!(
            load_comments(file.path()),
            Err(DataFormatError::NonNumeric { column: UPVOTES })
        ));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_comments(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DataFormatError::Polars(_)));
    }

    #[test]
    fn filter_is_exact_and_case_sensitive() {
        let t = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let comment = |company: &str| Comment {
            time: t,
            company: company.to_string(),
            label: Some("POSITIVE".to_string()),
            upvotes: 1.0,
        };
        let frame =
            CommentFrame::from_comments(&[comment("TCS"), comment("tcs"), comment("TCS Ltd")])
                .unwrap();
        assert_eq!(frame.filter_company("TCS").unwrap().height(), 1);
        assert!(frame.filter_company("HDFC").unwrap().is_empty());
    }
}
