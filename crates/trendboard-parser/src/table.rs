use csv::StringRecord;

use crate::errors::ParserError;
use crate::model::{ComparisonAxis, Metric, RawObservation, RawValue};

/// A data row dropped during ingestion, with the 1-based line it came from.
#[derive(Debug, Clone)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: String,
}

/// Outcome of one parse pass: the surviving observations plus a report for
/// every row that failed row-level validation.
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub observations: Vec<RawObservation>,
    pub skipped: Vec<SkippedRow>,
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    article_id: usize,
    banner: usize,
    pack_size: usize,
    fiscal_week: usize,
    start_date: usize,
    end_date: usize,
    metric: usize,
    comparison: usize,
    value: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, ParserError> {
        Ok(Self {
            article_id: find_column(headers, "article_id")?,
            banner: find_column(headers, "banner")?,
            pack_size: find_column(headers, "pack_size")?,
            fiscal_week: find_column(headers, "fiscal_week")?,
            start_date: find_column(headers, "start_date")?,
            end_date: find_column(headers, "end_date")?,
            metric: find_column(headers, "metrics")?,
            comparison: find_column(headers, "comparison")?,
            value: find_column(headers, "value")?,
        })
    }

    fn decode(&self, record: &StringRecord) -> Result<RawObservation, String> {
        let week_text = field(record, self.fiscal_week);
        let fiscal_week: u32 = week_text
            .parse()
            .map_err(|_| format!("invalid fiscal_week '{week_text}'"))?;
        if fiscal_week == 0 {
            return Err("fiscal_week must be positive".to_string());
        }

        let metric = Metric::try_from(field(record, self.metric))?;
        let comparison = ComparisonAxis::try_from(field(record, self.comparison))?;

        Ok(RawObservation {
            article_id: field(record, self.article_id).to_string(),
            banner: field(record, self.banner).to_string(),
            pack_size: field(record, self.pack_size).to_string(),
            fiscal_week,
            start_date: field(record, self.start_date).to_string(),
            end_date: field(record, self.end_date).to_string(),
            metric,
            comparison,
            value: RawValue::Text(field(record, self.value).to_string()),
        })
    }
}

/// Parses the long-format trend export: first line is the column header,
/// matched case-insensitively after trimming. Rows whose fiscal week, metric,
/// or comparison axis do not decode are dropped and reported, never fatal.
pub fn parse_trend_table(content: &str) -> Result<ParsedTable, ParserError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut observations = Vec::new();
    let mut skipped = Vec::new();

    for (index, record) in reader.records().enumerate() {
        // line 1 is the header row
        let line = index + 2;
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                skipped.push(SkippedRow {
                    line,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        match columns.decode(&record) {
            Ok(observation) => observations.push(observation),
            Err(reason) => skipped.push(SkippedRow { line, reason }),
        }
    }

    if observations.is_empty() && skipped.is_empty() {
        return Err(ParserError::EmptyData);
    }

    Ok(ParsedTable {
        observations,
        skipped,
    })
}

fn find_column(headers: &StringRecord, name: &'static str) -> Result<usize, ParserError> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
        .ok_or(ParserError::MissingColumn { name })
}

fn field<'a>(record: &'a StringRecord, index: usize) -> &'a str {
    record.get(index).unwrap_or_default().trim()
}
