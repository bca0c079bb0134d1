//! Coordinate Table Loader
//!
//! Parses comma-separated `x,y` (or `x,y,flag`) rows into an ordered
//! table. Row order is stroke order and is preserved exactly as read.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::LoadError;

/// Declared table shape: plain `x,y` rows or `x,y,flag` rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Columns {
    Two,
    Three,
}

impl Columns {
    /// Number of fields every row must carry
    pub fn count(self) -> usize {
        match self {
            Columns::Two => 2,
            Columns::Three => 3,
        }
    }
}

/// One table row.
///
/// `flag` is present only for three-column tables. A flag of 1 means
/// "draw while moving to this point"; any other value lifts the pen.
/// The flag is kept as a float so inputs like `1.0` compare equal to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub x: f64,
    pub y: f64,
    pub flag: Option<f64>,
}

impl Record {
    /// Whether this record asks for a drawn segment (pen down)
    pub fn pen_down(&self) -> bool {
        self.flag == Some(1.0)
    }
}

/// An ordered coordinate table of uniform shape
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Columns,
    pub records: Vec<Record>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse comma-separated input into a table of the declared shape.
///
/// No header row is assumed; blank lines are skipped and fields are
/// trimmed of surrounding whitespace. The whole table is rejected on
/// the first row whose field count differs from `columns` or whose
/// field fails to parse as a number.
pub fn load(input: &str, columns: Columns) -> Result<Table, LoadError> {
    let expected = columns.count();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input.as_bytes());

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        if row.len() != expected {
            return Err(LoadError::Schema {
                expected,
                found: row.len(),
                row: idx + 1,
            });
        }

        let x = parse_field(&row, 0, idx)?;
        let y = parse_field(&row, 1, idx)?;
        let flag = match columns {
            Columns::Two => None,
            Columns::Three => Some(parse_field(&row, 2, idx)?),
        };
        records.push(Record { x, y, flag });
    }

    Ok(Table { columns, records })
}

fn parse_field(row: &StringRecord, column: usize, idx: usize) -> Result<f64, LoadError> {
    let value = &row[column];
    value.parse::<f64>().map_err(|source| LoadError::Parse {
        row: idx + 1,
        column: column + 1,
        value: value.to_string(),
        source,
    })
}
