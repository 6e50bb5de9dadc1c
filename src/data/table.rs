use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use log::{debug, info};
use ndarray::ArrayView1;

use crate::error::{DataLoadReason, Result, SchemaErr, TrainErr};

/// One column of the loaded table.
#[derive(Debug, Clone, PartialEq)]
enum Column {
    Numeric(Vec<f64>),
    /// Keeps the first cell that failed to parse, so selecting it can say where.
    NonNumeric { line: u64, value: String },
}

/// A fully loaded, immutable, column-major table of named numeric columns.
///
/// Columns holding anything other than finite numbers are kept by name only;
/// they cost nothing unless someone selects them.
#[derive(Debug, Clone)]
pub struct Table {
    source: PathBuf,
    headers: Vec<String>,
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Reads the whole csv file at `path`. A header row is required.
    ///
    /// # Errors
    /// `TrainErr::DataLoad` if the file can't be opened, isn't valid csv or has no rows.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|e| TrainErr::data_load(path, DataLoadReason::Io(e)))?;

        let table = Self::from_reader(file, path)?;
        info!(
            "loaded {} rows x {} columns from {}",
            table.rows,
            table.headers.len(),
            path.display()
        );
        Ok(table)
    }

    /// Reads a csv table from any reader. `source` is only used in error messages.
    pub fn from_reader<R: Read>(reader: R, source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        let csv_err = |e| TrainErr::data_load(source.clone(), DataLoadReason::Csv(e));

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .map_err(csv_err)?
            .iter()
            .map(str::to_string)
            .collect();

        let mut columns: Vec<Column> = headers.iter().map(|_| Column::Numeric(vec![])).collect();
        let mut rows = 0;

        for record in reader.records() {
            let record = record.map_err(csv_err)?;
            let line = record.position().map_or(0, |p| p.line());

            for (column, field) in columns.iter_mut().zip(record.iter()) {
                if let Column::Numeric(values) = column {
                    match field.parse::<f64>() {
                        Ok(v) if v.is_finite() => {
                            values.push(v);
                            continue;
                        }
                        _ => {}
                    }

                    *column = Column::NonNumeric {
                        line,
                        value: field.to_string(),
                    };
                }
            }

            rows += 1;
        }

        if rows == 0 {
            return Err(TrainErr::data_load(source, DataLoadReason::Empty));
        }

        for (name, column) in headers.iter().zip(&columns) {
            if let Column::NonNumeric { line, value } = column {
                debug!("column `{name}` is not numeric (line {line}: {value:?})");
            }
        }

        Ok(Self {
            source,
            headers,
            columns,
            rows,
        })
    }

    /// Number of data rows, the header excluded.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    #[inline]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the position of the column called `name`.
    ///
    /// # Errors
    /// `TrainErr::Schema` if there's no column with that name.
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.headers.iter().position(|h| h == name).ok_or_else(|| {
            SchemaErr::MissingColumn {
                column: name.to_string(),
                available: self.headers.clone(),
            }
            .into()
        })
    }

    /// Returns a view over the numeric column called `name`.
    ///
    /// # Errors
    /// * `TrainErr::Schema` - There's no column with that name.
    /// * `TrainErr::DataLoad` - The column exists but some cell isn't a finite number.
    pub fn column(&self, name: &str) -> Result<ArrayView1<'_, f64>> {
        match &self.columns[self.index_of(name)?] {
            Column::Numeric(values) => Ok(ArrayView1::from(values.as_slice())),
            Column::NonNumeric { line, value } => Err(TrainErr::data_load(
                self.source.clone(),
                DataLoadReason::NotNumeric {
                    line: *line,
                    column: name.to_string(),
                    value: value.clone(),
                },
            )),
        }
    }
}
