use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

/// The result type used across the trainer.
pub type Result<T> = std::result::Result<T, TrainErr>;

/// Every way a training run can fail. None of them are recovered from.
#[derive(Debug)]
pub enum TrainErr {
    /// The input table is missing, unreadable or malformed.
    DataLoad {
        path: PathBuf,
        reason: DataLoadReason,
    },
    /// A required column is absent, or a matrix shape does not match what's expected.
    Schema(SchemaErr),
    /// The model artifact could not be written or read back.
    Serialization {
        path: PathBuf,
        source: SerializationSource,
    },
    /// Too few rows to split or to solve for every parameter.
    InsufficientData {
        what: &'static str,
        got: usize,
        needed: usize,
    },
    /// The least squares solve did not produce finite coefficients.
    Fit(String),
    /// A training parameter is out of range, caught before touching any data.
    InvalidConfig(String),
}

#[derive(Debug)]
pub enum DataLoadReason {
    Io(io::Error),
    Csv(csv::Error),
    Empty,
    NotNumeric {
        line: u64,
        column: String,
        value: String,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum SchemaErr {
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
    WidthMismatch {
        got: usize,
        expected: usize,
    },
    RowMismatch {
        targets: usize,
        rows: usize,
    },
}

#[derive(Debug)]
pub enum SerializationSource {
    Io(io::Error),
    Encoding(bincode::Error),
    UnsupportedVersion { got: u32, expected: u32 },
}

impl TrainErr {
    pub(crate) fn data_load(path: impl Into<PathBuf>, reason: DataLoadReason) -> Self {
        Self::DataLoad {
            path: path.into(),
            reason,
        }
    }

    pub(crate) fn serialization(path: impl Into<PathBuf>, source: SerializationSource) -> Self {
        Self::Serialization {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is a missing column or a shape mismatch.
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}

impl Display for TrainErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainErr::DataLoad { path, reason } => {
                write!(f, "failed to load dataset {}: {reason}", path.display())
            }
            TrainErr::Schema(e) => write!(f, "schema error: {e}"),
            TrainErr::Serialization { path, source } => {
                write!(f, "failed to serialize model at {}: {source}", path.display())
            }
            TrainErr::InsufficientData { what, got, needed } => {
                write!(f, "not enough rows for {what}, got {got} and needed {needed}")
            }
            TrainErr::Fit(msg) => write!(f, "least squares fit failed: {msg}"),
            TrainErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Display for DataLoadReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataLoadReason::Io(_) => write!(f, "io error"),
            DataLoadReason::Csv(_) => write!(f, "malformed csv"),
            DataLoadReason::Empty => write!(f, "the table has a header but no rows"),
            DataLoadReason::NotNumeric {
                line,
                column,
                value,
            } => write!(
                f,
                "line {line}: column `{column}` holds {value:?}, which is not a number"
            ),
        }
    }
}

impl Display for SchemaErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaErr::MissingColumn { column, available } => write!(
                f,
                "column `{column}` is not present, available columns are {available:?}"
            ),
            SchemaErr::WidthMismatch { got, expected } => write!(
                f,
                "expected {expected} feature columns, got {got}"
            ),
            SchemaErr::RowMismatch { targets, rows } => write!(
                f,
                "expected one target per feature row, got {targets} targets for {rows} rows"
            ),
        }
    }
}

impl Display for SerializationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializationSource::Io(_) => write!(f, "io error"),
            SerializationSource::Encoding(_) => write!(f, "encoding error"),
            SerializationSource::UnsupportedVersion { got, expected } => write!(
                f,
                "artifact format version {got} is not supported, expected {expected}"
            ),
        }
    }
}

impl Error for TrainErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TrainErr::DataLoad {
                reason: DataLoadReason::Io(e),
                ..
            } => Some(e),
            TrainErr::DataLoad {
                reason: DataLoadReason::Csv(e),
                ..
            } => Some(e),
            TrainErr::Serialization {
                source: SerializationSource::Io(e),
                ..
            } => Some(e),
            TrainErr::Serialization {
                source: SerializationSource::Encoding(e),
                ..
            } => Some(e),
            _ => None,
        }
    }
}

impl From<SchemaErr> for TrainErr {
    fn from(value: SchemaErr) -> Self {
        Self::Schema(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_message_names_the_column() {
        let err = TrainErr::from(SchemaErr::MissingColumn {
            column: "engine_temp".into(),
            available: vec!["speed".into(), "fuel_efficiency".into()],
        });

        assert!(err.is_schema());
        let msg = err.to_string();
        assert!(msg.contains("engine_temp"), "{msg}");
        assert!(msg.contains("speed"), "{msg}");
    }

    #[test]
    fn io_failures_expose_their_source() {
        let io = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = TrainErr::data_load("missing.csv", DataLoadReason::Io(io));

        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.csv"));
    }

    #[test]
    fn wrapped_errors_are_printed_once() {
        let io = io::Error::new(io::ErrorKind::PermissionDenied, "read-only volume");
        let err = TrainErr::serialization("model.bin", SerializationSource::Io(io));

        let msg = err.to_string();
        assert!(!msg.contains("read-only volume"), "{msg}");
        assert_eq!(err.source().unwrap().to_string(), "read-only volume");

        let chain = format!("{:?}", anyhow::Error::new(err));
        assert_eq!(chain.matches("read-only volume").count(), 1, "{chain}");
    }
}
