use std::io;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

/// Line of a 4-line FASTQ block that was expected but not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLine {
    Sequence,
    Separator,
    Quality,
}

impl RecordLine {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordLine::Sequence => "sequence",
            RecordLine::Separator => "separator",
            RecordLine::Quality => "quality",
        }
    }
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("truncated record: stream ended before the {} line", .missing.as_str())]
    TruncatedRecord { missing: RecordLine },
    #[error("input looks gzip-compressed; decompress it first")]
    CompressedInput,
}

#[derive(Debug, Error)]
pub enum FastqError {
    #[error("I/O error at {ctx:?}: {source}")]
    Io {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("malformed input at {ctx:?}: {source}")]
    Malformed {
        #[source]
        source: FormatError,
        ctx: IoContext,
    },
}

impl FastqError {
    pub(crate) fn io_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Io { source, ctx }
    }
    pub(crate) fn fmt_err(source: FormatError, ctx: IoContext) -> Self {
        Self::Malformed { source, ctx }
    }

    /// True for structural problems with the input (as opposed to I/O failures).
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

/// Crate-level error for everything past the reader.
#[derive(Debug, Error)]
pub enum QcError {
    #[error(transparent)]
    Fastq(#[from] FastqError),
    #[error("no reads in dataset")]
    EmptyDataset,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("row {row}: cannot parse column '{column}' from {value:?}")]
    InvalidField {
        row: usize,
        column: &'static str,
        value: String,
    },
}
