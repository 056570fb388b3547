use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsensusError {
    #[error("Malformed variant line, expected at least 8 tab-separated fields: {0}")]
    MalformedVariantLine(String),

    #[error("Invalid position field '{position}' in variant line: {line}")]
    InvalidPosition { position: String, line: String },

    #[error("Reference stream contains sequence data before any header line")]
    SequenceBeforeHeader,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
