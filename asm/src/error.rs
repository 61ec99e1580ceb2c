use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    /// Raised instead of the zero-bits fallback when assembling with --strict.
    #[error("Unknown {kind} mnemonic: `{text}`")]
    UnknownMnemonic { kind: &'static str, text: String },

    /// Raised instead of skipping the line when assembling with --strict.
    #[error("Cannot parse as an instruction: `{0}`")]
    InvalidCommand(String),
}
