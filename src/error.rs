use derive_more::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Error {
    #[display("invalid argument {input:?}: {reason}")]
    InvalidArgument { input: String, reason: String },
}

impl std::error::Error for Error {}
