use thiserror::Error;

/// Errors that appears when loading from filesystem
#[derive(Debug, Error)]
pub enum LoadError {
    /// Generic parsing error with description
    #[error("{0}")]
    Parsing(String),
    /// File system error when reading a texture or listing a folder
    #[error("File system error with file {0}, due: {1}")]
    FileSystem(std::path::PathBuf, std::io::Error),
}

/// Errors that the texture parser can produce
#[derive(Debug, Error)]
pub enum Error {
    /// The buffer cannot be a texture: too short for the header or
    /// describing an image without pixels
    #[error("Malformed texture container: {0}")]
    MalformedContainer(String),
    /// The requested mipmap level is not fully stored in the texture body
    #[error("There is no mipmap level {level} in the texture, {available} complete level(s) found")]
    LevelNotFound {
        /// Requested level id
        level: usize,
        /// Number of complete levels stored in the body
        available: usize,
    },
    /// Little-endian field does not fit into 64 bits
    #[error("Integer field of {0} bytes does not fit into 64 bits")]
    IntegerOverflow(usize),
    /// Unexpected end of file while parsing
    #[error("Unexpected end of file")]
    UnexpectedEof,
    /// Parser error with context information
    #[error("Context: {0}. Error: {1}")]
    Context(String, Box<Self>),
}

impl Error {
    /// Add context information to an error
    pub fn with_context(self, context: &str) -> Self {
        Error::Context(context.to_owned(), Box::new(self))
    }
}
