//! # Errors
//!
//! Errors created while reading integer lists.
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::io;

/// Line number (starting at 1) and the contents of that line.
pub type FileLocation<'a> = (usize, &'a str);

/// Result of a parsing step.
pub type ParseResult<T> = Result<T, Parse>;

/// Anything that can go wrong while reading, factorizing and writing an integer list.
#[derive(Debug)]
pub enum Import {
    /// Reading the input or writing the output failed.
    IO(io::Error),
    /// A line could not be turned into a value with a divisor.
    Parse(Parse),
}

impl Display for Import {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Import::IO(error) => write!(f, "IO error: {}", error),
            Import::Parse(error) => write!(f, "Parse error: {}", error),
        }
    }
}

impl Error for Import {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Import::IO(error) => Some(error),
            Import::Parse(error) => Some(error),
        }
    }
}

impl From<io::Error> for Import {
    fn from(error: io::Error) -> Self {
        Import::IO(error)
    }
}

impl From<Parse> for Import {
    fn from(error: Parse) -> Self {
        Import::Parse(error)
    }
}

/// A line of the input is not an integer of at least 2.
#[derive(Debug)]
pub struct Parse {
    description: String,
    file_location: Option<(usize, String)>,
    source: Option<Source>,
}

/// What caused a `Parse` error, if anything.
#[derive(Debug)]
enum Source {
    Parse(Box<Parse>),
    Other(Box<dyn Error + Send + Sync>),
}

impl Parse {
    /// Create a new error without a cause.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), file_location: None, source: None }
    }

    /// Attach the line on which the error occurred.
    pub fn with_file_location(self, (line_number, line): FileLocation) -> Self {
        Self { file_location: Some((line_number, line.to_string())), ..self }
    }

    /// Add context to an existing error.
    pub fn wrap(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            file_location: None,
            source: Some(Source::Parse(Box::new(self))),
        }
    }

    /// Create an error caused by an error from outside of this module.
    pub fn wrap_other(
        source: impl Error + Send + Sync + 'static,
        description: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            file_location: None,
            source: Some(Source::Other(Box::new(source))),
        }
    }

    /// Line number at which this error, or the error it wraps, occurred.
    pub fn line_number(&self) -> Option<usize> {
        match (&self.file_location, &self.source) {
            (Some((line_number, _)), _) => Some(*line_number),
            (None, Some(Source::Parse(inner))) => inner.line_number(),
            (None, _) => None,
        }
    }
}

impl Display for Parse {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)?;
        if let Some((line_number, line)) = &self.file_location {
            write!(f, " (line {}: \"{}\")", line_number, line)?;
        }
        match &self.source {
            Some(Source::Parse(inner)) => write!(f, "\n\tCaused by: {}", inner),
            Some(Source::Other(other)) => write!(f, "\n\tCaused by: {}", other),
            None => Ok(()),
        }
    }
}

impl Error for Parse {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(Source::Parse(inner)) => Some(&**inner),
            Some(Source::Other(other)) => Some(&**other),
            None => None,
        }
    }
}
