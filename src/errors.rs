use std::error::Error as StdError;
use std::fmt;

/// The kind of an error (non-exhaustive)
#[non_exhaustive]
#[derive(Debug)]
pub enum ErrorKind {
    /// Generic error
    Msg(String),
    /// A tag with nothing but whitespace between the delimiters
    EmptyTag,
    /// The input ended while looking for the closing delimiter of a tag
    UnmatchedOpenTag,
    /// The input ended before a section was closed
    UnclosedSection {
        /// Name of the section
        name: String,
        /// Line of the opening tag
        line: usize,
    },
    /// A closing tag that doesn't match the innermost open section
    InterleavedClosingTag(String),
    /// A closing tag found outside of any section
    UnmatchedCloseTag(String),
    /// A `{{=<open> <close>=}}` tag that doesn't contain two distinct delimiters
    InvalidDelimiters(String),
    /// A `{` tag without its closing `}`, rejected rather than dropped from the output
    UnterminatedRawTag(String),
    /// None of the candidate paths for a partial exists
    PartialNotFound(String),
    /// A partial that ends up including itself
    RecursivePartial(String),
}

/// The Error type
#[derive(Debug)]
pub struct Error {
    /// Kind of error
    pub kind: ErrorKind,
    /// Line of the template the error was found on, `0` when not tied to a line
    pub line: usize,
    source: Option<Box<dyn StdError + Sync + Send>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "line {}: ", self.line)?;
        }
        match self.kind {
            ErrorKind::Msg(ref message) => write!(f, "{}", message),
            ErrorKind::EmptyTag => write!(f, "empty tag"),
            ErrorKind::UnmatchedOpenTag => write!(f, "unmatched open tag"),
            ErrorKind::UnclosedSection { ref name, line } => {
                write!(f, "section {} opened on line {} has no closing tag", name, line)
            }
            ErrorKind::InterleavedClosingTag(ref name) => {
                write!(f, "interleaved closing tag: {}", name)
            }
            ErrorKind::UnmatchedCloseTag(ref name) => write!(f, "unmatched close tag: {}", name),
            ErrorKind::InvalidDelimiters(ref tag) => {
                write!(f, "invalid delimiter change tag: `{}`", tag)
            }
            ErrorKind::UnterminatedRawTag(ref tag) => write!(f, "unterminated raw tag: `{}`", tag),
            ErrorKind::PartialNotFound(ref name) => write!(f, "could not find partial {}", name),
            ErrorKind::RecursivePartial(ref name) => write!(f, "recursive partial {}", name),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|c| &**c as &(dyn StdError + 'static))
    }
}

impl Error {
    /// Creates generic error
    pub fn msg(value: impl ToString) -> Self {
        Self { kind: ErrorKind::Msg(value.to_string()), line: 0, source: None }
    }

    /// Creates a parse error of the given kind found on `line`
    pub(crate) fn parse(kind: ErrorKind, line: usize) -> Self {
        Self { kind, line, source: None }
    }

    /// Creates generic error with a source
    pub fn chain(value: impl ToString, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self { kind: ErrorKind::Msg(value.to_string()), line: 0, source: Some(source.into()) }
    }

    /// Sets the line of an error that was created without one
    pub(crate) fn at_line(mut self, line: usize) -> Self {
        if self.line == 0 {
            self.line = line;
        }
        self
    }
}

impl From<&str> for Error {
    fn from(e: &str) -> Self {
        Self::msg(e)
    }
}

impl From<String> for Error {
    fn from(e: String) -> Self {
        Self::msg(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::chain("Failed to convert data to a template value", e)
    }
}

/// Convenient wrapper around std::Result.
pub type Result<T> = ::std::result::Result<T, Error>;
