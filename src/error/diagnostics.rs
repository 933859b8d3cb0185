use crate::error::{ParseError, ScanError};

/// A single lexical or syntactic error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Reported by the scanner.
    Scan(ScanError),
    /// Reported by the parser.
    Parse(ParseError),
}

impl Diagnostic {
    /// Gets the line number the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Scan(e) => e.line(),
            Self::Parse(e) => e.line(),
        }
    }
}

impl From<ScanError> for Diagnostic {
    fn from(e: ScanError) -> Self {
        Self::Scan(e)
    }
}

impl From<ParseError> for Diagnostic {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scan(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

/// Ordered collection of the errors reported during one run.
///
/// A fresh value is created per run, so independent runs never see each
/// other's errors. The value is itself an error: drivers return it once
/// scanning or parsing has reported anything.
///
/// # Example
/// ```
/// use sting::error::{Diagnostics, ScanError};
///
/// let mut diagnostics = Diagnostics::new();
/// assert!(!diagnostics.had_error());
///
/// diagnostics.report(ScanError::UnterminatedString { line: 4 });
/// assert!(diagnostics.had_error());
/// assert_eq!(diagnostics.to_string(), "Error on line 4: Unterminated string.");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Records an error.
    pub fn report(&mut self, error: impl Into<Diagnostic>) {
        self.errors.push(error.into());
    }

    /// Returns `true` once any error has been reported.
    #[must_use]
    pub const fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The number of errors reported so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if nothing has been reported.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The reported errors in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Consumes the collection, returning `Ok(value)` if it is empty and
    /// `Err(self)` otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.had_error() { Err(self) } else { Ok(value) }
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}
