use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Input-validation failures detected before any search work starts.
///
/// Budget exhaustion and partially-placed batches are *not* errors; they are
/// reported through the solve report's statistics and flags instead.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("nothing to place: the instance list is empty")]
    NothingToPlace,

    #[error("no powered cells: the grid has no placeable cells")]
    NoPoweredCells,

    #[error("too many mandatory instances: {actual} given, limit is {limit}")]
    MandatoryLimitExceeded { limit: usize, actual: usize },

    #[error("shape mask is empty: at least one filled cell is required")]
    EmptyShape,

    #[error("shape mask has {actual} cells but {rows}x{cols} was declared")]
    ShapeDimensionMismatch {
        rows: usize,
        cols: usize,
        actual: usize,
    },

    #[error("grid rows have unequal lengths or zero size")]
    MalformedGrid,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolveError>,
        backtrace: Box<Backtrace>,
    },
}

impl Error {
    /// The validation failure this error wraps.
    pub fn kind(&self) -> &SolveError {
        match self {
            Error::Inner { inner, .. } => inner,
        }
    }
}

impl From<SolveError> for Error {
    fn from(inner: SolveError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
