use thiserror::Error;

/// Errors returned by [`Dbscan`](crate::Dbscan).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No input values were supplied.
    #[error("list of input values is not set")]
    MissingInput,

    /// The list of input values is empty.
    #[error("list of input values is empty")]
    EmptyInput,

    /// Fewer than two input values were supplied.
    #[error("less than two input values cannot be clustered, number of input values: {count}")]
    TooFewInputs { count: usize },

    /// No distance metric was supplied.
    #[error("distance metric has not been specified")]
    MissingMetric,

    /// The neighborhood radius is negative.
    #[error("maximum distance of input values cannot be negative, current value: {eps}")]
    NegativeDistance { eps: f64 },

    /// The minimum cluster size is below two.
    #[error("clusters with less than 2 members don't make sense, current value: {min_points}")]
    TooFewMembers { min_points: usize },

    /// The distance metric failed.
    #[error("distance computation failed: {0}")]
    Metric(#[from] MetricError),
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    InvalidConfiguration,
    MetricError,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingInput | Self::EmptyInput | Self::TooFewInputs { .. } => {
                ErrorKind::InvalidInput
            }
            Self::MissingMetric | Self::NegativeDistance { .. } | Self::TooFewMembers { .. } => {
                ErrorKind::InvalidConfiguration
            }
            Self::Metric(_) => ErrorKind::MetricError,
        }
    }
}

/// Failure reported by a [`DistanceMetric`](crate::DistanceMetric) when two
/// values cannot be compared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MetricError {
    message: String,
}

impl MetricError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type Result<T> = std::result::Result<T, Error>;
