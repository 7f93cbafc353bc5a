//! Density-based clustering of arbitrary values.
//!
//! [`Dbscan`] groups values into clusters of points that are reachable from
//! one another through chains of dense neighborhoods. The notion of distance
//! is supplied by the caller through [`DistanceMetric`], so the values can be
//! numbers, coordinates, feature vectors, or any type comparable for equality.

mod config;
mod dbscan;
mod error;
mod metric;

pub use config::Config;
pub use dbscan::Dbscan;
pub use error::{Error, ErrorKind, MetricError, Result};
pub use metric::{AbsoluteDifference, DistanceMetric, Euclidean};

pub trait Fit<I, O>
where
    I: ?Sized,
{
    fn fit(&mut self, input: &I) -> O;
}
