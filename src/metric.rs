use ndarray::{ArrayBase, Data, Ix1};
use num_traits::{Float, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::MetricError;

/// Dissimilarity between two values of type `V`.
///
/// The result must be non-negative. The engine trusts the implementation: it
/// does not check symmetry or the triangle inequality, but assumes the same
/// two values always yield the same distance within one run.
///
/// Any closure `Fn(&V, &V) -> Result<f64, MetricError>` is a metric.
pub trait DistanceMetric<V: ?Sized> {
    fn distance(&self, a: &V, b: &V) -> Result<f64, MetricError>;
}

impl<V, F> DistanceMetric<V> for F
where
    V: ?Sized,
    F: Fn(&V, &V) -> Result<f64, MetricError>,
{
    fn distance(&self, a: &V, b: &V) -> Result<f64, MetricError> {
        self(a, b)
    }
}

/// Absolute difference between two numbers, `|a - b|`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AbsoluteDifference;

impl<T: ToPrimitive> DistanceMetric<T> for AbsoluteDifference {
    fn distance(&self, a: &T, b: &T) -> Result<f64, MetricError> {
        let a = a
            .to_f64()
            .ok_or_else(|| MetricError::new("value is not representable as f64"))?;
        let b = b
            .to_f64()
            .ok_or_else(|| MetricError::new("value is not representable as f64"))?;
        Ok((a - b).abs())
    }
}

/// Euclidean distance between two vectors of the same length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Euclidean;

impl<A, S> DistanceMetric<ArrayBase<S, Ix1>> for Euclidean
where
    A: Float,
    S: Data<Elem = A>,
{
    fn distance(&self, a: &ArrayBase<S, Ix1>, b: &ArrayBase<S, Ix1>) -> Result<f64, MetricError> {
        if a.len() != b.len() {
            return Err(MetricError::new(format!(
                "dimension mismatch: {} and {}",
                a.len(),
                b.len()
            )));
        }
        let sum = a.iter().zip(b.iter()).fold(A::zero(), |acc, (&x, &y)| {
            let d = x - y;
            acc + d * d
        });
        sum.sqrt()
            .to_f64()
            .ok_or_else(|| MetricError::new("distance is not representable as f64"))
    }
}
