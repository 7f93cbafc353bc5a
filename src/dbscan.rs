use tracing::{debug, trace};

use super::Fit;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::metric::DistanceMetric;

/// DBSCAN (density-based spatial clustering of applications with noise)
/// clustering algorithm over arbitrary values.
///
/// Values need only be comparable for equality; how far apart two values are
/// is decided by the metric `M`. Neighborhoods are found by scanning the whole
/// input, so a run costs up to O(n²) distance evaluations.
///
/// A value claimed by one cluster may show up again in a later cluster when it
/// lies in the neighborhood of that cluster's seed or of one of its core
/// points. The result is therefore not necessarily a partition of the input.
/// Values that never fall into a dense neighborhood are left out.
///
/// # Examples
///
/// ```
/// use density_clustering::{AbsoluteDifference, Dbscan};
///
/// let points = [1, 2, 3, 10, 11, 12, 30];
/// let mut dbscan = Dbscan::new(Some(&points[..]), 2, 1., Some(AbsoluteDifference)).unwrap();
/// let clusters = dbscan.perform_clustering().unwrap();
/// assert_eq!(clusters, vec![vec![1, 2, 3], vec![10, 11, 12]]);
/// ```
#[derive(Clone, Debug)]
pub struct Dbscan<V, M> {
    config: Config,
    metric: M,
    input: Option<Vec<V>>,
    /// For each input position, the first position holding an equal value.
    canonical: Vec<usize>,
    /// Indexed by canonical position.
    visited: Vec<bool>,
}

impl<V, M> Dbscan<V, M>
where
    V: Clone + PartialEq,
    M: DistanceMetric<V>,
{
    /// Creates an engine over a copy of `input`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingInput`] if `input` is `None`, then with
    /// [`Error::MissingMetric`] if `metric` is `None`. `min_points` and `eps`
    /// are checked only when clustering starts.
    pub fn new(
        input: Option<&[V]>,
        min_points: usize,
        eps: f64,
        metric: Option<M>,
    ) -> Result<Self> {
        let input = input.ok_or(Error::MissingInput)?;
        let metric = metric.ok_or(Error::MissingMetric)?;
        let mut dbscan = Self::with_config(Config::new(eps, min_points), metric);
        dbscan.assign(input);
        Ok(dbscan)
    }

    /// Creates an engine without input values; they must be set with
    /// [`Dbscan::set_input_values`] before clustering.
    pub fn with_config(config: Config, metric: M) -> Self {
        Self {
            config,
            metric,
            input: None,
            canonical: Vec::new(),
            visited: Vec::new(),
        }
    }

    /// Replaces the input values with a copy of `values`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingInput`] if `values` is `None`, leaving the
    /// previous input in place.
    pub fn set_input_values(&mut self, values: Option<&[V]>) -> Result<()> {
        let values = values.ok_or(Error::MissingInput)?;
        self.assign(values);
        Ok(())
    }

    pub fn set_min_points(&mut self, min_points: usize) {
        self.config.min_points = min_points;
    }

    pub fn set_max_distance(&mut self, eps: f64) {
        self.config.eps = eps;
    }

    /// Replaces the distance metric.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingMetric`] if `metric` is `None`, leaving the
    /// previous metric in place.
    pub fn set_metric(&mut self, metric: Option<M>) -> Result<()> {
        self.metric = metric.ok_or(Error::MissingMetric)?;
        Ok(())
    }

    #[must_use]
    pub fn input_values(&self) -> Option<&[V]> {
        self.input.as_deref()
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Groups the input values into clusters, in the order the clusters were
    /// completed. Each cluster lists its members in discovery order.
    ///
    /// # Errors
    ///
    /// The input is checked first ([`Error::MissingInput`],
    /// [`Error::EmptyInput`], [`Error::TooFewInputs`]), then the configuration
    /// ([`Error::NegativeDistance`], [`Error::TooFewMembers`]). A failure of
    /// the metric aborts the run with [`Error::Metric`].
    pub fn perform_clustering(&mut self) -> Result<Vec<Vec<V>>> {
        let input = self.input.as_deref().ok_or(Error::MissingInput)?;
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }
        if input.len() < 2 {
            return Err(Error::TooFewInputs { count: input.len() });
        }
        self.config.validate()?;

        debug!(
            n_values = input.len(),
            eps = self.config.eps,
            min_points = self.config.min_points,
            "clustering started"
        );

        let mut run = Run {
            input,
            canonical: &self.canonical,
            config: &self.config,
            metric: &self.metric,
            visited: &mut self.visited,
            in_cluster: vec![false; input.len()],
            evaluations: 0,
        };
        let clusters = run.clusters()?;
        debug!(
            n_clusters = clusters.len(),
            evaluations = run.evaluations,
            "clustering finished"
        );

        Ok(clusters
            .into_iter()
            .map(|cluster| cluster.into_iter().map(|i| input[i].clone()).collect())
            .collect())
    }

    fn assign(&mut self, values: &[V]) {
        self.canonical = canonical_positions(values);
        self.input = Some(values.to_vec());
    }
}

impl<V, M> Fit<[V], Result<Vec<Vec<V>>>> for Dbscan<V, M>
where
    V: Clone + PartialEq,
    M: DistanceMetric<V>,
{
    fn fit(&mut self, input: &[V]) -> Result<Vec<Vec<V>>> {
        self.assign(input);
        self.perform_clustering()
    }
}

/// State of one clustering run. Clusters are built as lists of input
/// positions.
struct Run<'a, V, M> {
    input: &'a [V],
    canonical: &'a [usize],
    config: &'a Config,
    metric: &'a M,
    visited: &'a mut Vec<bool>,
    /// Membership of the working list, indexed by canonical position.
    in_cluster: Vec<bool>,
    evaluations: usize,
}

impl<'a, V, M> Run<'a, V, M>
where
    M: DistanceMetric<V>,
{
    fn clusters(&mut self) -> Result<Vec<Vec<usize>>> {
        self.visited.clear();
        self.visited.resize(self.input.len(), false);

        let mut clusters = vec![];
        for idx in 0..self.input.len() {
            let id = self.canonical[idx];
            if self.visited[id] {
                continue;
            }
            self.visited[id] = true;

            let neighbors = self.neighbors(idx)?;
            if neighbors.len() < self.config.min_points {
                continue;
            }
            let cluster = self.expand_cluster(neighbors)?;
            trace!(seed = idx, size = cluster.len(), "cluster completed");
            clusters.push(cluster);
        }
        Ok(clusters)
    }

    /// Grows `cluster` by walking it front to back while appending the
    /// neighborhoods of the core points it reaches.
    fn expand_cluster(&mut self, mut cluster: Vec<usize>) -> Result<Vec<usize>> {
        for &member in &cluster {
            self.in_cluster[self.canonical[member]] = true;
        }

        let mut cursor = 0;
        while cursor < cluster.len() {
            let member = cluster[cursor];
            cursor += 1;

            let id = self.canonical[member];
            if self.visited[id] {
                continue;
            }
            self.visited[id] = true;

            let neighbors = self.neighbors(member)?;
            if neighbors.len() < self.config.min_points {
                continue;
            }
            for n in neighbors {
                let nid = self.canonical[n];
                if !self.in_cluster[nid] {
                    self.in_cluster[nid] = true;
                    cluster.push(n);
                }
            }
        }

        for &member in &cluster {
            self.in_cluster[self.canonical[member]] = false;
        }
        Ok(cluster)
    }

    /// Positions of all values within `eps` of the value at `idx`, including
    /// `idx` itself when the metric puts a value at distance zero from itself.
    fn neighbors(&mut self, idx: usize) -> Result<Vec<usize>> {
        let input = self.input;
        let point = &input[idx];
        let mut neighbors = vec![];
        for (i, candidate) in input.iter().enumerate() {
            self.evaluations += 1;
            if self.metric.distance(point, candidate)? <= self.config.eps {
                neighbors.push(i);
            }
        }
        Ok(neighbors)
    }
}

/// Maps every position to the first position holding an equal value.
fn canonical_positions<V: PartialEq>(values: &[V]) -> Vec<usize> {
    let mut canonical: Vec<usize> = Vec::with_capacity(values.len());
    for (i, v) in values.iter().enumerate() {
        let first = (0..i)
            .find(|&j| canonical[j] == j && values[j] == *v)
            .unwrap_or(i);
        canonical.push(first);
    }
    canonical
}
