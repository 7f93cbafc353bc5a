
use crate::dbscan::{fixed_clusters as dbscan_fixed_clusters, integers as dbscan_integers};
use criterion::{criterion_group, criterion_main, Criterion};

criterion_group! {
name = benches;
config = Criterion::default()
    .sample_size(20)
    .measurement_time(std::time::Duration::new(30, 0));
targets = dbscan_integers, dbscan_fixed_clusters}

criterion_main!(benches);
