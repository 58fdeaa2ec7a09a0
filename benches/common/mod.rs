#![allow(dead_code)]

use criterion::PlotConfiguration;
use rand::distributions::{Distribution, Standard};
use rand::prelude::ThreadRng;

/// Number of values each benchmark iteration runs over.
pub const BATCH: usize = 1 << 14;

pub fn fill_random_vec<T>(rng: &mut ThreadRng) -> Vec<T>
where
    Standard: Distribution<T>,
{
    let mut vec = Vec::with_capacity(BATCH);
    for _ in 0..BATCH {
        vec.push(Standard.sample(rng));
    }

    vec
}

pub fn plot_config() -> PlotConfiguration {
    PlotConfiguration::default().summary_scale(criterion::AxisScale::Logarithmic)
}
