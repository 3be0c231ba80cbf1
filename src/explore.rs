//! the frequency x access-ratio grid sweep

use tracing::debug;

use crate::model::{crossover_ratio, theoretical_flops, MachineConfig};
use crate::result::{Bound, GridPoint, ResultTable};
use crate::utils::{linspace, round_to};

/// default sweep frequencies: 1..4 GHz, built fresh per call.
pub fn default_frequency_list() -> Vec<f64> {
    (1..=4).map(|q| q as f64).collect()
}

/// default sweep ratios: ten evenly spaced points in [0.1, 1.0], built
/// fresh per call.
pub fn default_ratio_list() -> Vec<f64> {
    linspace(0.1, 1.0, 10)
}

/// sweep `frequency_list` x `ratio_list`, frequency-major, and tabulate one
/// [`GridPoint`] per pair.
///
/// every ratio is broadcast uniformly across all threads. classification
/// compares the raw ratio against the raw crossover ratio; the rounded
/// values are only what gets recorded. a tie classifies as memory-bound.
pub fn explore(
    machine: &MachineConfig,
    frequency_list: &[f64],
    ratio_list: &[f64],
) -> ResultTable {
    let mut points = Vec::with_capacity(frequency_list.len() * ratio_list.len());
    for &q_ghz in frequency_list {
        let alpha_thresh = crossover_ratio(machine, q_ghz);
        debug!(q_ghz, alpha_thresh, "frequency block");
        for &alpha in ratio_list {
            let per_thread_ratios = vec![alpha; machine.n_threads];
            let flops = theoretical_flops(machine, &per_thread_ratios, q_ghz);
            let tflops = flops / 1e12;
            let bound = if alpha < alpha_thresh {
                Bound::Compute
            } else {
                Bound::Memory
            };
            points.push(GridPoint {
                q_ghz,
                alpha: round_to(alpha, 3),
                alpha_thresh: round_to(alpha_thresh, 3),
                tflops: round_to(tflops, 6),
                bound,
            });
        }
    }
    ResultTable { points }
}
