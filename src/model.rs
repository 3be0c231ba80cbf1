//! the roofline performance model

use serde::{Deserialize, Serialize};

fn default_flops_per_cycle() -> u32 {
    1
}

/// static description of the machine under analysis.
///
/// all threads share one bandwidth pool of `m_links` channels at
/// `bandwidth_per_link` GB/s each; compute capacity scales linearly with
/// frequency and thread count.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MachineConfig {
    pub n_threads: usize,
    pub m_links: usize,
    /// bandwidth per memory channel in GB/s
    pub bandwidth_per_link: f64,
    /// bytes transferred per floating-point operation
    pub bytes_per_flop: f64,
    /// FLOPS retired per thread per clock cycle
    #[serde(default = "default_flops_per_cycle")]
    pub flops_per_cycle: u32,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            n_threads: 4,
            m_links: 4,
            bandwidth_per_link: 25.0,
            bytes_per_flop: 16.0,
            flops_per_cycle: 1,
        }
    }
}

impl MachineConfig {
    /// aggregate bandwidth of all channels, in bytes per second.
    pub fn total_bandwidth(&self) -> f64 {
        self.m_links as f64 * self.bandwidth_per_link * 1e9
    }
}

/// achievable FLOP/s at frequency `q_ghz`, limited by either memory
/// bandwidth or compute.
///
/// `per_thread_ratios` holds one memory access ratio per thread, each the
/// fraction of that thread's operations that hit memory. inputs are trusted:
/// a zero ratio sum or zero frequency yields an IEEE infinity rather than an
/// error.
pub fn theoretical_flops(machine: &MachineConfig, per_thread_ratios: &[f64], q_ghz: f64) -> f64 {
    let alpha_sum: f64 = per_thread_ratios.iter().sum();
    let mem_bound =
        machine.total_bandwidth() * machine.n_threads as f64 / (machine.bytes_per_flop * alpha_sum);
    let comp_bound = q_ghz * 1e9 * machine.flops_per_cycle as f64 * machine.n_threads as f64;
    mem_bound.min(comp_bound)
}

/// the uniform access ratio at which the memory bound and the compute bound
/// are equal for frequency `q_ghz`. below it the workload is compute-bound,
/// at or above it memory-bound.
pub fn crossover_ratio(machine: &MachineConfig, q_ghz: f64) -> f64 {
    (machine.m_links as f64 * machine.bandwidth_per_link)
        / (machine.bytes_per_flop * q_ghz * machine.n_threads as f64)
}

#[cfg(test)]
mod test {
    use super::*;

    fn quad_core() -> MachineConfig {
        MachineConfig::default()
    }

    #[test]
    fn min_of_two_bounds() {
        let machine = quad_core();
        for q in [1.0, 2.0, 3.0, 4.0] {
            for alpha in [0.1, 0.5, 0.9, 1.0] {
                let ratios = vec![alpha; machine.n_threads];
                let mem_bound = machine.total_bandwidth() * machine.n_threads as f64
                    / (machine.bytes_per_flop * alpha * machine.n_threads as f64);
                let comp_bound =
                    q * 1e9 * machine.flops_per_cycle as f64 * machine.n_threads as f64;
                let flops = theoretical_flops(&machine, &ratios, q);
                assert_eq!(flops, mem_bound.min(comp_bound));
            }
        }
    }

    #[test]
    fn compute_bound_scenario() {
        // Q=2 GHz, alpha=0.1: mem bound 2.5e12 dwarfs the 8e9 compute bound
        let machine = quad_core();
        let flops = theoretical_flops(&machine, &[0.1; 4], 2.0);
        assert!((flops - 8e9).abs() < 1.0);
    }

    #[test]
    fn memory_bound_scenario() {
        // Q=2 GHz, alpha=0.9: mem bound 4e11/57.6 is below the compute bound
        let machine = quad_core();
        let flops = theoretical_flops(&machine, &[0.9; 4], 2.0);
        let expected = 4e11 / 57.6;
        assert!((flops - expected).abs() / expected < 1e-12);
        assert!(flops < 8e9);
    }

    #[test]
    fn raising_one_ratio_never_raises_throughput() {
        let machine = quad_core();
        let mut ratios = vec![0.3; machine.n_threads];
        let mut last = theoretical_flops(&machine, &ratios, 3.0);
        for bump in [0.4, 0.6, 0.8, 1.0] {
            ratios[0] = bump;
            let next = theoretical_flops(&machine, &ratios, 3.0);
            assert!(next <= last);
            last = next;
        }
    }

    #[test]
    fn bounds_meet_at_crossover() {
        let machine = quad_core();
        for q in [1.0, 2.0, 3.0, 4.0] {
            let alpha = crossover_ratio(&machine, q);
            let ratios = vec![alpha; machine.n_threads];
            let mem_bound = machine.total_bandwidth() * machine.n_threads as f64
                / (machine.bytes_per_flop * alpha * machine.n_threads as f64);
            let comp_bound = q * 1e9 * machine.flops_per_cycle as f64 * machine.n_threads as f64;
            assert!((mem_bound - comp_bound).abs() / comp_bound < 1e-12);
        }
    }

    #[test]
    fn zero_ratio_sum_is_not_an_error() {
        // pure-compute workload: the memory bound degenerates to infinity and
        // the compute bound wins
        let machine = quad_core();
        let flops = theoretical_flops(&machine, &[0.0; 4], 2.0);
        assert_eq!(flops, 8e9);
    }
}
