use std::fmt;
use std::path::Path;

use eyre::{Context, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// which roof a grid point sits under, per the crossover-ratio rule.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    #[serde(rename = "Compute-bound")]
    Compute,
    #[serde(rename = "Memory-bound")]
    Memory,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Compute => write!(f, "Compute-bound"),
            Bound::Memory => write!(f, "Memory-bound"),
        }
    }
}

/// one evaluated (frequency, ratio) pair.
///
/// `alpha` and `alpha_thresh` are stored rounded to 3 decimals, `tflops` to
/// 6; the classification is made on the unrounded values.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GridPoint {
    #[serde(rename = "Q_GHz")]
    pub q_ghz: f64,
    pub alpha: f64,
    pub alpha_thresh: f64,
    #[serde(rename = "TFLOPS")]
    pub tflops: f64,
    #[serde(rename = "Bound")]
    pub bound: Bound,
}

/// the full sweep, frequency-major then ratio-minor. `(q_ghz, alpha)` is the
/// natural key; nothing is mutated after `explore` builds it.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ResultTable {
    pub points: Vec<GridPoint>,
}

impl ResultTable {
    /// distinct frequencies in sweep order.
    pub fn frequencies(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.q_ghz).dedup().collect()
    }

    /// distinct access ratios in sweep order, taken from the first
    /// frequency block.
    pub fn ratios(&self) -> Vec<f64> {
        match self.points.first() {
            Some(first) => self
                .points
                .iter()
                .take_while(|p| p.q_ghz == first.q_ghz)
                .map(|p| p.alpha)
                .collect(),
            None => vec![],
        }
    }

    /// pivoted view of the table: one row per ratio, one column per
    /// frequency, TFLOPS in the cells.
    pub fn pivot(&self) -> Vec<(f64, Vec<f64>)> {
        let ratios = self.ratios();
        let n_ratios = ratios.len();
        ratios
            .into_iter()
            .enumerate()
            .map(|(row, alpha)| {
                let tflops = self
                    .points
                    .iter()
                    .skip(row)
                    .step_by(n_ratios)
                    .map(|p| p.tflops)
                    .collect();
                (alpha, tflops)
            })
            .collect()
    }

    /// print the pivoted view to the console.
    pub fn print_pivot(&self) {
        println!("\n=== Simulation Results ===");
        print!("{:>8}", "alpha");
        for q in self.frequencies() {
            print!("{:>12}", format!("{} GHz", q));
        }
        println!();
        for (alpha, row) in self.pivot() {
            print!("{:>8.3}", alpha);
            for tflops in row {
                print!("{:>12.6}", tflops);
            }
            println!();
        }
    }

    pub fn save_to_file(&self, filename: &Path) -> Result<()> {
        // create dir first
        if let Some(parent) = filename.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = std::fs::File::create(filename.with_extension("json"))
            .wrap_err("fail to create json file")?;
        serde_json::to_writer_pretty(&mut file, self).wrap_err("fail to write json file")?;
        Ok(())
    }
}
