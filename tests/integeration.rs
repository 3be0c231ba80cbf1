use eyre::Result;
use roofline_sim::explore::explore;
use roofline_sim::result::Bound;
use roofline_sim::settings::Settings;
use std::path::{Path, PathBuf};
use tracing::debug;

#[test]
fn test() -> Result<()> {
    roofline_sim::init_logger();
    let config_files: Vec<PathBuf> = vec!["configs/default.toml".into()];
    let settings = Settings::new(&config_files)?;
    debug!("{:?}", settings);

    let table = explore(
        &settings.machine,
        &settings.frequency_ghz,
        &settings.access_ratios,
    );
    assert_eq!(
        table.points.len(),
        settings.frequency_ghz.len() * settings.access_ratios.len()
    );

    // Q=2 GHz, alpha=0.1: compute-bound at 8e9 FLOP/s
    let p = table
        .points
        .iter()
        .find(|p| p.q_ghz == 2.0 && p.alpha == 0.1)
        .unwrap();
    assert_eq!(p.alpha_thresh, 0.781);
    assert_eq!(p.tflops, 0.008);
    assert_eq!(p.bound, Bound::Compute);

    // Q=2 GHz, alpha=0.9: past the crossover, memory-bound
    let p = table
        .points
        .iter()
        .find(|p| p.q_ghz == 2.0 && p.alpha == 0.9)
        .unwrap();
    assert_eq!(p.tflops, 0.006944);
    assert_eq!(p.bound, Bound::Memory);

    table.save_to_file(Path::new("results/result_test.json"))?;
    Ok(())
}
