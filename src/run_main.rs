use std::io::{self};

use super::{
    args::{Args, RunMode},
    explore::explore,
    settings::Settings,
    utils::plot::plot_tflops,
};
use crate::init_logger;
use clap::{Command, IntoApp};
use clap_complete::Generator;
use eyre::{Context, Result};
use tracing::{debug, info};

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    clap_complete::generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

pub fn main(args: Args) -> Result<()> {
    init_logger();
    let start_time = std::time::Instant::now();
    if let Some(generator) = args.generator {
        let mut cmd = Args::command();
        eprintln!("Generating completion file for {:?}...", generator);
        print_completions(generator, &mut cmd);
        return Ok(());
    }
    info!("start exploration with {:?}", args);

    let mut config_files = args.config_file;
    if config_files.is_empty() {
        config_files.push("configs/default.toml".into());
    }

    let settings = Settings::new(&config_files).wrap_err("fail to create Setting object")?;
    debug!("{:?}", settings);

    let table = explore(
        &settings.machine,
        &settings.frequency_ghz,
        &settings.access_ratios,
    );
    table.print_pivot();
    table
        .save_to_file(&settings.result_file)
        .wrap_err("fail to save result")?;
    info!("result saved to {:?}", settings.result_file);

    let run_mode = args.run_mode.unwrap_or(RunMode::Plot);
    match run_mode {
        RunMode::Explore => {}
        RunMode::Plot => {
            plot_tflops(&table, &settings.plot_file).wrap_err("fail to render plot")?;
            info!("plot saved to {:?}", settings.plot_file);
        }
    }

    info!(
        "running time: {:?}'s",
        std::time::Instant::now()
            .duration_since(start_time)
            .as_secs_f64()
    );
    Ok(())
}
