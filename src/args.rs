use std::path::PathBuf;

use clap::{Parser, ValueHint};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[clap(version,about="a roofline-style bandwidth vs. frequency explorer",long_about=None,trailing_var_arg=true)]
pub struct Args {
    /// Generate completion for the given shell
    #[clap(long = "generate", short = 'g', arg_enum)]
    pub generator: Option<Shell>,
    /// explore only prints and saves the table; plot also renders the chart
    #[clap(long = "run-mode", short = 'r', arg_enum)]
    pub run_mode: Option<RunMode>,
    /// the path of config file, default is "configs/default.toml"
    #[clap(parse(from_os_str),value_hint=ValueHint::FilePath)]
    pub config_file: Vec<PathBuf>,
}
#[derive(Debug, Clone, clap::ArgEnum)]
pub enum RunMode {
    Explore,
    Plot,
}
