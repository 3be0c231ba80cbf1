use std::path::PathBuf;

use config::Config;
use eyre::eyre;
use eyre::Context;
use eyre::Result;
use serde::Deserialize;

use crate::explore::{default_frequency_list, default_ratio_list};
use crate::model::MachineConfig;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub machine: MachineConfig,
    /// sweep frequencies in GHz
    #[serde(default = "default_frequency_list")]
    pub frequency_ghz: Vec<f64>,
    /// sweep access ratios, each in [0,1]
    #[serde(default = "default_ratio_list")]
    pub access_ratios: Vec<f64>,
    pub result_file: PathBuf,
    pub plot_file: PathBuf,
}

impl Settings {
    /// build from layered toml files; later files override earlier ones.
    pub fn new(config_files: &[PathBuf]) -> Result<Self> {
        let mut builder = Config::builder();
        for config in config_files {
            let name = config.to_str().ok_or(eyre!("Invalid path"))?;
            builder = builder.add_source(config::File::with_name(name));
        }
        let settings = builder
            .build()
            .wrap_err("cannot build Setting object")?;
        let ret = settings
            .try_deserialize()
            .wrap_err("failed to deserialize")?;
        Ok(ret)
    }
}
