/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::ConfigError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone)]
pub struct Config {
    pub simulation: SimulationConfig,
}

#[derive(Deserialize, Clone)]
pub struct SimulationConfig {
    pub n_elevators: usize,
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            simulation: SimulationConfig {
                n_elevators: 2,
                rng_seed: None,
            },
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(ConfigError::Read)?;
    toml::from_str(&config_str).map_err(ConfigError::Parse)
}

/// Loads the configuration file at `path`, falling back to the built-in
/// defaults when the file does not exist.
pub fn load_or_default(path: &str) -> Result<Config, ConfigError> {
    if Path::new(path).exists() {
        load_config(path)
    } else {
        Ok(Config::default())
    }
}
