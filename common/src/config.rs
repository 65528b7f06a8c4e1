use std::{env, str::FromStr};

use dotenvy;
use thiserror::Error;

use crate::{
    constants::{
        DEFAULT_COLUMNS, DEFAULT_HEIGHT, DEFAULT_ROWS, DEFAULT_WALL_THICKNESS, DEFAULT_WIDTH,
        MAX_RECURSIVE_CELLS,
    },
    maze::Algorithm,
};

pub const ROWS_KEY: &str = "MAZE_ROWS";
pub const COLUMNS_KEY: &str = "MAZE_COLUMNS";
pub const WIDTH_KEY: &str = "MAZE_WIDTH";
pub const HEIGHT_KEY: &str = "MAZE_HEIGHT";
pub const WALL_THICKNESS_KEY: &str = "MAZE_WALL_THICKNESS";
pub const SEED_KEY: &str = "MAZE_SEED";
pub const ALGORITHM_KEY: &str = "MAZE_ALGORITHM";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an unreadable value: {value:?}")]
    Parse { key: &'static str, value: String },
    #[error("{key} is out of range: {value}")]
    OutOfRange { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub rows: usize,
    pub columns: usize,
    pub width: f32,
    pub height: f32,
    pub wall_thickness: f32,
    pub seed: Option<u64>,
    pub algorithm: Algorithm,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            wall_thickness: DEFAULT_WALL_THICKNESS,
            seed: None,
            algorithm: Algorithm::default(),
        }
    }
}

impl Config {
    /// Reads the process environment, after merging in a `.env` file from the
    /// working directory if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source. Missing keys keep their
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            rows: parse_or(&lookup, ROWS_KEY, defaults.rows)?,
            columns: parse_or(&lookup, COLUMNS_KEY, defaults.columns)?,
            width: parse_or(&lookup, WIDTH_KEY, defaults.width)?,
            height: parse_or(&lookup, HEIGHT_KEY, defaults.height)?,
            wall_thickness: parse_or(&lookup, WALL_THICKNESS_KEY, defaults.wall_thickness)?,
            seed: match lookup(SEED_KEY).filter(|value| !value.trim().is_empty()) {
                Some(value) => Some(parse(SEED_KEY, &value)?),
                None => None,
            },
            algorithm: parse_or(&lookup, ALGORITHM_KEY, defaults.algorithm)?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(out_of_range(ROWS_KEY, self.rows));
        }
        if self.columns == 0 {
            return Err(out_of_range(COLUMNS_KEY, self.columns));
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(out_of_range(WIDTH_KEY, self.width));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(out_of_range(HEIGHT_KEY, self.height));
        }
        if !(self.wall_thickness.is_finite() && self.wall_thickness >= 0.0) {
            return Err(out_of_range(WALL_THICKNESS_KEY, self.wall_thickness));
        }
        if self.algorithm == Algorithm::RecursiveBacktrack
            && self.rows.saturating_mul(self.columns) > MAX_RECURSIVE_CELLS
        {
            return Err(ConfigError::OutOfRange {
                key: ALGORITHM_KEY,
                value: format!(
                    "{} on {}x{} (at most {} cells)",
                    self.algorithm, self.rows, self.columns, MAX_RECURSIVE_CELLS
                ),
            });
        }

        Ok(())
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Parse {
        key,
        value: value.to_string(),
    })
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => parse(key, &value),
        _ => Ok(default),
    }
}

fn out_of_range(key: &'static str, value: impl ToString) -> ConfigError {
    ConfigError::OutOfRange {
        key,
        value: value.to_string(),
    }
}
