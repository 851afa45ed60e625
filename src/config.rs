use std::fs;
use serde::Deserialize;
use thiserror::Error;
use crate::utils::Rgb;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub fps: u32,
    pub background_color: Rgb,
    pub circle_color: Rgb,
    pub triangle_color: Rgb,
    pub points_count: usize,
    pub radius: f32,
    pub animation_speed: f32,
}

impl Config {
    pub fn load(path: &str) -> Result<Config, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }
}
