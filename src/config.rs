//! Runtime settings. Everything about the rules and the board is fixed in [`crate::constants`]; this only covers
//! where the game finds its files.

use std::{env, ffi::OsString, path::PathBuf};

use crate::constants::assets::{DEFAULT_DIR, DIR_ENV};

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    /// Directory holding the PNG textures.
    pub assets: PathBuf,
}

impl Config {
    /// Read the settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_var(env::var_os(DIR_ENV))
    }

    fn from_var(assets: Option<OsString>) -> Self {
        let assets = match assets {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(DEFAULT_DIR),
        };
        Self { assets }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_var(None)
    }
}
