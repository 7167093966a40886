use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{WrapErr, eyre};
use cubelab_core::scramble::DEFAULT_SCRAMBLE_LENGTH;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// User configuration, read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of moves in generated scrambles
    pub scramble_length: usize,
    /// Draw stickers with ANSI colors instead of letters
    pub color: bool,
    /// What a colored sticker is drawn with
    pub sticker: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            color: true,
            sticker: "  ".to_owned(),
        }
    }
}

impl Config {
    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cubelab").join("config.toml"))
    }

    /// Load `path` if given, otherwise the file in the user's config
    /// directory. Only an explicitly requested file has to exist.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<Config> {
        let (path, required) = match path {
            Some(path) => (path.to_owned(), true),
            None => match Config::default_path() {
                Some(path) => (path, false),
                None => {
                    debug!("No config directory on this platform, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        if !required && !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let text = fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
        let config = Config::parse(&text)
            .wrap_err_with(|| format!("Failed to parse config file {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> color_eyre::Result<Config> {
        let config = toml::from_str::<Config>(text)?;
        if config.sticker.is_empty() {
            return Err(eyre!("`sticker` must not be empty"));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());

        let config = Config::parse("scramble_length = 25\ncolor = false").unwrap();
        assert_eq!(config.scramble_length, 25);
        assert!(!config.color);
        assert_eq!(config.sticker, Config::default().sticker);
    }

    #[test]
    fn rejects_bad_files() {
        assert!(Config::parse("scramble_length = \"long\"").is_err());
        assert!(Config::parse("colour = true").is_err());
        assert!(Config::parse("sticker = \"\"").is_err());
    }

    #[test]
    fn explicit_path_must_exist() {
        assert!(Config::load(Some(Path::new("/definitely/not/here/config.toml"))).is_err());
    }
}
