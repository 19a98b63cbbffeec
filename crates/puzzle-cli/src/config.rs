//! Optional `$XDG_CONFIG_HOME/gridpuzzles/config.toml` defaults for
//! `--size`/`--difficulty`, grounded on the `dirs` + `toml` config-loading
//! idiom in `core-config/src/lib.rs` of the `oxidized` example repo. A
//! missing file falls back to built-in defaults; a malformed one is a
//! parameter error, not a silent fallback (unlike `oxidized`, which treats
//! parse failure as "use defaults" -- here the command line is the last
//! word and the config file should fail loudly rather than hide a typo).

use crate::error::CliError;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct VariantDefaults {
    pub size: Option<String>,
    pub difficulty: Option<char>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub walls: VariantDefaults,
    #[serde(default)]
    pub alcazar: VariantDefaults,
    #[serde(default)]
    pub stellar: VariantDefaults,
}

pub fn discover() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gridpuzzles").join("config.toml"))
}

pub fn load() -> Result<Config, CliError> {
    let Some(path) = discover() else {
        return Ok(Config::default());
    };
    let Ok(content) = std::fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    toml::from_str(&content).map_err(|source| CliError::Config { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.walls.size.is_none());
        assert!(cfg.stellar.difficulty.is_none());
    }

    #[test]
    fn parses_per_variant_defaults() {
        let cfg: Config = toml::from_str(
            "[walls]\nsize = \"7x7\"\ndifficulty = 'h'\n[stellar]\nsize = \"5\"\n",
        )
        .unwrap();
        assert_eq!(cfg.walls.size.as_deref(), Some("7x7"));
        assert_eq!(cfg.walls.difficulty, Some('h'));
        assert_eq!(cfg.stellar.size.as_deref(), Some("5"));
        assert!(cfg.alcazar.size.is_none());
    }
}
