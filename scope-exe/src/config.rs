//! User configuration options.

use crate::{BASE_DIR, CLIOptions};
use automap::AutomapConfig;
use dirs::config_dir;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::{self, create_dir_all};
use std::path::PathBuf;

const LOG_TAG: &str = "UserConfig";

fn get_cfg_file() -> Result<PathBuf, Box<dyn Error>> {
    let mut dir = config_dir().ok_or("Couldn't find the user config dir")?;
    dir.push(BASE_DIR);
    if !dir.exists() {
        create_dir_all(&dir)?;
    }
    dir.push("user.toml");
    Ok(dir)
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// The last WAD opened
    pub wad: String,
    pub automap: AutomapConfig,
}

impl UserConfig {
    /// Read the config file, creating it with defaults if it is missing or
    /// can't be understood
    pub fn load() -> Result<Self, Box<dyn Error>> {
        let path = get_cfg_file()?;
        match fs::read_to_string(&path) {
            Ok(buf) if !buf.is_empty() => match toml::from_str(&buf) {
                Ok(data) => {
                    info!(target: LOG_TAG, "Loaded user config file");
                    return Ok(data);
                }
                Err(e) => warn!(target: LOG_TAG, "Could not deserialise {:?}: {}", path, e),
            },
            Ok(_) => {}
            Err(e) => info!(target: LOG_TAG, "No config at {:?}: {}", path, e),
        }
        let config = UserConfig::default();
        config.write()?;
        info!(target: LOG_TAG, "Created default user config file");
        Ok(config)
    }

    pub fn write(&self) -> Result<(), Box<dyn Error>> {
        let path = get_cfg_file()?;
        let data = toml::to_string_pretty(self)?;
        fs::write(&path, data)?;
        info!(target: LOG_TAG, "Saved user config to {:?}", path);
        Ok(())
    }

    /// Sync the CLI options and UserConfig with each other. Anything given on
    /// the command line replaces the stored value, anything not given is
    /// filled in from the stored value.
    pub fn sync_cli(&mut self, cli: &mut CLIOptions) {
        info!(target: LOG_TAG, "Checking CLI options");

        if !cli.wad.is_empty() && cli.wad != self.wad {
            cli.wad.clone_into(&mut self.wad);
            info!(target: LOG_TAG, "WAD changed to: {}", &cli.wad);
        } else {
            self.wad.clone_into(&mut cli.wad);
        }

        if let Some(p) = cli.max_pixels {
            self.automap.max_pixels = p;
        } else {
            cli.max_pixels = Some(self.automap.max_pixels);
        }

        if let Some(b) = cli.border {
            self.automap.border = b;
        } else {
            cli.border = Some(self.automap.border);
        }

        if let Some(t) = cli.things {
            self.automap.include_things = t;
        } else {
            cli.things = Some(self.automap.include_things);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UserConfig;
    use crate::CLIOptions;
    use automap::{AutomapConfig, Rgb};

    fn cli() -> CLIOptions {
        CLIOptions {
            verbose: None,
            wad: String::new(),
            map: None,
            list: false,
            max_pixels: None,
            border: None,
            things: None,
            output: None,
        }
    }

    #[test]
    fn cli_fills_from_config() {
        let mut config = UserConfig {
            wad: "doom.wad".to_owned(),
            automap: AutomapConfig {
                max_pixels: 640,
                border: 3,
                include_things: true,
                ..AutomapConfig::default()
            },
        };
        let mut opts = cli();
        config.sync_cli(&mut opts);
        assert_eq!(opts.wad, "doom.wad");
        assert_eq!(opts.max_pixels, Some(640));
        assert_eq!(opts.border, Some(3));
        assert_eq!(opts.things, Some(true));
    }

    #[test]
    fn cli_overrides_config() {
        let mut config = UserConfig::default();
        let mut opts = CLIOptions {
            wad: "plutonia.wad".to_owned(),
            max_pixels: Some(2048),
            things: Some(true),
            ..cli()
        };
        config.sync_cli(&mut opts);
        assert_eq!(config.wad, "plutonia.wad");
        assert_eq!(config.automap.max_pixels, 2048);
        assert!(config.automap.include_things);
        // Not given, so left at the default
        assert_eq!(config.automap.border, AutomapConfig::default().border);
    }

    #[test]
    fn toml_round_trip() {
        let mut config = UserConfig::default();
        config.automap.palette.wall = Rgb::new(1, 2, 3);
        let text = toml::to_string_pretty(&config).unwrap();
        let back: UserConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let back: UserConfig = toml::from_str("wad = \"tnt.wad\"\n[automap]\nborder = 2\n").unwrap();
        assert_eq!(back.wad, "tnt.wad");
        assert_eq!(back.automap.border, 2);
        assert_eq!(back.automap.max_pixels, AutomapConfig::default().max_pixels);
    }
}
