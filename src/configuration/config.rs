#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    ReplyDelayMin,
    ReplyDelayMax,
    Seed,
    Username,
}

impl ConfigKey {
    /// Keys whose values must be whole numbers.
    pub fn is_numeric(&self) -> bool {
        return [
            ConfigKey::ReplyDelayMin,
            ConfigKey::ReplyDelayMax,
            ConfigKey::Seed,
        ]
        .contains(self);
    }
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        if key == ConfigKey::Username {
            let mut user = env::var("USER").unwrap_or_else(|_| return "".to_string());
            if user.is_empty() {
                user = "User".to_string();
            }

            return user;
        }

        if key == ConfigKey::ConfigFile {
            #[cfg(not(target_os = "macos"))]
            let config_dir = dirs::config_dir();
            #[cfg(target_os = "macos")]
            let config_dir = env::var("HOME")
                .ok()
                .map(|home| return path::PathBuf::from(home).join(".config"));

            return config_dir
                .unwrap_or_else(|| return path::PathBuf::from("."))
                .join("oceanchat/config.toml")
                .to_string_lossy()
                .to_string();
        }

        let res = match key {
            ConfigKey::ReplyDelayMin => "1000",
            ConfigKey::ReplyDelayMax => "3000",
            ConfigKey::Seed => "",

            // Special
            ConfigKey::ConfigFile => "",
            ConfigKey::Username => "",
        };

        return res.to_string();
    }

    pub async fn load(clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            Config::load_toml(&toml_str)?;
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::validate(key, val)?;
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            config_file = Config::get(ConfigKey::ConfigFile),
            reply_delay_min = Config::get(ConfigKey::ReplyDelayMin),
            reply_delay_max = Config::get(ConfigKey::ReplyDelayMax),
            seed = Config::get(ConfigKey::Seed),
            username = Config::get(ConfigKey::Username),
            "config"
        );

        return Ok(());
    }

    fn load_toml(toml_str: &str) -> Result<()> {
        let doc = toml_str.parse::<toml_edit::Document>()?;

        for key in ConfigKey::iter() {
            if key == ConfigKey::ConfigFile {
                continue;
            }

            if let Some(val) = doc.get(&key.to_string()) {
                if let Some(val_int) = val.as_integer() {
                    Config::validate(key, &val_int.to_string())?;
                    Config::set(key, &val_int.to_string());
                } else if let Some(val_str) = val.as_str() {
                    if val_str.is_empty() {
                        continue;
                    }
                    Config::validate(key, val_str)?;
                    Config::set(key, val_str);
                } else {
                    bail!(format!(
                        "config.toml has an invalid value for key '{key}': {val}"
                    ));
                }
            }
        }

        return Ok(());
    }

    fn validate(key: ConfigKey, val: &str) -> Result<()> {
        if key.is_numeric() && val.parse::<u64>().is_err() {
            bail!(format!(
                "Invalid value for '{key}': {val}\nExpected a positive whole number."
            ));
        }

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                if key == ConfigKey::Username {
                    return Some(
                        "# Your user name displayed in all chat bubbles.\n# username = \"\""
                            .to_string(),
                    );
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let description = arg
                    .get_help()
                    .map(|help| return help.to_string())
                    .unwrap_or_default()
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i32>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
