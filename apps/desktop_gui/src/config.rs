use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

use crate::ui::theme::ThemePreset;

pub const DEFAULT_CONFIG_FILE: &str = "bloom_pizza.toml";
const ENV_PREFIX: &str = "BLOOM_PIZZA__";

#[derive(Parser, Debug, Default)]
#[command(name = "bloom_pizza", about = "Bloom Pizza ordering window")]
pub struct CliArgs {
    /// TOML config file; `bloom_pizza.toml` in the working directory is used when present.
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub window_title: Option<String>,
    /// Picture shown on the home view instead of the painted pizza.
    #[arg(long)]
    pub home_image: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub theme: Option<ThemePreset>,
    /// tracing filter directive, overridden by RUST_LOG.
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    window_title: Option<String>,
    home_image: Option<PathBuf>,
    theme: Option<ThemePreset>,
    log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub window_title: String,
    pub home_image: Option<PathBuf>,
    pub theme: ThemePreset,
    pub log_filter: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            window_title: "Bloom Pizza".to_string(),
            home_image: None,
            theme: ThemePreset::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl StartupConfig {
    pub fn load(cli: &CliArgs) -> anyhow::Result<Self> {
        Self::resolve(cli, |name| std::env::var(name).ok())
    }

    /// Defaults, then the config file, then `BLOOM_PIZZA__*` variables, then CLI flags.
    pub fn resolve(
        cli: &CliArgs,
        env: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let mut config = Self::default();

        let file_path = match &cli.config {
            Some(path) => Some(path.clone()),
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|path| path.exists()),
        };
        if let Some(path) = file_path {
            config.apply_file(read_file_config(&path)?);
        }

        let env = |key: &str| {
            env(&format!("{ENV_PREFIX}{key}")).filter(|value| !value.trim().is_empty())
        };
        if let Some(v) = env("WINDOW_TITLE") {
            config.window_title = v;
        }
        if let Some(v) = env("HOME_IMAGE") {
            config.home_image = Some(PathBuf::from(v));
        }
        if let Some(v) = env("THEME") {
            config.theme = parse_theme(&v)
                .with_context(|| format!("invalid {ENV_PREFIX}THEME value '{v}'"))?;
        }
        if let Some(v) = env("LOG_FILTER") {
            config.log_filter = v;
        }

        if let Some(title) = &cli.window_title {
            config.window_title = title.clone();
        }
        if let Some(path) = &cli.home_image {
            config.home_image = Some(path.clone());
        }
        if let Some(theme) = cli.theme {
            config.theme = theme;
        }
        if let Some(filter) = &cli.log_filter {
            config.log_filter = filter.clone();
        }

        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(v) = file.window_title {
            self.window_title = v;
        }
        if let Some(v) = file.home_image {
            self.home_image = Some(v);
        }
        if let Some(v) = file.theme {
            self.theme = v;
        }
        if let Some(v) = file.log_filter {
            self.log_filter = v;
        }
    }
}

fn read_file_config(path: &Path) -> anyhow::Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))
}

fn parse_theme(raw: &str) -> anyhow::Result<ThemePreset> {
    <ThemePreset as clap::ValueEnum>::from_str(raw.trim(), true).map_err(anyhow::Error::msg)
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn temp_config(label: &str, contents: &str) -> PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let dir = env::temp_dir().join(format!("bloom_pizza_config_{label}_{suffix}"));
        fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("bloom_pizza.toml");
        fs::write(&path, contents).expect("write config");
        path
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let path = temp_config("explicit", "window_title = \"Pizza Night\"\ntheme = \"dark\"\n");
        let cli = CliArgs {
            config: Some(path.clone()),
            ..CliArgs::default()
        };
        let config = StartupConfig::resolve(&cli, no_env).expect("config");
        assert_eq!(config.window_title, "Pizza Night");
        assert_eq!(config.theme, ThemePreset::Dark);
        assert_eq!(config.log_filter, "info");

        fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
    }

    #[test]
    fn env_overrides_file_and_cli_overrides_env() {
        let path = temp_config("layered", "log_filter = \"warn\"\ntheme = \"dark\"\n");
        let vars: HashMap<&str, &str> = HashMap::from([
            ("BLOOM_PIZZA__LOG_FILTER", "debug"),
            ("BLOOM_PIZZA__THEME", "egui-light"),
            ("BLOOM_PIZZA__WINDOW_TITLE", "   "),
        ]);
        let cli = CliArgs {
            config: Some(path.clone()),
            theme: Some(ThemePreset::Classic),
            ..CliArgs::default()
        };
        let config =
            StartupConfig::resolve(&cli, |name| vars.get(name).map(|v| v.to_string()))
                .expect("config");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.theme, ThemePreset::Classic);
        assert_eq!(config.window_title, "Bloom Pizza");

        fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let cli = CliArgs {
            config: Some(PathBuf::from("/definitely/not/here/bloom_pizza.toml")),
            ..CliArgs::default()
        };
        assert!(StartupConfig::resolve(&cli, no_env).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let path = temp_config("unknown", "toppings = 7\n");
        let cli = CliArgs {
            config: Some(path.clone()),
            ..CliArgs::default()
        };
        assert!(StartupConfig::resolve(&cli, no_env).is_err());

        fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
    }

    #[test]
    fn invalid_env_theme_is_reported() {
        let cli = CliArgs::default();
        let err = StartupConfig::resolve(&cli, |name| {
            (name == "BLOOM_PIZZA__THEME").then(|| "neon".to_string())
        })
        .expect_err("bad theme");
        assert!(err.to_string().contains("BLOOM_PIZZA__THEME"));
    }

    #[test]
    fn parses_cli_flags() {
        let cli = CliArgs::try_parse_from(["bloom_pizza", "--theme", "dark", "--log-filter", "debug"])
            .expect("args");
        assert_eq!(cli.theme, Some(ThemePreset::Dark));
        assert_eq!(cli.log_filter.as_deref(), Some("debug"));
    }
}
