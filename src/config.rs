use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_MANIFEST: &str = "app/src/main/res/raw/aboutlibraries.json";
pub const DEFAULT_END_MARKER: &str = "</details>";

/// Root configuration structure, deserialized from `.readme-licenses/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Path of the AboutLibraries JSON export, relative to the project root.
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
    /// Documents whose library section gets regenerated.
    #[serde(default = "default_targets")]
    pub targets: Vec<Target>,
}

/// A document plus the marker pair delimiting its library list.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Target {
    pub path: PathBuf,
    pub start_marker: String,
    #[serde(default = "default_end_marker")]
    pub end_marker: String,
}

fn default_manifest() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST)
}

fn default_end_marker() -> String {
    DEFAULT_END_MARKER.to_string()
}

/// English and Chinese READMEs, each with its own `<summary>` label.
fn default_targets() -> Vec<Target> {
    vec![
        Target {
            path: PathBuf::from("docs/README.md"),
            start_marker: "<summary><strong>Click Here to View</strong></summary>".to_string(),
            end_marker: default_end_marker(),
        },
        Target {
            path: PathBuf::from("docs/README_CN.md"),
            start_marker: "<summary><strong>点击查看</strong></summary>".to_string(),
            end_marker: default_end_marker(),
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest: default_manifest(),
            targets: default_targets(),
        }
    }
}

impl Config {
    fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut config: Config = toml::from_str(content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        if config.targets.is_empty() {
            config.targets = default_targets();
        }
        Ok(config)
    }

    /// Resolve the manifest path against the project root.
    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        resolve(root, &self.manifest)
    }
}

impl Target {
    pub fn resolved_path(&self, root: &Path) -> PathBuf {
        resolve(root, &self.path)
    }
}

/// Join `path` onto `root`, keeping it as written when the root is the working directory.
fn resolve(root: &Path, path: &Path) -> PathBuf {
    if root == Path::new(".") {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.readme-licenses/config.toml`
/// 3. `~/.config/readme-licenses/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file {}", path.display()))?;
        return Config::parse(&content, path);
    }

    let project_config = project_path.join(".readme-licenses").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Config::parse(&content, &project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("readme-licenses")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Config::parse(&content, &home_config);
        }
    }

    Ok(Config::default())
}
