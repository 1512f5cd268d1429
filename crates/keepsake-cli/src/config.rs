//! Command-line arguments, the optional TOML config file, and how the two
//! are layered into [`Settings`].

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use keepsake_core::note::DEFAULT_AUTHOR;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TITLE: &str = "Fauzan ❤ Girlfriend";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug, Default)]
#[command(name = "keepsake", about = "A couple's profile, memories and love notes, in the terminal")]
pub struct Args {
  /// Path to a TOML config file (url, author, title, log_file).
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Base URL of the keepsake API (default: http://localhost:8000).
  #[arg(long, env = "KEEPSAKE_URL")]
  pub url: Option<String>,

  /// Author pre-filled into new notes.
  #[arg(long, env = "KEEPSAKE_AUTHOR")]
  pub author: Option<String>,

  /// Title shown in the header.
  #[arg(long, env = "KEEPSAKE_TITLE")]
  pub title: Option<String>,

  /// Write logs to this file. Without it nothing is logged, since the
  /// terminal belongs to the UI.
  #[arg(long, value_name = "FILE", env = "KEEPSAKE_LOG_FILE")]
  pub log_file: Option<PathBuf>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default, Debug)]
struct ConfigFile {
  #[serde(default)]
  url:      String,
  #[serde(default)]
  author:   String,
  #[serde(default)]
  title:    String,
  #[serde(default)]
  log_file: Option<PathBuf>,
}

// ─── Settings ─────────────────────────────────────────────────────────────────

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  pub base_url: String,
  pub author:   String,
  pub title:    String,
  pub log_file: Option<PathBuf>,
}

impl Settings {
  /// Read the config file named in `args`, if any, and layer the two.
  pub fn resolve(args: Args) -> Result<Self> {
    let file = match &args.config {
      Some(path) => {
        let raw = std::fs::read_to_string(path)
          .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).context("parsing config file")?
      }
      None => ConfigFile::default(),
    };
    Ok(Self::layer(args, file))
  }

  // CLI flags (and their env vars) override the config file, which
  // overrides defaults.
  fn layer(args: Args, file: ConfigFile) -> Self {
    Self {
      base_url: pick(args.url, file.url, DEFAULT_BASE_URL),
      author:   pick(args.author, file.author, DEFAULT_AUTHOR),
      title:    pick(args.title, file.title, DEFAULT_TITLE),
      log_file: args.log_file.or(file.log_file),
    }
  }
}

fn pick(flag: Option<String>, file: String, default: &str) -> String {
  flag
    .filter(|s| !s.is_empty())
    .or_else(|| (!file.is_empty()).then_some(file))
    .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn args_are_well_formed() {
    Args::command().debug_assert();
  }

  #[test]
  fn defaults_apply_when_nothing_is_set() {
    let settings = Settings::layer(Args::default(), ConfigFile::default());
    assert_eq!(settings, Settings {
      base_url: DEFAULT_BASE_URL.into(),
      author:   "Fauzan".into(),
      title:    DEFAULT_TITLE.into(),
      log_file: None,
    });
  }

  #[test]
  fn file_overrides_defaults_and_flags_override_file() {
    let file: ConfigFile = toml::from_str(
      r#"
        url = "http://keepsake.lan:8000"
        author = "Aisyah"
        log_file = "/tmp/keepsake.log"
      "#,
    )
    .unwrap();
    let args = Args {
      url: Some("https://keepsake.example".into()),
      ..Args::default()
    };

    let settings = Settings::layer(args, file);
    assert_eq!(settings.base_url, "https://keepsake.example");
    assert_eq!(settings.author, "Aisyah");
    assert_eq!(settings.title, DEFAULT_TITLE);
    assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/keepsake.log")));
  }

  #[test]
  fn empty_values_count_as_unset() {
    let file: ConfigFile = toml::from_str(r#"url = """#).unwrap();
    let args = Args {
      author: Some(String::new()),
      ..Args::default()
    };

    let settings = Settings::layer(args, file);
    assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    assert_eq!(settings.author, "Fauzan");
  }

  #[test]
  fn missing_config_file_is_an_error() {
    let args = Args {
      config: Some(PathBuf::from("/nonexistent/keepsake.toml")),
      ..Args::default()
    };
    let err = Settings::resolve(args).unwrap_err();
    assert!(err.to_string().contains("reading config file"));
  }
}
