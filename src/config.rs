//! Settings for `magnus play`
//!
//! A JSON file provides defaults and command-line flags override them:
//!
//! ```json
//! {
//!   "engine": { "path": "/usr/local/bin/stockfish", "movetime_ms": 800 },
//!   "player_color": "Black"
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chess_engine::{Color, Position};
use serde::{Deserialize, Serialize};
use uci_bridge::EngineConfig;

use crate::cli::PlayArgs;

/// Contents of the settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub engine: EngineConfig,
    pub player_color: Option<Color>,
    pub start_fen: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}

/// Fully resolved settings for one game
#[derive(Debug, Clone)]
pub struct PlaySettings {
    pub engine: EngineConfig,
    pub player_color: Color,
    pub start: Position,
}

impl PlaySettings {
    pub fn resolve(args: &PlayArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(file, args)
    }

    fn merge(file: FileConfig, args: &PlayArgs) -> Result<Self> {
        let mut engine = file.engine;
        if let Some(path) = &args.engine {
            engine.path = path.clone();
        }
        if let Some(movetime) = args.movetime {
            engine.movetime_ms = movetime;
        }

        let player_color = args
            .color
            .map(Color::from)
            .or(file.player_color)
            .unwrap_or(Color::White);

        let start = match args.fen.as_deref().or(file.start_fen.as_deref()) {
            Some(fen) => Position::from_fen(fen).context("invalid start position")?,
            None => Position::initial(),
        };

        Ok(PlaySettings {
            engine,
            player_color,
            start,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Side;

    fn args() -> PlayArgs {
        PlayArgs {
            engine: None,
            movetime: None,
            color: None,
            fen: None,
            config: None,
        }
    }

    #[test]
    fn test_defaults_without_file() {
        let settings = PlaySettings::merge(FileConfig::default(), &args()).unwrap();
        assert_eq!(settings.engine, EngineConfig::default());
        assert_eq!(settings.player_color, Color::White);
        assert_eq!(settings.start, Position::initial());
    }

    #[test]
    fn test_file_values_apply() {
        let file: FileConfig = serde_json::from_str(
            r#"{ "engine": { "movetime_ms": 800 }, "player_color": "Black" }"#,
        )
        .unwrap();
        let settings = PlaySettings::merge(file, &args()).unwrap();
        assert_eq!(settings.engine.movetime_ms, 800);
        assert_eq!(settings.player_color, Color::Black);
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig {
            player_color: Some(Color::Black),
            ..FileConfig::default()
        };
        let flags = PlayArgs {
            engine: Some("/opt/engine".into()),
            movetime: Some(50),
            color: Some(Side::White),
            ..args()
        };
        let settings = PlaySettings::merge(file, &flags).unwrap();
        assert_eq!(settings.engine.path, Path::new("/opt/engine"));
        assert_eq!(settings.engine.movetime_ms, 50);
        assert_eq!(settings.player_color, Color::White);
    }

    #[test]
    fn test_bad_start_fen_is_an_error() {
        let flags = PlayArgs {
            fen: Some("not a fen".into()),
            ..args()
        };
        assert!(PlaySettings::merge(FileConfig::default(), &flags).is_err());
    }
}
