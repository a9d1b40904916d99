//! Runtime settings.
//!
//! Settings come from three layers: the constants in [`crate::config::game`],
//! the command line, and an optional JSON settings file. Values in the file
//! override command line values.

use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::game::{
    DEFAULT_EXTEND, DEFAULT_FPS, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_FPS, MAX_HEIGHT, MAX_WIDTH,
    MIN_WIDTH,
};
use crate::error::{PongError, Result};

/// Two-player Pong in the terminal.
///
/// Left player: `w` / `s`. Right player: arrow up / arrow down.
/// Press `r` to restart and `Ctrl+C` to quit.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Width of the game window
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Height of the game window
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Defines how much longer the player should be in the top direction.
    #[arg(short, long, default_value_t = DEFAULT_EXTEND)]
    pub up_extend_player_height: usize,

    /// Defines how much longer the player should be in the bottom direction.
    #[arg(short, long, default_value_t = DEFAULT_EXTEND)]
    pub down_extend_player_height: usize,

    /// Frames per second
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// End the match once a player reaches this many goals (endless when omitted)
    #[arg(long)]
    pub max_score: Option<u32>,

    /// JSON settings file. Values in the file override command line arguments.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Optional overrides read from a JSON settings file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub extend_up: Option<usize>,
    pub extend_down: Option<usize>,
    pub fps: Option<u32>,
    pub max_score: Option<u32>,
}

impl SettingsFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| PongError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| PongError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Validated settings the game runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub extend_up: usize,
    pub extend_down: usize,
    pub fps: u32,
    pub max_score: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            extend_up: DEFAULT_EXTEND,
            extend_down: DEFAULT_EXTEND,
            fps: DEFAULT_FPS,
            max_score: None,
        }
    }
}

impl GameConfig {
    /// Merge the command line with the settings file it names, then validate.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => SettingsFile::load(path)?,
            None => SettingsFile::default(),
        };
        let config = Self::from_cli(cli).merge(&file);
        config.validate()?;
        Ok(config)
    }

    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            width: cli.width,
            height: cli.height,
            extend_up: cli.up_extend_player_height,
            extend_down: cli.down_extend_player_height,
            fps: cli.fps,
            max_score: cli.max_score,
        }
    }

    pub fn merge(self, file: &SettingsFile) -> Self {
        Self {
            width: file.width.unwrap_or(self.width),
            height: file.height.unwrap_or(self.height),
            extend_up: file.extend_up.unwrap_or(self.extend_up),
            extend_down: file.extend_down.unwrap_or(self.extend_down),
            fps: file.fps.unwrap_or(self.fps),
            max_score: file.max_score.or(self.max_score),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&self.width) {
            return Err(PongError::InvalidConfig(format!(
                "width must be between {MIN_WIDTH} and {MAX_WIDTH}, got {}",
                self.width
            )));
        }
        if !(1..=MAX_HEIGHT).contains(&self.height) {
            return Err(PongError::InvalidConfig(format!(
                "height must be between 1 and {MAX_HEIGHT}, got {}",
                self.height
            )));
        }
        // The paddle spans extend_down + 1 + extend_up rows out of height + 1.
        let paddle_fits = self
            .extend_up
            .checked_add(self.extend_down)
            .is_some_and(|extent| extent < self.height);
        if !paddle_fits {
            return Err(PongError::InvalidConfig(format!(
                "paddle extending {} up and {} down does not fit a board of height {}",
                self.extend_up, self.extend_down, self.height
            )));
        }
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(PongError::InvalidConfig(format!(
                "fps must be between 1 and {MAX_FPS}, got {}",
                self.fps
            )));
        }
        if self.max_score == Some(0) {
            return Err(PongError::InvalidConfig("max score must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pong").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_cli_defaults_match_constants() {
        let config = GameConfig::from_cli(&cli(&[]));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_cli_short_flags() {
        let config = GameConfig::from_cli(&cli(&["-w", "40", "-H", "12", "-u", "2", "-d", "0"]));
        assert_eq!(config.width, 40);
        assert_eq!(config.height, 12);
        assert_eq!(config.extend_up, 2);
        assert_eq!(config.extend_down, 0);
    }

    #[test]
    fn test_cli_rejects_negative_width() {
        assert!(Cli::try_parse_from(["pong", "--width", "-3"]).is_err());
    }

    #[test]
    fn test_validate_rejects_paddle_taller_than_board() {
        let config = GameConfig { height: 4, extend_up: 2, extend_down: 2, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(PongError::InvalidConfig(_))));

        let config = GameConfig { height: 5, extend_up: 2, extend_down: 2, ..GameConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_huge_paddle_extension_is_rejected() {
        let config = GameConfig::resolve(&cli(&["-u", "18446744073709551615", "-d", "1"]));
        assert!(matches!(config, Err(PongError::InvalidConfig(_))));

        let config = GameConfig { extend_up: 0, extend_down: usize::MAX, ..GameConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_board_size_limits() {
        let widest = GameConfig { width: MAX_WIDTH, ..GameConfig::default() };
        let tallest = GameConfig { height: MAX_HEIGHT, ..GameConfig::default() };
        assert!(widest.validate().is_ok());
        assert!(tallest.validate().is_ok());

        let too_wide = GameConfig { width: MAX_WIDTH + 1, ..GameConfig::default() };
        let too_tall = GameConfig { height: MAX_HEIGHT + 1, ..GameConfig::default() };
        assert!(too_wide.validate().is_err());
        assert!(too_tall.validate().is_err());

        let huge = GameConfig::resolve(&cli(&["-H", "18446744073709551615"]));
        assert!(matches!(huge, Err(PongError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let narrow = GameConfig { width: 3, ..GameConfig::default() };
        let flat = GameConfig { height: 0, ..GameConfig::default() };
        let frozen = GameConfig { fps: 0, ..GameConfig::default() };
        let frantic = GameConfig { fps: MAX_FPS + 1, ..GameConfig::default() };
        let no_goal = GameConfig { max_score: Some(0), ..GameConfig::default() };

        for config in [narrow, flat, frozen, frantic, no_goal] {
            assert!(config.validate().is_err(), "{config:?} should be rejected");
        }
    }

    #[test]
    fn test_settings_file_overrides_cli() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"width": 30, "max_score": 5}}"#).unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let config = GameConfig::resolve(&cli(&["-w", "80", "-H", "10", "-c", &path])).unwrap();

        assert_eq!(config.width, 30);
        assert_eq!(config.height, 10);
        assert_eq!(config.max_score, Some(5));
    }

    #[test]
    fn test_settings_file_unknown_field() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"speed": 3}}"#).unwrap();

        let err = SettingsFile::load(file.path()).unwrap_err();
        assert!(matches!(err, PongError::SettingsParse { .. }));
    }

    #[test]
    fn test_settings_file_missing() {
        let err = SettingsFile::load(Path::new("/nonexistent/pong.json")).unwrap_err();
        assert!(matches!(err, PongError::SettingsRead { .. }));
    }

    #[test]
    fn test_resolved_config_is_validated() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"height": 2}}"#).unwrap();

        let path = file.path().to_str().unwrap().to_string();
        assert!(GameConfig::resolve(&cli(&["-c", &path])).is_err());
    }
}
