use crate::{Color, Position, RuleSet};

/// Settings of an interactive session, parsed from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    /// Side played by the human (`SHOGI_HUMAN_SIDE`, `sente` or `gote`).
    pub human_side: Color,
    /// Seed of the computer opponent (`SHOGI_SEED`); entropy when unset.
    pub seed: Option<u64>,
    /// Rule set (`SHOGI_RULES`, `standard` or `reference`).
    pub rules: RuleSet,
    /// Starting position text (`SHOGI_START_SFEN`); the standard opening when unset.
    pub start: Option<Position>,
}

impl PlayConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// Unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        PlayConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through the given variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = PlayConfig::default();

        PlayConfig {
            human_side: lookup("SHOGI_HUMAN_SIDE")
                .and_then(|v| parse_side(&v))
                .unwrap_or(default.human_side),
            seed: lookup("SHOGI_SEED").and_then(|v| v.parse().ok()),
            rules: lookup("SHOGI_RULES")
                .and_then(|v| RuleSet::from_name(&v))
                .unwrap_or(default.rules),
            start: lookup("SHOGI_START_SFEN").and_then(|v| v.parse().ok()),
        }
    }

    /// Returns the starting position.
    pub fn start_position(&self) -> Position {
        self.start.unwrap_or_else(Position::startpos)
    }
}

fn parse_side(s: &str) -> Option<Color> {
    match s {
        "sente" => Some(Color::Black),
        "gote" => Some(Color::White),
        _ => None,
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            human_side: Color::Black,
            seed: None,
            rules: RuleSet::standard(),
            start: None,
        }
    }
}
