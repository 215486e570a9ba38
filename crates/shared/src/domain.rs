use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

// Synthetic per-insertion identity; never derived from the payload.
id_newtype!(ItemId);
// Scopes drag events to a single editor on screen.
id_newtype!(EditorInstanceId);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapId(pub String);

impl MapId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameModeFamily {
    Warfare,
    Offensive,
    Skirmish,
}

impl GameModeFamily {
    /// Skirmish layouts have a single capture point and no sector objectives.
    pub fn supports_objectives(self) -> bool {
        !matches!(self, Self::Skirmish)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} '{value}'")]
pub struct ParseDomainError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Orientation {
    type Err = ParseDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            _ => Err(ParseDomainError {
                kind: "orientation",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for GameModeFamily {
    type Err = ParseDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warfare" => Ok(Self::Warfare),
            "offensive" => Ok(Self::Offensive),
            "skirmish" => Ok(Self::Skirmish),
            _ => Err(ParseDomainError {
                kind: "game mode",
                value: s.to_string(),
            }),
        }
    }
}

/// A candidate record from the map pool. The same entry may be added to a
/// rotation more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEntry {
    pub id: MapId,
    pub pretty_name: String,
    pub game_mode: GameModeFamily,
    pub orientation: Option<Orientation>,
}

impl MapEntry {
    pub fn new(
        id: impl Into<String>,
        pretty_name: impl Into<String>,
        game_mode: GameModeFamily,
    ) -> Self {
        Self {
            id: MapId::new(id),
            pretty_name: pretty_name.into(),
            game_mode,
            orientation: None,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_orientation_and_mode_case_insensitively() {
        assert_eq!(" Vertical ".parse::<Orientation>(), Ok(Orientation::Vertical));
        assert_eq!("HORIZONTAL".parse::<Orientation>(), Ok(Orientation::Horizontal));
        assert_eq!("offensive".parse::<GameModeFamily>(), Ok(GameModeFamily::Offensive));

        let err = "diagonal".parse::<Orientation>().expect_err("unknown");
        assert_eq!(err.to_string(), "unrecognized orientation 'diagonal'");
    }

    #[test]
    fn skirmish_has_no_objectives() {
        assert!(GameModeFamily::Warfare.supports_objectives());
        assert!(GameModeFamily::Offensive.supports_objectives());
        assert!(!GameModeFamily::Skirmish.supports_objectives());
    }

    #[test]
    fn item_ids_are_unique_per_call() {
        assert_ne!(ItemId::new(), ItemId::new());
    }
}
