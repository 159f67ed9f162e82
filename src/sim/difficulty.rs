//! Difficulty levels and their spawn/speed tuning

use serde::{Deserialize, Serialize};

/// Spawn and speed tuning for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Time between obstacle spawns (milliseconds)
    pub spawn_interval_ms: f64,
    /// Obstacle speed before jitter (pixels/second)
    pub base_speed: f32,
}

/// Difficulty levels selectable by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "medium" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                spawn_interval_ms: 1200.0,
                base_speed: 150.0,
            },
            Difficulty::Normal => DifficultyProfile {
                spawn_interval_ms: 900.0,
                base_speed: 200.0,
            },
            Difficulty::Hard => DifficultyProfile {
                spawn_interval_ms: 650.0,
                base_speed: 260.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harder_levels_spawn_faster_and_move_faster() {
        let easy = Difficulty::Easy.profile();
        let normal = Difficulty::Normal.profile();
        let hard = Difficulty::Hard.profile();

        assert!(hard.spawn_interval_ms < normal.spawn_interval_ms);
        assert!(normal.spawn_interval_ms < easy.spawn_interval_ms);
        assert!(hard.base_speed > normal.base_speed);
        assert!(normal.base_speed > easy.base_speed);
    }

    #[test]
    fn test_parse_round_trips_names() {
        for level in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(level.as_str()), Some(level));
        }
        assert_eq!(Difficulty::from_str(" HARD "), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, "\"hard\"");
    }
}
