//! Mood model

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One of the six moods a user can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Chill,
    Angry,
    Excited,
    Lonely,
}

/// Returned when text does not name a known mood
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown mood '{0}'. Expected one of: happy, sad, chill, angry, excited, lonely")]
pub struct UnknownMood(pub String);

impl Mood {
    /// All moods in catalog order
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Chill,
        Mood::Angry,
        Mood::Excited,
        Mood::Lonely,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Chill => "chill",
            Mood::Angry => "angry",
            Mood::Excited => "excited",
            Mood::Lonely => "lonely",
        }
    }

    /// Position in `Mood::ALL`, used to index per-mood tables
    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "chill" => Ok(Mood::Chill),
            "angry" => Ok(Mood::Angry),
            "excited" => Ok(Mood::Excited),
            "lonely" => Ok(Mood::Lonely),
            _ => Err(UnknownMood(s.to_string())),
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mood() {
        assert_eq!("sad".parse::<Mood>().unwrap(), Mood::Sad);
        assert_eq!(" Excited ".parse::<Mood>().unwrap(), Mood::Excited);
        assert!("melancholy".parse::<Mood>().is_err());
        assert!("".parse::<Mood>().is_err());
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, mood) in Mood::ALL.iter().enumerate() {
            assert_eq!(mood.index(), i);
            assert_eq!(mood.as_str().parse::<Mood>().unwrap(), *mood);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Mood::Lonely).unwrap();
        assert_eq!(json, "\"lonely\"");
        let mood: Mood = serde_json::from_str("\"chill\"").unwrap();
        assert_eq!(mood, Mood::Chill);
    }
}
