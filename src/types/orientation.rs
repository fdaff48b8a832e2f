use std::{fmt::Display, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Frame orientation requested from the footage catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
    Square,
}

impl Orientation {
    /// The value the catalog expects as query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
            Orientation::Square => "square",
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            "square" => Ok(Self::Square),
            other => Err(format!("Unknown orientation '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Landscape".parse::<Orientation>(), Ok(Orientation::Landscape));
        assert_eq!(" square ".parse::<Orientation>(), Ok(Orientation::Square));
        assert!("diagonal".parse::<Orientation>().is_err());
    }

    #[test]
    fn defaults_to_portrait() {
        assert_eq!(Orientation::default().as_str(), "portrait");
    }
}
