use serde::{Serialize, Serializer};
use std::fmt;

pub const UNKNOWN_FISH: &str = "Unknown Fish";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    BlackSeaSprat,
    GiltHeadBream,
    HorseMackerel,
    RedMullet,
    RedSeaBream,
    SeaBass,
    Shrimp,
    StripedRedMullet,
    Trout,
}

impl Species {
    /// Canonical order of the model's output vector.
    pub const ALL: [Species; 9] = [
        Species::BlackSeaSprat,
        Species::GiltHeadBream,
        Species::HorseMackerel,
        Species::RedMullet,
        Species::RedSeaBream,
        Species::SeaBass,
        Species::Shrimp,
        Species::StripedRedMullet,
        Species::Trout,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Species::BlackSeaSprat => "Black Sea Sprat",
            Species::GiltHeadBream => "Gilt-Head Bream",
            Species::HorseMackerel => "Horse Mackerel",
            Species::RedMullet => "Red Mullet",
            Species::RedSeaBream => "Red Sea Bream",
            Species::SeaBass => "Sea Bass",
            Species::Shrimp => "Shrimp",
            Species::StripedRedMullet => "Striped Red Mullet",
            Species::Trout => "Trout",
        }
    }

    /// File name of the card picture under `static/images`.
    pub fn image_file(&self) -> &'static str {
        match self {
            Species::BlackSeaSprat => "BlackSeaSprat.png",
            Species::GiltHeadBream => "GiltHeadBream.JPG",
            Species::HorseMackerel => "HorseMackerel.png",
            Species::RedMullet => "RedMullet.png",
            Species::RedSeaBream => "RedSeaBream.JPG",
            Species::SeaBass => "SeaBass.JPG",
            Species::Shrimp => "Shrimp.png",
            Species::StripedRedMullet => "StripedRedMullet.png",
            Species::Trout => "Trout.png",
        }
    }

    pub fn from_name(name: &str) -> Option<Species> {
        Species::ALL
            .into_iter()
            .find(|species| species.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassLabel {
    Species(Species),
    UnknownFish,
}

impl ClassLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassLabel::Species(species) => species.name(),
            ClassLabel::UnknownFish => UNKNOWN_FISH,
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ClassLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
