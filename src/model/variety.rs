// src/model/variety.rs

use serde::Serialize;
use std::fmt;

/// The apple varieties known to the planner.
///
/// Declaration order is the order varieties are planned in within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Variety {
    RoyalGala,
    Fuji,
    GrannySmith,
    GoldenDelicious,
    PinkLady,
}

impl Variety {
    pub const ALL: [Variety; 5] = [
        Variety::RoyalGala,
        Variety::Fuji,
        Variety::GrannySmith,
        Variety::GoldenDelicious,
        Variety::PinkLady,
    ];

    /// Name as it appears in harvest data and in the PO export ("Royal Gala").
    pub fn name(&self) -> &'static str {
        match self {
            Variety::RoyalGala => "Royal Gala",
            Variety::Fuji => "Fuji",
            Variety::GrannySmith => "Granny Smith",
            Variety::GoldenDelicious => "Golden Delicious",
            Variety::PinkLady => "Pink Lady",
        }
    }

    /// Column header used for this variety in demand data ("royal_gala").
    pub fn column_key(&self) -> &'static str {
        match self {
            Variety::RoyalGala => "royal_gala",
            Variety::Fuji => "fuji",
            Variety::GrannySmith => "granny_smith",
            Variety::GoldenDelicious => "golden_delicious",
            Variety::PinkLady => "pink_lady",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

impl fmt::Display for Variety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
