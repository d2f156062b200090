//! The fixed daily sequence of transport legs

use std::str::FromStr;

use kursy_types::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Course {
    #[serde(rename = "I kurs")]
    First,
    #[serde(rename = "II kurs")]
    Second,
    #[serde(rename = "Dalsze kursy")]
    Further,
}

impl Course {
    /// All courses in board column order
    pub const ALL: [Course; 3] = [Course::First, Course::Second, Course::Further];

    pub fn label(&self) -> &'static str {
        match self {
            Course::First => "I kurs",
            Course::Second => "II kurs",
            Course::Further => "Dalsze kursy",
        }
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Course {
    type Err = Error;

    /// Accepts the board labels plus short forms ("1", "I", "1st leg", "dalsze")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "i kurs" | "i" | "1" | "1st" | "1st leg" | "first" => Ok(Course::First),
            "ii kurs" | "ii" | "2" | "2nd" | "2nd leg" | "second" => Ok(Course::Second),
            "dalsze kursy" | "dalsze" | "3" | "further" | "further legs" => Ok(Course::Further),
            _ => Err(Error::UnknownCourse(s.to_string())),
        }
    }
}
