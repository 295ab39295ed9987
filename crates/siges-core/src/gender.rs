//! Gender codes as stored in the `Genero` columns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Single-letter gender code used across the platform's user tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// The letter stored in the database and sent over the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }

    /// Parses a stored letter back into a [`Gender`].
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        assert_eq!(Gender::from_code(Gender::Male.code()), Some(Gender::Male));
        assert_eq!(
            Gender::from_code(Gender::Female.code()),
            Some(Gender::Female)
        );
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(Gender::from_code("X"), None);
        assert_eq!(Gender::from_code("m"), None);
    }

    #[test]
    fn serde_uses_the_codes() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"F\"");
        let gender: Gender = serde_json::from_str("\"M\"").unwrap();
        assert_eq!(gender, Gender::Male);
    }
}
