//! System roles and their database codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The roles the platform distinguishes.
///
/// Every role-scoped table, lockout row and token claim identifies the role
/// by its short code, which is also what goes over the wire in the `Rol`
/// field. Variant names keep the platform's Spanish role names; the codes
/// are the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemRole {
    #[serde(rename = "D")]
    Directivo,
    #[serde(rename = "PP")]
    ProfesorPrimaria,
    #[serde(rename = "PS")]
    ProfesorSecundaria,
    #[serde(rename = "A")]
    Auxiliar,
    #[serde(rename = "PA")]
    PersonalAdministrativo,
    #[serde(rename = "R")]
    Responsable,
    #[serde(rename = "T")]
    Tutor,
}

impl SystemRole {
    /// The short code stored in the database and sent over the wire.
    pub fn code(&self) -> &'static str {
        match self {
            SystemRole::Directivo => "D",
            SystemRole::ProfesorPrimaria => "PP",
            SystemRole::ProfesorSecundaria => "PS",
            SystemRole::Auxiliar => "A",
            SystemRole::PersonalAdministrativo => "PA",
            SystemRole::Responsable => "R",
            SystemRole::Tutor => "T",
        }
    }

    /// Parses a short code back into a role.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "D" => Some(SystemRole::Directivo),
            "PP" => Some(SystemRole::ProfesorPrimaria),
            "PS" => Some(SystemRole::ProfesorSecundaria),
            "A" => Some(SystemRole::Auxiliar),
            "PA" => Some(SystemRole::PersonalAdministrativo),
            "R" => Some(SystemRole::Responsable),
            "T" => Some(SystemRole::Tutor),
            _ => None,
        }
    }
}

impl fmt::Display for SystemRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
