use std::fmt::{Display, Formatter};
use std::str::FromStr;

use atelier_core::AppError;
use serde::{Deserialize, Serialize};

/// Actor roles recognised by the platform.
///
/// Exactly one role is attached to every authenticated actor by the identity
/// provider; the access engine never computes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform administrator with unrestricted reach.
    Admin,
    /// Agency that supervises the creators assigned to it.
    Studio,
    /// Individual creator that owns its own content.
    Model,
}

impl Role {
    /// Returns a stable transport value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Studio => "studio",
            Self::Model => "model",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[Role::Admin, Role::Studio, Role::Model];

        ALL
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "studio" => Ok(Self::Studio),
            "model" => Ok(Self::Model),
            _ => Err(AppError::Validation(format!("unknown role value '{value}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Role;

    #[test]
    fn role_roundtrip_transport_value() {
        for role in Role::all() {
            assert!(matches!(Role::from_str(role.as_str()), Ok(value) if value == *role));
        }
    }

    #[test]
    fn unknown_or_differently_cased_role_is_rejected() {
        assert!(Role::from_str("superadmin").is_err());
        assert!(Role::from_str("Admin").is_err());
        assert!(Role::from_str("").is_err());
    }
}
