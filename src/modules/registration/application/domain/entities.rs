use std::fmt;
use std::str::FromStr;

/// Account classification chosen at signup.
///
/// The stored and submitted representation is the lowercase French literal
/// (`eleve`, `professeur`, `admin`); matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Eleve,
    Professeur,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Eleve, Role::Professeur, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Eleve => "eleve",
            Role::Professeur => "professeur",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| UnknownRole(value.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted account row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}
