use serde::{Deserialize, Serialize};

pub type UserId = u64;

/// Rol del usuario; el string del rol es también el id de su dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Artist,
    Helper,
    Organisation,
    /// Cualquier rol desconocido cae aquí (tiene que ser la última variante)
    #[serde(other)]
    User,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Artist, Role::User, Role::Helper, Role::Organisation];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Artist => "artist",
            Role::User => "user",
            Role::Helper => "helper",
            Role::Organisation => "organisation",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "artist" => Some(Role::Artist),
            "user" => Some(Role::User),
            "helper" => Some(Role::Helper),
            "organisation" => Some(Role::Organisation),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Artist => "Artist",
            Role::User => "Seller",
            Role::Helper => "Pickup Helper",
            Role::Organisation => "Organisation",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub green_coins: u32,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserStats {
    pub rating: f32,
    pub rating_count: u32,
    pub total_listings: u32,
    pub total_sold: u32,
    pub total_donated: u32,
}
