use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Resource kinds a user can favorite.
///
/// Serialized as the plural route segment; the singular forms used by older clients are
/// accepted when deserializing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    #[serde(alias = "person")]
    People,
    #[serde(alias = "vehicle")]
    Vehicles,
    #[serde(alias = "planet")]
    Planets,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Vehicles => "vehicles",
            Self::Planets => "planets",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored link between a user and one favorite resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub user_id: i32,
    pub kind: ResourceKind,
    pub target_id: i32,
}
