use serde::{Deserialize, Serialize};

/// What a favorite points at.
///
/// A favorite row stores two nullable references; the character reference takes precedence
/// when both are set and a row with neither resolves to [`FavoriteTarget::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Character(i32),
    Planet(i32),
    Unknown,
}

impl FavoriteTarget {
    pub fn from_ids(character_id: Option<i32>, planet_id: Option<i32>) -> Self {
        match (character_id, planet_id) {
            (Some(character_id), _) => Self::Character(character_id),
            (None, Some(planet_id)) => Self::Planet(planet_id),
            (None, None) => Self::Unknown,
        }
    }

    pub fn fav_type(&self) -> FavoriteType {
        match self {
            Self::Character(_) => FavoriteType::Character,
            Self::Planet(_) => FavoriteType::Planet,
            Self::Unknown => FavoriteType::Unknown,
        }
    }

    pub fn fav_id(&self) -> Option<i32> {
        match self {
            Self::Character(id) | Self::Planet(id) => Some(*id),
            Self::Unknown => None,
        }
    }
}

impl From<&entity::favorite::Model> for FavoriteTarget {
    fn from(favorite: &entity::favorite::Model) -> Self {
        Self::from_ids(favorite.character_id, favorite.planet_id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteType {
    Character,
    Planet,
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub fav_type: FavoriteType,
    /// ID of the favorited character or planet, null when the favorite references neither
    pub fav_id: Option<i32>,
}

impl From<entity::favorite::Model> for FavoriteDto {
    fn from(favorite: entity::favorite::Model) -> Self {
        let target = FavoriteTarget::from(&favorite);

        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            fav_type: target.fav_type(),
            fav_id: target.fav_id(),
        }
    }
}

/// Request body for creating a favorite, at least one ID must be provided
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateFavoriteDto {
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
}
