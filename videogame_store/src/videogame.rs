use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt;

/// Server-assigned identifier of a [`Videogame`]. Ids are handed out sequentially starting at `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideogameId(pub u64);

impl VideogameId {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for VideogameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Videogame {
    pub id: VideogameId,
    pub name: String,
    pub publisher: String,
    pub rating: u32,
    pub release_year: Option<u16>,
}

impl Videogame {
    /// Case-insensitive name equality, the uniqueness rule of the catalog.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name.to_lowercase().contains(&fragment.to_lowercase())
    }
}

/// A videogame as submitted by a client. An `id` sent along is not part of this type and is dropped during
/// deserialization, since ids are always assigned by the store.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVideogame {
    pub name: String,
    pub publisher: String,
    pub rating: u32,
    pub release_year: Option<u16>,
}

impl NewVideogame {
    pub fn with_id(self, id: VideogameId) -> Videogame {
        let NewVideogame {
            name,
            publisher,
            rating,
            release_year,
        } = self;

        Videogame {
            id,
            name,
            publisher,
            rating,
            release_year,
        }
    }
}

/// Fields to overwrite on an existing videogame. Absent fields are left as they are.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideogameChanges {
    pub name: Option<String>,
    pub publisher: Option<String>,
    pub rating: Option<u32>,
    pub release_year: Option<u16>,
}

impl VideogameChanges {
    /// Returns a copy of `videogame` with the changes applied. The id is never touched.
    pub fn applied_to(&self, videogame: &Videogame) -> Videogame {
        let mut updated = videogame.clone();

        if let Some(name) = &self.name {
            updated.name.clone_from(name);
        }
        if let Some(publisher) = &self.publisher {
            updated.publisher.clone_from(publisher);
        }
        if let Some(rating) = self.rating {
            updated.rating = rating;
        }
        if let Some(release_year) = self.release_year {
            updated.release_year = Some(release_year);
        }

        updated
    }
}
