use async_trait::async_trait;
use std::fmt;

use crate::{
    error::CatalogError,
    videogame::{NewVideogame, Videogame, VideogameChanges, VideogameId},
};

/// Addresses a single record of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Id(VideogameId),
    /// Zero-based position in listing order (ascending id).
    Position(usize),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Id(id) => write!(f, "id {id}"),
            Lookup::Position(position) => write!(f, "position {position}"),
        }
    }
}

/// The Record Store: sole owner of the videogame records and of the id counter.
#[async_trait]
pub trait VideogameRepository: Send + Sync {
    async fn get(&self, lookup: Lookup) -> Result<Videogame, CatalogError>;

    /// All records in ascending id order.
    async fn list(&self) -> Vec<Videogame>;

    /// All records whose name contains `fragment`, ignoring case.
    async fn list_by_name(&self, fragment: &str) -> Vec<Videogame>;

    /// Stores `videogame` under the next id and returns the stored record.
    async fn add(&self, videogame: NewVideogame) -> Result<Videogame, CatalogError>;

    /// Applies `changes` to the addressed record and returns the updated record.
    async fn update(&self, lookup: Lookup, changes: VideogameChanges) -> Result<Videogame, CatalogError>;

    /// Removes the addressed record and returns it.
    async fn delete(&self, lookup: Lookup) -> Result<Videogame, CatalogError>;
}
