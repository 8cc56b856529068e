use thiserror::Error;

use crate::repository::Lookup;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No videogame found at {0}")]
    NotFound(Lookup),
    #[error("A videogame named `{0}` already exists")]
    Conflict(String),
}
