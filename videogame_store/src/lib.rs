pub mod error;
pub mod in_memory;
pub mod repository;
pub mod startup_records;
pub mod state;
pub mod videogame;

pub use error::CatalogError;
pub use repository::{Lookup, VideogameRepository};
pub use videogame::{NewVideogame, Videogame, VideogameChanges, VideogameId};
