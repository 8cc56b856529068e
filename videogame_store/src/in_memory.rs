use async_trait::async_trait;
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::info;
use videogame_shared::config::CatalogConfig;

use crate::{
    error::CatalogError,
    repository::{Lookup, VideogameRepository},
    state::VideogameState,
    videogame::{NewVideogame, Videogame, VideogameChanges, VideogameId},
};

#[derive(Debug, Default)]
struct Catalog {
    // Ids are handed out in increasing order, so key order is insertion order.
    records: BTreeMap<VideogameId, Videogame>,
    next_id: VideogameId,
}

impl Catalog {
    fn resolve(&self, lookup: Lookup) -> Option<VideogameId> {
        match lookup {
            Lookup::Id(id) => self.records.contains_key(&id).then_some(id),
            Lookup::Position(position) => self.records.keys().nth(position).copied(),
        }
    }

    fn name_taken(&self, name: &str, except: Option<VideogameId>) -> bool {
        self.records
            .values()
            .any(|videogame| Some(videogame.id) != except && videogame.has_name(name))
    }
}

pub struct InMemoryVideogameRepository {
    catalog: RwLock<Catalog>,
    unique_names: bool,
}

impl InMemoryVideogameRepository {
    pub fn new(unique_names: bool) -> Self {
        Self {
            catalog: RwLock::new(Catalog::default()),
            unique_names,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.unique_names)
    }

    /// The id the next added record will receive.
    pub async fn next_id(&self) -> VideogameId {
        self.catalog.read().await.next_id
    }
}

impl Default for InMemoryVideogameRepository {
    fn default() -> Self {
        Self::new(true)
    }
}

#[async_trait]
impl VideogameRepository for InMemoryVideogameRepository {
    async fn get(&self, lookup: Lookup) -> Result<Videogame, CatalogError> {
        let catalog = self.catalog.read().await;

        catalog
            .resolve(lookup)
            .and_then(|id| catalog.records.get(&id))
            .cloned()
            .ok_or(CatalogError::NotFound(lookup))
    }

    async fn list(&self) -> Vec<Videogame> {
        self.catalog.read().await.records.values().cloned().collect()
    }

    async fn list_by_name(&self, fragment: &str) -> Vec<Videogame> {
        self.catalog
            .read()
            .await
            .records
            .values()
            .filter(|videogame| videogame.name_contains(fragment))
            .cloned()
            .collect()
    }

    async fn add(&self, videogame: NewVideogame) -> Result<Videogame, CatalogError> {
        let mut catalog = self.catalog.write().await;

        // The id is spent even when the record is rejected.
        let id = catalog.next_id;
        catalog.next_id = id.next();

        if self.unique_names && catalog.name_taken(&videogame.name, None) {
            return Err(CatalogError::Conflict(videogame.name));
        }

        let videogame = videogame.with_id(id);
        catalog.records.insert(id, videogame.clone());
        info!("Videogame added: {:?}", videogame);

        Ok(videogame)
    }

    async fn update(&self, lookup: Lookup, changes: VideogameChanges) -> Result<Videogame, CatalogError> {
        let mut catalog = self.catalog.write().await;

        let Some(current) = catalog.resolve(lookup).and_then(|id| catalog.records.get(&id)) else {
            return Err(CatalogError::NotFound(lookup));
        };
        let updated = changes.applied_to(current);

        if self.unique_names && catalog.name_taken(&updated.name, Some(updated.id)) {
            return Err(CatalogError::Conflict(updated.name));
        }

        catalog.records.insert(updated.id, updated.clone());
        info!("Videogame updated: {:?}", updated);

        Ok(updated)
    }

    async fn delete(&self, lookup: Lookup) -> Result<Videogame, CatalogError> {
        let mut catalog = self.catalog.write().await;

        let videogame = catalog
            .resolve(lookup)
            .and_then(|id| catalog.records.remove(&id))
            .ok_or(CatalogError::NotFound(lookup))?;
        info!("Videogame deleted: {:?}", videogame);

        Ok(videogame)
    }
}

/// Builds the application state around a fresh, empty in-memory catalog.
pub fn videogame_state(config: &CatalogConfig) -> VideogameState {
    VideogameState {
        repository: Arc::new(InMemoryVideogameRepository::from_config(config)),
        key_mode: config.key_mode,
    }
}
