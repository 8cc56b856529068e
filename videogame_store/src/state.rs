use std::sync::Arc;
use tracing::{info, warn};
use videogame_shared::config::KeyMode;

use crate::{repository::VideogameRepository, videogame::NewVideogame};

#[derive(Clone)]
pub struct VideogameState {
    pub repository: Arc<dyn VideogameRepository>,
    /// How the REST layer translates path keys into lookups.
    pub key_mode: KeyMode,
}

/// Initialize the catalog by adding the startup records.
pub async fn initialize(state: &VideogameState, startup_records: Vec<NewVideogame>) {
    info!("Initializing ...");

    for record in startup_records {
        let name = record.name.clone();
        match state.repository.add(record).await {
            Ok(videogame) => info!("Startup record added: `{}` with id {}", name, videogame.id),
            Err(err) => warn!("Startup record `{}` rejected: {}", name, err),
        }
    }
}
