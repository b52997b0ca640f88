pub mod cars;
pub mod health;

use std::sync::Arc;

use crate::config::Config;
use crate::repository::CarRepository;

#[derive(Clone)]
pub struct AppState {
    pub repository: CarRepository,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, repository: CarRepository) -> Self {
        Self {
            repository,
            config: Arc::new(config),
        }
    }
}
