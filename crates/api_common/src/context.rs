use commune_db_schema::utils::StorePool;
use commune_utils::settings::structs::Settings;
use std::sync::Arc;

#[derive(Clone)]
pub struct CommuneContext {
  pool: StorePool,
  settings: Arc<Settings>,
}

impl CommuneContext {
  pub fn create(pool: StorePool, settings: Settings) -> CommuneContext {
    CommuneContext {
      pool,
      settings: Arc::new(settings),
    }
  }

  pub fn pool(&self) -> &StorePool {
    &self.pool
  }

  pub fn settings(&self) -> &Settings {
    &self.settings
  }
}
