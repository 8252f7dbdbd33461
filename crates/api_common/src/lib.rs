pub mod community;
pub mod context;
pub mod person;

pub use commune_db_schema as db_schema;
pub use commune_db_views as db_views;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// The response when an operation has no data to return.
pub struct SuccessResponse {
  pub success: bool,
}

impl Default for SuccessResponse {
  fn default() -> Self {
    SuccessResponse { success: true }
  }
}
