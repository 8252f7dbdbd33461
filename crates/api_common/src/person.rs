use commune_db_schema::source::person::Person;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListModeratorCandidatesResponse {
  pub candidates: Vec<Person>,
}
