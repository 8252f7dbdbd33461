use crate::newtypes::PersonId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A person known to the user directory.
pub struct Person {
  pub id: PersonId,
  pub name: String,
  pub display_name: Option<String>,
  /// Whether the directory marks this person as eligible to moderate.
  pub moderator: bool,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct PersonInsertForm {
  pub name: String,
  pub display_name: Option<String>,
  pub moderator: bool,
}
