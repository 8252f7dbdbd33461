use commune_db_schema::{
  aggregates::structs::CommunityAggregates,
  source::{community::Community, person::Person},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A community with its counts.
pub struct CommunityView {
  pub community: Community,
  pub counts: CommunityAggregates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A community moderator.
pub struct CommunityModeratorView {
  pub community: Community,
  pub moderator: Person,
}
