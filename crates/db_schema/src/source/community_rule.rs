use crate::newtypes::{CommunityId, CommunityRuleId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A rule of a community. Rules keep the order they were created in.
pub struct CommunityRule {
  pub id: CommunityRuleId,
  pub community_id: CommunityId,
  pub title: String,
  pub description: String,
}

#[derive(Debug, Clone)]
pub struct CommunityRuleInsertForm {
  pub community_id: CommunityId,
  pub title: String,
  pub description: String,
}
