use crate::newtypes::CommunityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Aggregate counts for a community. The counts are denormalized from the
/// member and moderator sets and must always equal their sizes.
pub struct CommunityAggregates {
  pub community_id: CommunityId,
  pub member_count: i64,
  pub moderator_count: i64,
}
