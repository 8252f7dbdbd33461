use crate::{aggregates::structs::CommunityAggregates, newtypes::CommunityId, utils::StorePool};
use commune_utils::error::CommuneResult;

impl CommunityAggregates {
  /// The counts row as the last mutation persisted it.
  pub async fn read(pool: &StorePool, community_id: CommunityId) -> CommuneResult<Self> {
    let tables = pool.read().await;
    Ok(tables.community(community_id)?.counts.clone())
  }

  /// Counts recomputed from the member and moderator sets themselves. Read
  /// paths use this so a defective write path can never surface a stale
  /// count.
  pub async fn live(pool: &StorePool, community_id: CommunityId) -> CommuneResult<Self> {
    let tables = pool.read().await;
    let row = tables.community(community_id)?;
    Ok(CommunityAggregates {
      community_id,
      member_count: row.members.len() as i64,
      moderator_count: row.moderators.len() as i64,
    })
  }
}
