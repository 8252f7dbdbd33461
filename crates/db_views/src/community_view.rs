use crate::structs::CommunityView;
use commune_db_schema::{
  aggregates::structs::CommunityAggregates,
  impls::community::Community_,
  newtypes::CommunityId,
  source::community::Community,
  traits::Crud,
  utils::StorePool,
};
use commune_utils::error::CommuneResult;

impl CommunityView {
  /// The sanctioned read path for admin views. Counts are recomputed from
  /// the live sets, never taken from the cached row.
  pub async fn read(pool: &StorePool, community_id: CommunityId) -> CommuneResult<Self> {
    let community = Community::read(pool, community_id).await?;
    let counts = CommunityAggregates::live(pool, community_id).await?;
    Ok(CommunityView { community, counts })
  }

  /// All communities in creation order, with live counts.
  pub async fn list(pool: &StorePool) -> CommuneResult<Vec<Self>> {
    let communities = Community::list(pool).await?;
    let mut views = Vec::with_capacity(communities.len());
    for community in communities {
      let counts = CommunityAggregates::live(pool, community.id).await?;
      views.push(CommunityView { community, counts });
    }
    Ok(views)
  }
}
