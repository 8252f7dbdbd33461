use crate::structs::CommunityModeratorView;
use commune_db_schema::{
  impls::community_moderator::CommunityModerator_,
  newtypes::CommunityId,
  source::{
    community::{Community, CommunityModerator},
    person::Person,
  },
  traits::Crud,
  utils::StorePool,
};
use commune_utils::error::CommuneResult;

impl CommunityModeratorView {
  /// A community's moderators in the order they were assigned. Assignments
  /// whose person the directory no longer resolves are left out of the view;
  /// the moderator count still reflects the full set.
  pub async fn for_community(
    pool: &StorePool,
    community_id: CommunityId,
  ) -> CommuneResult<Vec<Self>> {
    let community = Community::read(pool, community_id).await?;
    let assignments = CommunityModerator::for_community(pool, community_id).await?;
    let mut views = Vec::with_capacity(assignments.len());
    for assignment in assignments {
      if let Ok(moderator) = Person::read(pool, assignment.person_id).await {
        views.push(CommunityModeratorView {
          community: community.clone(),
          moderator,
        });
      }
    }
    Ok(views)
  }
}
