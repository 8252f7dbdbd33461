use actix_web::web::{Data, Json};
use commune_api_common::{
  community::{AddModToCommunity, AddModToCommunityResponse},
  context::CommuneContext,
};
use commune_db_schema::{
  source::community::{CommunityModerator, CommunityModeratorForm},
  traits::Joinable,
};
use commune_db_views::structs::CommunityModeratorView;
use commune_utils::error::CommuneResult;

/// Assigns the person named in the request as a moderator. The target id
/// always comes from the request body, never from anything previously
/// selected, and assigning an existing moderator again is a no-op success.
#[tracing::instrument(skip(context))]
pub async fn add_mod_to_community(
  data: Json<AddModToCommunity>,
  context: Data<CommuneContext>,
) -> CommuneResult<Json<AddModToCommunityResponse>> {
  let community_moderator_form = CommunityModeratorForm {
    community_id: data.community_id,
    person_id: data.person_id,
  };
  CommunityModerator::join(context.pool(), &community_moderator_form).await?;

  let moderators =
    CommunityModeratorView::for_community(context.pool(), data.community_id).await?;
  Ok(Json(AddModToCommunityResponse { moderators }))
}
