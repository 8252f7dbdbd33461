use actix_web::web::{Data, Json};
use commune_api_common::{
  community::{RemoveModFromCommunity, RemoveModFromCommunityResponse},
  context::CommuneContext,
};
use commune_db_schema::{
  source::community::{CommunityModerator, CommunityModeratorForm},
  traits::Joinable,
};
use commune_db_views::structs::CommunityModeratorView;
use commune_utils::error::CommuneResult;

/// Removes the person named in the request from the moderator set. Removing
/// someone who is not a moderator succeeds as a no-op, since another admin
/// may have removed them first.
#[tracing::instrument(skip(context))]
pub async fn remove_mod_from_community(
  data: Json<RemoveModFromCommunity>,
  context: Data<CommuneContext>,
) -> CommuneResult<Json<RemoveModFromCommunityResponse>> {
  let community_moderator_form = CommunityModeratorForm {
    community_id: data.community_id,
    person_id: data.person_id,
  };
  CommunityModerator::leave(context.pool(), &community_moderator_form).await?;

  let moderators =
    CommunityModeratorView::for_community(context.pool(), data.community_id).await?;
  Ok(Json(RemoveModFromCommunityResponse { moderators }))
}
