use actix_web::web::{Data, Json, Path};
use commune_api_common::{community::GetCommunityResponse, context::CommuneContext};
use commune_db_schema::{
  impls::community_rule::CommunityRule_, newtypes::CommunityId,
  source::community_rule::CommunityRule,
};
use commune_db_views::structs::{CommunityModeratorView, CommunityView};
use commune_utils::error::CommuneResult;

#[tracing::instrument(skip(context))]
pub async fn get_community(
  path: Path<CommunityId>,
  context: Data<CommuneContext>,
) -> CommuneResult<Json<GetCommunityResponse>> {
  let community_id = path.into_inner();
  let community_view = CommunityView::read(context.pool(), community_id).await?;
  let moderators = CommunityModeratorView::for_community(context.pool(), community_id).await?;
  let rules = CommunityRule::for_community(context.pool(), community_id).await?;
  Ok(Json(GetCommunityResponse {
    community_view,
    moderators,
    rules,
  }))
}
