use actix_web::web::{Data, Json};
use commune_api_common::{community::ListCommunitiesResponse, context::CommuneContext};
use commune_db_views::structs::CommunityView;
use commune_utils::error::CommuneResult;

#[tracing::instrument(skip(context))]
pub async fn list_communities(
  context: Data<CommuneContext>,
) -> CommuneResult<Json<ListCommunitiesResponse>> {
  let communities = CommunityView::list(context.pool()).await?;
  Ok(Json(ListCommunitiesResponse { communities }))
}
