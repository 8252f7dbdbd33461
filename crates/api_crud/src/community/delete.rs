use crate::community::cascade::CommunityCascade;
use actix_web::web::{Data, Json, Path};
use commune_api_common::{context::CommuneContext, SuccessResponse};
use commune_db_schema::newtypes::CommunityId;
use commune_utils::error::{CommuneErrorExt, CommuneErrorType, CommuneResult};

#[tracing::instrument(skip(context))]
pub async fn delete_community(
  path: Path<CommunityId>,
  context: Data<CommuneContext>,
) -> CommuneResult<Json<SuccessResponse>> {
  let community_id = path.into_inner();
  let pool = context.pool().clone();

  // The cascade runs on its own task: a caller disconnecting mid-delete must
  // not leave it half-driven with no recorded outcome.
  let cascade = tokio::spawn(async move {
    let mut cascade = CommunityCascade::new(community_id);
    cascade.run(&pool).await
  });

  match tokio::time::timeout(context.settings().deletion_timeout(), cascade).await {
    Ok(Ok(result)) => result?,
    Ok(Err(join_error)) => {
      return Err(join_error).with_commune_type(CommuneErrorType::CouldntDeleteCommunity)
    }
    Err(_elapsed) => return Err(CommuneErrorType::CouldntDeleteCommunity.into()),
  }

  Ok(Json(SuccessResponse::default()))
}
