use actix_web::web::{Data, Json};
use commune_api_common::{context::CommuneContext, person::ListModeratorCandidatesResponse};
use commune_db_schema::{impls::person::Person_, source::person::Person};
use commune_utils::error::CommuneResult;

/// Everyone the directory marks as eligible. Filtering out the people who
/// already moderate a particular community is left to the caller.
#[tracing::instrument(skip(context))]
pub async fn list_moderator_candidates(
  context: Data<CommuneContext>,
) -> CommuneResult<Json<ListModeratorCandidatesResponse>> {
  let candidates = Person::list_moderator_candidates(context.pool()).await?;
  Ok(Json(ListModeratorCandidatesResponse { candidates }))
}
