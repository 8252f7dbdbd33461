use actix_web::web::{Data, Json, Path};
use commune_api_common::{
  community::{CommunityResponse, EditCommunity},
  context::CommuneContext,
};
use commune_db_schema::{
  newtypes::CommunityId,
  source::community::{Community, CommunityUpdateForm},
  traits::Crud,
};
use commune_db_views::structs::CommunityView;
use commune_utils::{
  error::CommuneResult,
  validation::{is_valid_community_description, is_valid_community_name, option_url_overwrite},
};

/// Applies only the supplied fields. Concurrent updates of the same community
/// are last-write-wins per field; there is no conflict detection.
#[tracing::instrument(skip(context))]
pub async fn update_community(
  path: Path<CommunityId>,
  data: Json<EditCommunity>,
  context: Data<CommuneContext>,
) -> CommuneResult<Json<CommunityResponse>> {
  let community_id = path.into_inner();
  if let Some(name) = &data.name {
    is_valid_community_name(name)?;
  }
  if let Some(description) = &data.description {
    is_valid_community_description(description)?;
  }
  let banner = option_url_overwrite(&data.banner)?;
  let category = match data.category.as_deref() {
    // an empty string is an erase
    Some("") => Some(None),
    Some(category) => Some(Some(category.to_string())),
    None => None,
  };

  let community_form = CommunityUpdateForm {
    name: data.name.clone(),
    description: data.description.clone(),
    banner,
    category,
  };
  let updated_community = Community::update(context.pool(), community_id, &community_form).await?;

  let community_view = CommunityView::read(context.pool(), updated_community.id).await?;
  Ok(Json(CommunityResponse { community_view }))
}
