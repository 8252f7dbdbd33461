use actix_web::web::{Data, Json};
use commune_api_common::{
  community::{CommunityResponse, CreateCommunity},
  context::CommuneContext,
};
use commune_db_schema::{
  impls::community::Community_,
  source::{
    community::{Community, CommunityInsertForm},
    community_rule::{CommunityRule, CommunityRuleInsertForm},
  },
  traits::Crud,
};
use commune_db_views::structs::CommunityView;
use commune_utils::{
  error::{CommuneErrorType, CommuneResult},
  validation::{is_valid_community_description, is_valid_community_name, option_url_overwrite},
};

#[tracing::instrument(skip(context))]
pub async fn create_community(
  data: Json<CreateCommunity>,
  context: Data<CommuneContext>,
) -> CommuneResult<Json<CommunityResponse>> {
  is_valid_community_name(&data.name)?;
  is_valid_community_description(&data.description)?;
  let banner = option_url_overwrite(&data.banner)?.flatten();
  let category = data.category.clone().filter(|c| !c.trim().is_empty());
  for rule in &data.rules {
    if rule.title.trim().is_empty() {
      return Err(CommuneErrorType::CommunityRuleTitleRequired.into());
    }
  }

  // Double check for a duplicate name; the store enforces it again on insert
  if Community::read_from_name(context.pool(), &data.name)
    .await
    .is_ok()
  {
    return Err(CommuneErrorType::CommunityAlreadyExists.into());
  }

  let community_form = CommunityInsertForm {
    name: data.name.clone(),
    description: data.description.clone(),
    banner,
    category,
  };
  let inserted_community = Community::create(context.pool(), &community_form).await?;

  for rule in &data.rules {
    CommunityRule::create(
      context.pool(),
      &CommunityRuleInsertForm {
        community_id: inserted_community.id,
        title: rule.title.clone(),
        description: rule.description.clone(),
      },
    )
    .await?;
  }

  let community_view = CommunityView::read(context.pool(), inserted_community.id).await?;
  Ok(Json(CommunityResponse { community_view }))
}
