use commune_db_schema::{
  newtypes::{CommunityId, PersonId},
  source::community_rule::CommunityRule,
};
use commune_db_views::structs::{CommunityModeratorView, CommunityView};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommunity {
  pub name: String,
  pub description: String,
  pub banner: Option<String>,
  pub category: Option<String>,
  #[serde(default)]
  pub rules: Vec<CreateCommunityRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommunityRule {
  pub title: String,
  #[serde(default)]
  pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditCommunity {
  pub name: Option<String>,
  pub description: Option<String>,
  /// An empty string erases the stored banner.
  pub banner: Option<String>,
  /// An empty string erases the stored category.
  pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityResponse {
  pub community_view: CommunityView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCommunityResponse {
  pub community_view: CommunityView,
  pub moderators: Vec<CommunityModeratorView>,
  pub rules: Vec<CommunityRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCommunitiesResponse {
  pub communities: Vec<CommunityView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// The target person id is a mandatory, explicit field. There is no notion of
/// a currently selected moderator anywhere behind this request.
pub struct AddModToCommunity {
  pub community_id: CommunityId,
  #[serde(rename = "moderatorId")]
  pub person_id: PersonId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddModToCommunityResponse {
  pub moderators: Vec<CommunityModeratorView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveModFromCommunity {
  pub community_id: CommunityId,
  #[serde(rename = "moderatorId")]
  pub person_id: PersonId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveModFromCommunityResponse {
  pub moderators: Vec<CommunityModeratorView>,
}
