use crate::newtypes::{CommunityId, PersonId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A community.
pub struct Community {
  pub id: CommunityId,
  /// Unique among all communities, matched exactly.
  pub name: String,
  pub description: String,
  /// A url to a banner image, stored as given and never fetched.
  pub banner: Option<Url>,
  /// An optional free-form classifier.
  pub category: Option<String>,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct CommunityInsertForm {
  pub name: String,
  pub description: String,
  pub banner: Option<Url>,
  pub category: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CommunityUpdateForm {
  pub name: Option<String>,
  pub description: Option<String>,
  pub banner: Option<Option<Url>>,
  pub category: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A person moderating a community.
pub struct CommunityModerator {
  pub community_id: CommunityId,
  pub person_id: PersonId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommunityModeratorForm {
  pub community_id: CommunityId,
  pub person_id: PersonId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A person belonging to a community.
pub struct CommunityMember {
  pub community_id: CommunityId,
  pub person_id: PersonId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommunityMemberForm {
  pub community_id: CommunityId,
  pub person_id: PersonId,
}
