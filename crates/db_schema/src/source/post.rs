use crate::newtypes::{CommunityId, PostId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A post, owned by a community.
pub struct Post {
  pub id: PostId,
  pub name: String,
  pub community_id: CommunityId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostInsertForm {
  pub name: String,
  pub community_id: CommunityId,
}
