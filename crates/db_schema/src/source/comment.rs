use crate::newtypes::{CommentId, PostId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A comment on a post. Comments are owned by their post, so removing a post
/// removes its comments.
pub struct Comment {
  pub id: CommentId,
  pub content: String,
  pub post_id: PostId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommentInsertForm {
  pub content: String,
  pub post_id: PostId,
}
