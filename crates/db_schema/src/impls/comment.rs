use crate::{
  newtypes::CommentId,
  source::comment::{Comment, CommentInsertForm},
  traits::Crud,
  utils::StorePool,
};
use async_trait::async_trait;
use chrono::Utc;
use commune_utils::error::{CommuneErrorType, CommuneResult};

#[async_trait]
impl Crud for Comment {
  type InsertForm = CommentInsertForm;
  type UpdateForm = CommentInsertForm;
  type IdType = CommentId;

  async fn create(pool: &StorePool, form: &CommentInsertForm) -> CommuneResult<Self> {
    let mut tables = pool.write().await;
    if !tables.posts.contains_key(&form.post_id) {
      return Err(CommuneErrorType::NotFound.into());
    }
    let id = tables.next_comment_id();
    let comment = Comment {
      id,
      content: form.content.clone(),
      post_id: form.post_id,
      published: Utc::now(),
    };
    tables.comments.insert(id, comment.clone());
    Ok(comment)
  }

  async fn read(pool: &StorePool, comment_id: CommentId) -> CommuneResult<Self> {
    let tables = pool.read().await;
    tables
      .comments
      .get(&comment_id)
      .cloned()
      .ok_or_else(|| CommuneErrorType::NotFound.into())
  }

  async fn delete(pool: &StorePool, comment_id: CommentId) -> CommuneResult<usize> {
    let mut tables = pool.write().await;
    Ok(usize::from(tables.comments.remove(&comment_id).is_some()))
  }
}
