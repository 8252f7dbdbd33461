use crate::{
  newtypes::{CommunityId, PostId},
  source::post::{Post, PostInsertForm},
  traits::Crud,
  utils::StorePool,
};
use async_trait::async_trait;
use chrono::Utc;
use commune_utils::error::{CommuneErrorType, CommuneResult};

#[async_trait]
impl Crud for Post {
  type InsertForm = PostInsertForm;
  type UpdateForm = PostInsertForm;
  type IdType = PostId;

  async fn create(pool: &StorePool, form: &PostInsertForm) -> CommuneResult<Self> {
    let mut tables = pool.write().await;
    tables.community(form.community_id)?;
    let id = tables.next_post_id();
    let post = Post {
      id,
      name: form.name.clone(),
      community_id: form.community_id,
      published: Utc::now(),
    };
    tables.posts.insert(id, post.clone());
    Ok(post)
  }

  async fn read(pool: &StorePool, post_id: PostId) -> CommuneResult<Self> {
    let tables = pool.read().await;
    tables
      .posts
      .get(&post_id)
      .cloned()
      .ok_or_else(|| CommuneErrorType::NotFound.into())
  }

  async fn delete(pool: &StorePool, post_id: PostId) -> CommuneResult<usize> {
    let mut tables = pool.write().await;
    let removed = usize::from(tables.posts.remove(&post_id).is_some());
    if removed > 0 {
      // comments live and die with their post
      tables.comments.retain(|_, comment| comment.post_id != post_id);
    }
    Ok(removed)
  }
}

#[async_trait]
pub trait Post_ {
  /// Removes every post a community owns, and with each post its comments.
  /// Returns the number of posts removed.
  async fn delete_for_community(
    pool: &StorePool,
    for_community_id: CommunityId,
  ) -> CommuneResult<usize>;
  async fn list_for_community(
    pool: &StorePool,
    for_community_id: CommunityId,
  ) -> CommuneResult<Vec<Post>>;
}

#[async_trait]
impl Post_ for Post {
  async fn delete_for_community(
    pool: &StorePool,
    for_community_id: CommunityId,
  ) -> CommuneResult<usize> {
    let mut tables = pool.write().await;
    let post_ids: Vec<PostId> = tables
      .posts
      .values()
      .filter(|post| post.community_id == for_community_id)
      .map(|post| post.id)
      .collect();
    // comment removal is driven by post removal, not by the community id
    tables
      .comments
      .retain(|_, comment| !post_ids.contains(&comment.post_id));
    for post_id in &post_ids {
      tables.posts.remove(post_id);
    }
    Ok(post_ids.len())
  }

  async fn list_for_community(
    pool: &StorePool,
    for_community_id: CommunityId,
  ) -> CommuneResult<Vec<Post>> {
    let tables = pool.read().await;
    Ok(
      tables
        .posts
        .values()
        .filter(|post| post.community_id == for_community_id)
        .cloned()
        .collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    impls::post::Post_,
    newtypes::CommunityId,
    source::{
      comment::{Comment, CommentInsertForm},
      community::{Community, CommunityInsertForm},
      post::{Post, PostInsertForm},
    },
    traits::Crud,
    utils::StorePool,
  };
  use commune_utils::error::{CommuneErrorType, CommuneResult};
  use pretty_assertions::assert_eq;

  #[tokio::test]
  async fn test_post_requires_community() {
    let pool = StorePool::new();
    let err = Post::create(
      &pool,
      &PostInsertForm {
        name: "into the void".into(),
        community_id: CommunityId(42),
      },
    )
    .await
    .unwrap_err();
    assert_eq!(err.error_type, CommuneErrorType::NotFound);
  }

  #[tokio::test]
  async fn test_delete_for_community_takes_comments_along() -> CommuneResult<()> {
    let pool = StorePool::new();
    let community = Community::create(
      &pool,
      &CommunityInsertForm {
        name: "cooking".into(),
        description: "stir it".into(),
        ..Default::default()
      },
    )
    .await?;
    let other = Community::create(
      &pool,
      &CommunityInsertForm {
        name: "baking".into(),
        description: "knead it".into(),
        ..Default::default()
      },
    )
    .await?;

    let mut post_ids = Vec::new();
    for name in ["sourdough", "stew", "salad"] {
      let post = Post::create(
        &pool,
        &PostInsertForm {
          name: name.into(),
          community_id: community.id,
        },
      )
      .await?;
      let comment = Comment::create(
        &pool,
        &CommentInsertForm {
          content: format!("nice {name}"),
          post_id: post.id,
        },
      )
      .await?;
      post_ids.push((post.id, comment.id));
    }
    let survivor_post = Post::create(
      &pool,
      &PostInsertForm {
        name: "pretzels".into(),
        community_id: other.id,
      },
    )
    .await?;

    let removed = Post::delete_for_community(&pool, community.id).await?;
    assert_eq!(removed, 3);

    for (post_id, comment_id) in post_ids {
      let err = Post::read(&pool, post_id).await.unwrap_err();
      assert_eq!(err.error_type, CommuneErrorType::NotFound);
      let err = Comment::read(&pool, comment_id).await.unwrap_err();
      assert_eq!(err.error_type, CommuneErrorType::NotFound);
    }
    // content of other communities is untouched
    Post::read(&pool, survivor_post.id).await?;

    Ok(())
  }
}
