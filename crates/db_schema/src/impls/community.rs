use crate::{
  newtypes::CommunityId,
  source::community::{Community, CommunityInsertForm, CommunityUpdateForm},
  traits::Crud,
  utils::{CommunityRow, StorePool},
};
use async_trait::async_trait;
use chrono::Utc;
use commune_utils::error::{CommuneErrorType, CommuneResult};

#[async_trait]
impl Crud for Community {
  type InsertForm = CommunityInsertForm;
  type UpdateForm = CommunityUpdateForm;
  type IdType = CommunityId;

  async fn create(pool: &StorePool, form: &CommunityInsertForm) -> CommuneResult<Self> {
    let mut tables = pool.write().await;
    // names are unique among all communities, matched exactly
    if tables
      .communities
      .values()
      .any(|row| row.community.name == form.name)
    {
      return Err(CommuneErrorType::CommunityAlreadyExists.into());
    }
    let id = tables.next_community_id();
    let community = Community {
      id,
      name: form.name.clone(),
      description: form.description.clone(),
      banner: form.banner.clone(),
      category: form.category.clone(),
      published: Utc::now(),
      updated: None,
    };
    tables.communities.insert(id, CommunityRow::new(community.clone()));
    Ok(community)
  }

  async fn read(pool: &StorePool, community_id: CommunityId) -> CommuneResult<Self> {
    let tables = pool.read().await;
    Ok(tables.community(community_id)?.community.clone())
  }

  async fn update(
    pool: &StorePool,
    community_id: CommunityId,
    form: &CommunityUpdateForm,
  ) -> CommuneResult<Self> {
    let mut tables = pool.write().await;
    if let Some(name) = &form.name {
      if tables
        .communities
        .values()
        .any(|row| row.community.name == *name && row.community.id != community_id)
      {
        return Err(CommuneErrorType::CommunityAlreadyExists.into());
      }
    }
    let row = tables.community_mut(community_id)?;
    if let Some(name) = &form.name {
      row.community.name = name.clone();
    }
    if let Some(description) = &form.description {
      row.community.description = description.clone();
    }
    if let Some(banner) = &form.banner {
      row.community.banner = banner.clone();
    }
    if let Some(category) = &form.category {
      row.community.category = category.clone();
    }
    row.community.updated = Some(Utc::now());
    Ok(row.community.clone())
  }

  async fn delete(pool: &StorePool, community_id: CommunityId) -> CommuneResult<usize> {
    let mut tables = pool.write().await;
    let removed = usize::from(tables.communities.remove(&community_id).is_some());
    drop(tables);
    pool.remove_community_lock(community_id);
    Ok(removed)
  }
}

#[async_trait]
pub trait Community_ {
  async fn read_from_name(pool: &StorePool, community_name: &str) -> CommuneResult<Community>;
  /// All communities in creation order.
  async fn list(pool: &StorePool) -> CommuneResult<Vec<Community>>;
  /// Clears the member and moderator sets and the rules, resetting both
  /// counts to zero in the same critical section.
  async fn clear_links(pool: &StorePool, community_id: CommunityId) -> CommuneResult<()>;
}

#[async_trait]
impl Community_ for Community {
  async fn read_from_name(pool: &StorePool, community_name: &str) -> CommuneResult<Community> {
    let tables = pool.read().await;
    tables
      .communities
      .values()
      .find(|row| row.community.name == community_name)
      .map(|row| row.community.clone())
      .ok_or_else(|| CommuneErrorType::NotFound.into())
  }

  async fn list(pool: &StorePool) -> CommuneResult<Vec<Community>> {
    let tables = pool.read().await;
    Ok(
      tables
        .communities
        .values()
        .map(|row| row.community.clone())
        .collect(),
    )
  }

  async fn clear_links(pool: &StorePool, community_id: CommunityId) -> CommuneResult<()> {
    let _guard = pool.lock_community(community_id).await;
    let mut tables = pool.write().await;
    let row = tables.community_mut(community_id)?;
    row.members.clear();
    row.moderators.clear();
    row.rules.clear();
    row.counts.member_count = 0;
    row.counts.moderator_count = 0;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    impls::community::Community_,
    source::community::{Community, CommunityInsertForm, CommunityUpdateForm},
    traits::Crud,
    utils::StorePool,
  };
  use commune_utils::error::{CommuneErrorType, CommuneResult};
  use pretty_assertions::assert_eq;
  use url::Url;

  #[tokio::test]
  async fn test_crud() -> CommuneResult<()> {
    let pool = StorePool::new();

    let inserted_community = Community::create(
      &pool,
      &CommunityInsertForm {
        name: "TIL".into(),
        description: "things you learned today".into(),
        ..Default::default()
      },
    )
    .await?;
    assert_eq!(inserted_community.name, "TIL");
    assert_eq!(inserted_community.banner, None);
    assert_eq!(inserted_community.updated, None);

    let read_community = Community::read(&pool, inserted_community.id).await?;
    assert_eq!(inserted_community, read_community);

    let banner = Url::parse("https://example.com/banner.png")?;
    let updated_community = Community::update(
      &pool,
      inserted_community.id,
      &CommunityUpdateForm {
        description: Some("today I learned".into()),
        banner: Some(Some(banner.clone())),
        ..Default::default()
      },
    )
    .await?;
    // unset fields are left alone
    assert_eq!(updated_community.name, "TIL");
    assert_eq!(updated_community.description, "today I learned");
    assert_eq!(updated_community.banner, Some(banner));
    assert!(updated_community.updated.is_some());

    // Some(None) erases a stored value
    let updated_community = Community::update(
      &pool,
      inserted_community.id,
      &CommunityUpdateForm {
        banner: Some(None),
        ..Default::default()
      },
    )
    .await?;
    assert_eq!(updated_community.banner, None);

    let num_deleted = Community::delete(&pool, inserted_community.id).await?;
    assert_eq!(num_deleted, 1);
    let not_found = Community::read(&pool, inserted_community.id).await;
    assert_eq!(not_found.unwrap_err().error_type, CommuneErrorType::NotFound);

    Ok(())
  }

  #[tokio::test]
  async fn test_duplicate_names_rejected() -> CommuneResult<()> {
    let pool = StorePool::new();

    let first = Community::create(
      &pool,
      &CommunityInsertForm {
        name: "Demo - Tech".into(),
        description: "desc".into(),
        ..Default::default()
      },
    )
    .await?;

    let duplicate = Community::create(
      &pool,
      &CommunityInsertForm {
        name: "Demo - Tech".into(),
        description: "another desc".into(),
        ..Default::default()
      },
    )
    .await;
    assert_eq!(
      duplicate.unwrap_err().error_type,
      CommuneErrorType::CommunityAlreadyExists
    );

    // matching is exact, a different case is a different name
    Community::create(
      &pool,
      &CommunityInsertForm {
        name: "demo - tech".into(),
        description: "desc".into(),
        ..Default::default()
      },
    )
    .await?;

    // the first community is unaffected
    let read_first = Community::read(&pool, first.id).await?;
    assert_eq!(read_first, first);

    // renaming onto another community's name is rejected too
    let other = Community::create(
      &pool,
      &CommunityInsertForm {
        name: "Demo - Art".into(),
        description: "desc".into(),
        ..Default::default()
      },
    )
    .await?;
    let renamed = Community::update(
      &pool,
      other.id,
      &CommunityUpdateForm {
        name: Some("Demo - Tech".into()),
        ..Default::default()
      },
    )
    .await;
    assert_eq!(
      renamed.unwrap_err().error_type,
      CommuneErrorType::CommunityAlreadyExists
    );
    // while a no-op rename to its own name is fine
    Community::update(
      &pool,
      other.id,
      &CommunityUpdateForm {
        name: Some("Demo - Art".into()),
        ..Default::default()
      },
    )
    .await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_list_is_in_creation_order() -> CommuneResult<()> {
    let pool = StorePool::new();

    for name in ["first", "second", "third"] {
      Community::create(
        &pool,
        &CommunityInsertForm {
          name: name.into(),
          description: "desc".into(),
          ..Default::default()
        },
      )
      .await?;
    }

    let names: Vec<String> = Community::list(&pool)
      .await?
      .into_iter()
      .map(|c| c.name)
      .collect();
    assert_eq!(names, vec!["first", "second", "third"]);

    Ok(())
  }
}
