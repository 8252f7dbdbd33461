use crate::{
  newtypes::CommunityId,
  source::community::{CommunityModerator, CommunityModeratorForm},
  traits::Joinable,
  utils::StorePool,
};
use async_trait::async_trait;
use chrono::Utc;
use commune_utils::error::CommuneResult;

#[async_trait]
impl Joinable for CommunityModerator {
  type Form = CommunityModeratorForm;

  /// Idempotent: joining a community the person already moderates returns the
  /// existing assignment and leaves the set and its count untouched.
  async fn join(pool: &StorePool, form: &CommunityModeratorForm) -> CommuneResult<Self> {
    let _guard = pool.lock_community(form.community_id).await;
    let mut tables = pool.write().await;
    let row = tables.community_mut(form.community_id)?;
    if let Some(existing) = row
      .moderators
      .iter()
      .find(|m| m.person_id == form.person_id)
    {
      return Ok(existing.clone());
    }
    let moderator = CommunityModerator {
      community_id: form.community_id,
      person_id: form.person_id,
      published: Utc::now(),
    };
    row.moderators.push(moderator.clone());
    row.counts.moderator_count = row.moderators.len() as i64;
    Ok(moderator)
  }

  /// Idempotent: leaving without being a moderator is a no-op that reports
  /// zero removed rows.
  async fn leave(pool: &StorePool, form: &CommunityModeratorForm) -> CommuneResult<usize> {
    let _guard = pool.lock_community(form.community_id).await;
    let mut tables = pool.write().await;
    let row = tables.community_mut(form.community_id)?;
    let before = row.moderators.len();
    row.moderators.retain(|m| m.person_id != form.person_id);
    row.counts.moderator_count = row.moderators.len() as i64;
    Ok(before - row.moderators.len())
  }
}

#[async_trait]
pub trait CommunityModerator_ {
  /// The moderator assignments of a community in the order they were added.
  async fn for_community(
    pool: &StorePool,
    community_id: CommunityId,
  ) -> CommuneResult<Vec<CommunityModerator>>;
}

#[async_trait]
impl CommunityModerator_ for CommunityModerator {
  async fn for_community(
    pool: &StorePool,
    community_id: CommunityId,
  ) -> CommuneResult<Vec<CommunityModerator>> {
    let tables = pool.read().await;
    Ok(tables.community(community_id)?.moderators.clone())
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    aggregates::structs::CommunityAggregates,
    impls::community_moderator::CommunityModerator_,
    newtypes::{CommunityId, PersonId},
    source::community::{
      Community, CommunityInsertForm, CommunityModerator, CommunityModeratorForm,
    },
    traits::{Crud, Joinable},
    utils::StorePool,
  };
  use commune_utils::error::{CommuneErrorType, CommuneResult};
  use pretty_assertions::assert_eq;

  async fn test_community(pool: &StorePool) -> CommuneResult<Community> {
    Community::create(
      pool,
      &CommunityInsertForm {
        name: "Demo - Tech".into(),
        description: "desc".into(),
        ..Default::default()
      },
    )
    .await
  }

  #[tokio::test]
  async fn test_add_remove_is_idempotent() -> CommuneResult<()> {
    let pool = StorePool::new();
    let community = test_community(&pool).await?;
    let form = CommunityModeratorForm {
      community_id: community.id,
      person_id: PersonId(1),
    };

    let counts = CommunityAggregates::read(&pool, community.id).await?;
    assert_eq!(counts.moderator_count, 0);

    CommunityModerator::join(&pool, &form).await?;
    let counts = CommunityAggregates::read(&pool, community.id).await?;
    assert_eq!(counts.moderator_count, 1);

    // adding the same person again changes nothing
    CommunityModerator::join(&pool, &form).await?;
    let counts = CommunityAggregates::read(&pool, community.id).await?;
    assert_eq!(counts.moderator_count, 1);

    let removed = CommunityModerator::leave(&pool, &form).await?;
    assert_eq!(removed, 1);
    let counts = CommunityAggregates::read(&pool, community.id).await?;
    assert_eq!(counts.moderator_count, 0);

    // removing a person who is not a moderator succeeds as a no-op
    let removed = CommunityModerator::leave(&pool, &form).await?;
    assert_eq!(removed, 0);
    let counts = CommunityAggregates::read(&pool, community.id).await?;
    assert_eq!(counts.moderator_count, 0);

    Ok(())
  }

  #[tokio::test]
  async fn test_unknown_community() {
    let pool = StorePool::new();
    let form = CommunityModeratorForm {
      community_id: CommunityId(999),
      person_id: PersonId(1),
    };
    let err = CommunityModerator::join(&pool, &form).await.unwrap_err();
    assert_eq!(err.error_type, CommuneErrorType::NotFound);
    let err = CommunityModerator::leave(&pool, &form).await.unwrap_err();
    assert_eq!(err.error_type, CommuneErrorType::NotFound);
  }

  #[tokio::test]
  async fn test_assignments_keep_join_order() -> CommuneResult<()> {
    let pool = StorePool::new();
    let community = test_community(&pool).await?;

    for person_id in [PersonId(3), PersonId(1), PersonId(2)] {
      CommunityModerator::join(
        &pool,
        &CommunityModeratorForm {
          community_id: community.id,
          person_id,
        },
      )
      .await?;
    }

    let assigned: Vec<PersonId> = CommunityModerator::for_community(&pool, community.id)
      .await?
      .into_iter()
      .map(|m| m.person_id)
      .collect();
    assert_eq!(assigned, vec![PersonId(3), PersonId(1), PersonId(2)]);

    Ok(())
  }

  #[tokio::test]
  async fn test_concurrent_mutations_keep_count_consistent() -> CommuneResult<()> {
    let pool = StorePool::new();
    let community = test_community(&pool).await?;

    // overlapping admins hammering the same community: every person joins
    // twice and half of them leave, from concurrent tasks
    let mut handles = Vec::new();
    for person in 1..=20 {
      for _ in 0..2 {
        let pool = pool.clone();
        let community_id = community.id;
        handles.push(tokio::spawn(async move {
          CommunityModerator::join(
            &pool,
            &CommunityModeratorForm {
              community_id,
              person_id: PersonId(person),
            },
          )
          .await
          .map(|_| ())
        }));
      }
      if person % 2 == 0 {
        let pool = pool.clone();
        let community_id = community.id;
        handles.push(tokio::spawn(async move {
          CommunityModerator::leave(
            &pool,
            &CommunityModeratorForm {
              community_id,
              person_id: PersonId(person),
            },
          )
          .await
          .map(|_| ())
        }));
      }
    }
    for handle in handles {
      handle.await??;
    }

    let moderators = CommunityModerator::for_community(&pool, community.id).await?;
    let counts = CommunityAggregates::read(&pool, community.id).await?;
    assert_eq!(counts.moderator_count, moderators.len() as i64);
    let live = CommunityAggregates::live(&pool, community.id).await?;
    assert_eq!(counts, live);

    Ok(())
  }
}
