use crate::{
  source::community::{CommunityMember, CommunityMemberForm},
  traits::Joinable,
  utils::StorePool,
};
use async_trait::async_trait;
use chrono::Utc;
use commune_utils::error::CommuneResult;

#[async_trait]
impl Joinable for CommunityMember {
  type Form = CommunityMemberForm;

  async fn join(pool: &StorePool, form: &CommunityMemberForm) -> CommuneResult<Self> {
    let _guard = pool.lock_community(form.community_id).await;
    let mut tables = pool.write().await;
    let row = tables.community_mut(form.community_id)?;
    if let Some(existing) = row.members.iter().find(|m| m.person_id == form.person_id) {
      return Ok(existing.clone());
    }
    let member = CommunityMember {
      community_id: form.community_id,
      person_id: form.person_id,
      published: Utc::now(),
    };
    row.members.push(member.clone());
    row.counts.member_count = row.members.len() as i64;
    Ok(member)
  }

  async fn leave(pool: &StorePool, form: &CommunityMemberForm) -> CommuneResult<usize> {
    let _guard = pool.lock_community(form.community_id).await;
    let mut tables = pool.write().await;
    let row = tables.community_mut(form.community_id)?;
    let before = row.members.len();
    row.members.retain(|m| m.person_id != form.person_id);
    row.counts.member_count = row.members.len() as i64;
    Ok(before - row.members.len())
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    aggregates::structs::CommunityAggregates,
    newtypes::PersonId,
    source::community::{Community, CommunityInsertForm, CommunityMember, CommunityMemberForm},
    traits::{Crud, Joinable},
    utils::StorePool,
  };
  use commune_utils::error::CommuneResult;
  use pretty_assertions::assert_eq;

  #[tokio::test]
  async fn test_membership_counts() -> CommuneResult<()> {
    let pool = StorePool::new();
    let community = Community::create(
      &pool,
      &CommunityInsertForm {
        name: "gardening".into(),
        description: "it grows".into(),
        ..Default::default()
      },
    )
    .await?;

    for person in 1..=3 {
      CommunityMember::join(
        &pool,
        &CommunityMemberForm {
          community_id: community.id,
          person_id: PersonId(person),
        },
      )
      .await?;
    }
    // joining twice does not double-count
    CommunityMember::join(
      &pool,
      &CommunityMemberForm {
        community_id: community.id,
        person_id: PersonId(1),
      },
    )
    .await?;

    let counts = CommunityAggregates::read(&pool, community.id).await?;
    assert_eq!(counts.member_count, 3);

    let removed = CommunityMember::leave(
      &pool,
      &CommunityMemberForm {
        community_id: community.id,
        person_id: PersonId(2),
      },
    )
    .await?;
    assert_eq!(removed, 1);
    let counts = CommunityAggregates::read(&pool, community.id).await?;
    assert_eq!(counts.member_count, 2);

    Ok(())
  }
}
