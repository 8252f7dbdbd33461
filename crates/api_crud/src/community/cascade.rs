use commune_db_schema::{
  impls::{community::Community_, post::Post_},
  newtypes::CommunityId,
  source::{community::Community, post::Post},
  traits::Crud,
  utils::StorePool,
};
use commune_utils::error::{CommuneErrorExt2, CommuneErrorType, CommuneResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeState {
  Requested,
  ContentPurging,
  LinksCleared,
  Deleted,
  Aborted,
}

/// Drives a community deletion to a terminal state. Content goes first, then
/// the community's own links, and the record itself last, so an abort at any
/// step leaves the record in place. Callers see a single error for any
/// mid-sequence failure; the step that failed is only logged.
pub struct CommunityCascade {
  community_id: CommunityId,
  state: CascadeState,
}

impl CommunityCascade {
  pub fn new(community_id: CommunityId) -> Self {
    CommunityCascade {
      community_id,
      state: CascadeState::Requested,
    }
  }

  pub fn state(&self) -> CascadeState {
    self.state
  }

  pub async fn run(&mut self, pool: &StorePool) -> CommuneResult<()> {
    match self.drive(pool).await {
      Ok(()) => Ok(()),
      Err(e) => {
        tracing::warn!(
          community_id = %self.community_id,
          state = ?self.state,
          error = %e.error_type,
          "community deletion aborted"
        );
        self.state = CascadeState::Aborted;
        Err(e)
      }
    }
  }

  async fn drive(&mut self, pool: &StorePool) -> CommuneResult<()> {
    Community::read(pool, self.community_id).await?;

    self.transition(CascadeState::ContentPurging);
    let purged_posts = Post::delete_for_community(pool, self.community_id)
      .await
      .with_commune_type(CommuneErrorType::CouldntDeleteCommunity)?;

    self.transition(CascadeState::LinksCleared);
    Community::clear_links(pool, self.community_id)
      .await
      .with_commune_type(CommuneErrorType::CouldntDeleteCommunity)?;

    self.transition(CascadeState::Deleted);
    let deleted = Community::delete(pool, self.community_id)
      .await
      .with_commune_type(CommuneErrorType::CouldntDeleteCommunity)?;
    if deleted == 0 {
      // another admin's deletion got there first
      return Err(CommuneErrorType::CouldntDeleteCommunity.into());
    }

    tracing::debug!(
      community_id = %self.community_id,
      purged_posts,
      "community deleted"
    );
    Ok(())
  }

  fn transition(&mut self, next: CascadeState) {
    tracing::debug!(
      community_id = %self.community_id,
      from = ?self.state,
      to = ?next,
      "cascade transition"
    );
    self.state = next;
  }
}

#[cfg(test)]
mod tests {
  use super::{CascadeState, CommunityCascade};
  use commune_db_schema::{
    newtypes::CommunityId,
    source::community::{Community, CommunityInsertForm},
    traits::Crud,
    utils::StorePool,
  };
  use commune_utils::error::{CommuneErrorType, CommuneResult};
  use pretty_assertions::assert_eq;

  #[tokio::test]
  async fn test_missing_community_aborts_with_not_found() {
    let pool = StorePool::new();
    let mut cascade = CommunityCascade::new(CommunityId(12));
    let err = cascade.run(&pool).await.unwrap_err();
    assert_eq!(err.error_type, CommuneErrorType::NotFound);
    assert_eq!(cascade.state(), CascadeState::Aborted);
  }

  #[tokio::test]
  async fn test_successful_run_ends_deleted() -> CommuneResult<()> {
    let pool = StorePool::new();
    let community = Community::create(
      &pool,
      &CommunityInsertForm {
        name: "ephemeral".into(),
        description: "soon gone".into(),
        ..Default::default()
      },
    )
    .await?;

    let mut cascade = CommunityCascade::new(community.id);
    cascade.run(&pool).await?;
    assert_eq!(cascade.state(), CascadeState::Deleted);

    let err = Community::read(&pool, community.id).await.unwrap_err();
    assert_eq!(err.error_type, CommuneErrorType::NotFound);

    // a second cascade for the same id aborts in the existence check
    let mut second = CommunityCascade::new(community.id);
    let err = second.run(&pool).await.unwrap_err();
    assert_eq!(err.error_type, CommuneErrorType::NotFound);
    assert_eq!(second.state(), CascadeState::Aborted);

    Ok(())
  }
}
