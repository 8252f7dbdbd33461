use crate::{
  newtypes::CommunityId,
  source::community_rule::{CommunityRule, CommunityRuleInsertForm},
  utils::StorePool,
};
use async_trait::async_trait;
use commune_utils::error::CommuneResult;

impl CommunityRule {
  /// Appends a rule to a community. Rules keep their creation order.
  pub async fn create(pool: &StorePool, form: &CommunityRuleInsertForm) -> CommuneResult<Self> {
    let mut tables = pool.write().await;
    let id = tables.next_rule_id();
    let row = tables.community_mut(form.community_id)?;
    let rule = CommunityRule {
      id,
      community_id: form.community_id,
      title: form.title.clone(),
      description: form.description.clone(),
    };
    row.rules.push(rule.clone());
    Ok(rule)
  }
}

#[async_trait]
pub trait CommunityRule_ {
  async fn for_community(
    pool: &StorePool,
    community_id: CommunityId,
  ) -> CommuneResult<Vec<CommunityRule>>;
}

#[async_trait]
impl CommunityRule_ for CommunityRule {
  async fn for_community(
    pool: &StorePool,
    community_id: CommunityId,
  ) -> CommuneResult<Vec<CommunityRule>> {
    let tables = pool.read().await;
    Ok(tables.community(community_id)?.rules.clone())
  }
}
