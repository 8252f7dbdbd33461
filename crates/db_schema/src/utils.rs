use crate::{
  aggregates::structs::CommunityAggregates,
  newtypes::{CommentId, CommunityId, CommunityRuleId, PersonId, PostId},
  source::{
    comment::Comment,
    community::{Community, CommunityMember, CommunityModerator},
    community_rule::CommunityRule,
    person::Person,
    post::Post,
  },
};
use commune_utils::error::{CommuneErrorType, CommuneResult};
use std::{
  collections::{BTreeMap, HashMap},
  sync::{Arc, Mutex as StdMutex},
};
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A cloneable handle to the store. Every operation on it is async and may
/// suspend, like any other persistence call.
#[derive(Clone, Default)]
pub struct StorePool {
  store: Arc<Store>,
}

#[derive(Default)]
struct Store {
  tables: RwLock<Tables>,
  community_locks: StdMutex<HashMap<CommunityId, Arc<Mutex<()>>>>,
}

impl StorePool {
  pub fn new() -> Self {
    Self::default()
  }

  pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
    self.store.tables.read().await
  }

  pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
    self.store.tables.write().await
  }

  /// Critical section scoped to one community. Mutations of a community's
  /// member or moderator set must hold this guard so the set and its count
  /// are written together. Acquire it before the table lock, never after.
  pub(crate) async fn lock_community(&self, community_id: CommunityId) -> OwnedMutexGuard<()> {
    let lock = {
      let mut locks = self
        .store
        .community_locks
        .lock()
        .expect("community lock registry poisoned");
      locks.entry(community_id).or_default().clone()
    };
    lock.lock_owned().await
  }

  pub(crate) fn remove_community_lock(&self, community_id: CommunityId) {
    let mut locks = self
      .store
      .community_locks
      .lock()
      .expect("community lock registry poisoned");
    locks.remove(&community_id);
  }
}

/// One community record with everything the community owns.
pub(crate) struct CommunityRow {
  pub community: Community,
  pub members: Vec<CommunityMember>,
  pub moderators: Vec<CommunityModerator>,
  pub rules: Vec<CommunityRule>,
  pub counts: CommunityAggregates,
}

impl CommunityRow {
  pub(crate) fn new(community: Community) -> Self {
    let counts = CommunityAggregates {
      community_id: community.id,
      member_count: 0,
      moderator_count: 0,
    };
    CommunityRow {
      community,
      members: Vec::new(),
      moderators: Vec::new(),
      rules: Vec::new(),
      counts,
    }
  }
}

#[derive(Default)]
pub(crate) struct Tables {
  next_community_id: i32,
  next_person_id: i32,
  next_post_id: i32,
  next_comment_id: i32,
  next_rule_id: i32,
  pub(crate) communities: BTreeMap<CommunityId, CommunityRow>,
  pub(crate) persons: BTreeMap<PersonId, Person>,
  pub(crate) posts: BTreeMap<PostId, Post>,
  pub(crate) comments: BTreeMap<CommentId, Comment>,
}

impl Tables {
  pub(crate) fn next_community_id(&mut self) -> CommunityId {
    self.next_community_id += 1;
    CommunityId(self.next_community_id)
  }

  pub(crate) fn next_person_id(&mut self) -> PersonId {
    self.next_person_id += 1;
    PersonId(self.next_person_id)
  }

  pub(crate) fn next_post_id(&mut self) -> PostId {
    self.next_post_id += 1;
    PostId(self.next_post_id)
  }

  pub(crate) fn next_comment_id(&mut self) -> CommentId {
    self.next_comment_id += 1;
    CommentId(self.next_comment_id)
  }

  pub(crate) fn next_rule_id(&mut self) -> CommunityRuleId {
    self.next_rule_id += 1;
    CommunityRuleId(self.next_rule_id)
  }

  pub(crate) fn community(&self, community_id: CommunityId) -> CommuneResult<&CommunityRow> {
    self
      .communities
      .get(&community_id)
      .ok_or_else(|| CommuneErrorType::NotFound.into())
  }

  pub(crate) fn community_mut(
    &mut self,
    community_id: CommunityId,
  ) -> CommuneResult<&mut CommunityRow> {
    self
      .communities
      .get_mut(&community_id)
      .ok_or_else(|| CommuneErrorType::NotFound.into())
  }
}
