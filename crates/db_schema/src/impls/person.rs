use crate::{
  newtypes::PersonId,
  source::person::{Person, PersonInsertForm},
  traits::Crud,
  utils::StorePool,
};
use async_trait::async_trait;
use chrono::Utc;
use commune_utils::error::{CommuneErrorType, CommuneResult};

#[async_trait]
impl Crud for Person {
  type InsertForm = PersonInsertForm;
  type UpdateForm = PersonInsertForm;
  type IdType = PersonId;

  async fn create(pool: &StorePool, form: &PersonInsertForm) -> CommuneResult<Self> {
    let mut tables = pool.write().await;
    let id = tables.next_person_id();
    let person = Person {
      id,
      name: form.name.clone(),
      display_name: form.display_name.clone(),
      moderator: form.moderator,
      published: Utc::now(),
    };
    tables.persons.insert(id, person.clone());
    Ok(person)
  }

  async fn read(pool: &StorePool, person_id: PersonId) -> CommuneResult<Self> {
    let tables = pool.read().await;
    tables
      .persons
      .get(&person_id)
      .cloned()
      .ok_or_else(|| CommuneErrorType::NotFound.into())
  }
}

#[async_trait]
pub trait Person_ {
  /// Everyone the directory marks as eligible to moderate, in directory
  /// order. No per-community filtering happens here.
  async fn list_moderator_candidates(pool: &StorePool) -> CommuneResult<Vec<Person>>;
}

#[async_trait]
impl Person_ for Person {
  async fn list_moderator_candidates(pool: &StorePool) -> CommuneResult<Vec<Person>> {
    let tables = pool.read().await;
    Ok(
      tables
        .persons
        .values()
        .filter(|person| person.moderator)
        .cloned()
        .collect(),
    )
  }
}
