use crate::utils::StorePool;
use async_trait::async_trait;
use commune_utils::error::{CommuneErrorType, CommuneResult};

#[async_trait]
pub trait Crud {
  type InsertForm;
  type UpdateForm;
  type IdType;
  async fn create(pool: &StorePool, form: &Self::InsertForm) -> CommuneResult<Self>
  where
    Self: Sized;
  async fn read(pool: &StorePool, id: Self::IdType) -> CommuneResult<Self>
  where
    Self: Sized;
  /// when you want to null out a column, you have to send Some(None), since
  /// sending None means you just don't want to update that column
  async fn update(
    _pool: &StorePool,
    _id: Self::IdType,
    _form: &Self::UpdateForm,
  ) -> CommuneResult<Self>
  where
    Self: Sized,
    Self::IdType: Send + Sync,
    Self::UpdateForm: Sync,
  {
    Err(CommuneErrorType::NotFound.into())
  }
  async fn delete(_pool: &StorePool, _id: Self::IdType) -> CommuneResult<usize>
  where
    Self: Sized,
    Self::IdType: Send + Sync,
  {
    Err(CommuneErrorType::NotFound.into())
  }
}

#[async_trait]
pub trait Joinable {
  type Form;
  async fn join(pool: &StorePool, form: &Self::Form) -> CommuneResult<Self>
  where
    Self: Sized;
  async fn leave(pool: &StorePool, form: &Self::Form) -> CommuneResult<usize>
  where
    Self: Sized;
}
