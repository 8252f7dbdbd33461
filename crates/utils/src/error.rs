use serde::{Deserialize, Serialize};
use std::{backtrace::Backtrace, fmt, fmt::Debug};
use strum::{Display, EnumIter};

#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, EnumIter, Hash)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum CommuneErrorType {
  NotAnAdmin,
  CommunityNameRequired,
  CommunityDescriptionRequired,
  InvalidCommunityName,
  InvalidCommunityDescription,
  CommunityAlreadyExists,
  CommunityRuleTitleRequired,
  InvalidUrl,
  NotFound,
  CouldntDeleteCommunity,
  /// Reserved for optimistic-concurrency support, no operation returns it yet
  Conflict,
  Unknown(String),
}

pub type CommuneResult<T> = Result<T, CommuneError>;

pub struct CommuneError {
  pub error_type: CommuneErrorType,
  pub inner: anyhow::Error,
  pub context: Backtrace,
}

impl<T> From<T> for CommuneError
where
  T: Into<anyhow::Error>,
{
  fn from(t: T) -> Self {
    let cause = t.into();
    CommuneError {
      error_type: CommuneErrorType::Unknown(format!("{}", &cause)),
      inner: cause,
      context: Backtrace::capture(),
    }
  }
}

impl Debug for CommuneError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CommuneError")
      .field("message", &self.error_type)
      .field("inner", &self.inner)
      .field("context", &self.context)
      .finish()
  }
}

impl fmt::Display for CommuneError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}: ", &self.error_type)?;
    writeln!(f, "{}", self.inner)?;
    fmt::Display::fmt(&self.context, f)
  }
}

impl actix_web::error::ResponseError for CommuneError {
  fn status_code(&self) -> actix_web::http::StatusCode {
    match self.error_type {
      CommuneErrorType::NotAnAdmin => actix_web::http::StatusCode::UNAUTHORIZED,
      CommuneErrorType::NotFound => actix_web::http::StatusCode::NOT_FOUND,
      CommuneErrorType::Conflict => actix_web::http::StatusCode::CONFLICT,
      CommuneErrorType::CouldntDeleteCommunity => {
        actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
      }
      _ => actix_web::http::StatusCode::BAD_REQUEST,
    }
  }

  fn error_response(&self) -> actix_web::HttpResponse {
    actix_web::HttpResponse::build(self.status_code()).json(&self.error_type)
  }
}

impl From<CommuneErrorType> for CommuneError {
  fn from(error_type: CommuneErrorType) -> Self {
    let inner = anyhow::anyhow!("{}", error_type);
    CommuneError {
      error_type,
      inner,
      context: Backtrace::capture(),
    }
  }
}

pub trait CommuneErrorExt<T, E: Into<anyhow::Error>> {
  fn with_commune_type(self, error_type: CommuneErrorType) -> CommuneResult<T>;
}

impl<T, E: Into<anyhow::Error>> CommuneErrorExt<T, E> for Result<T, E> {
  fn with_commune_type(self, error_type: CommuneErrorType) -> CommuneResult<T> {
    self.map_err(|error| CommuneError {
      error_type,
      inner: error.into(),
      context: Backtrace::capture(),
    })
  }
}

pub trait CommuneErrorExt2<T> {
  fn with_commune_type(self, error_type: CommuneErrorType) -> CommuneResult<T>;
  fn into_anyhow(self) -> Result<T, anyhow::Error>;
}

impl<T> CommuneErrorExt2<T> for CommuneResult<T> {
  fn with_commune_type(self, error_type: CommuneErrorType) -> CommuneResult<T> {
    self.map_err(|mut e| {
      e.error_type = error_type;
      e
    })
  }

  // this function can't be an impl From or similar because it would conflict with one of the
  // other broad Into<> implementations
  fn into_anyhow(self) -> Result<T, anyhow::Error> {
    self.map_err(|e| e.inner)
  }
}
