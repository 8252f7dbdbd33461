use actix_web::{
  body::MessageBody,
  dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
  Error,
};
use commune_api_common::context::CommuneContext;
use commune_utils::error::{CommuneError, CommuneErrorType};
use core::future::Ready;
use futures_util::future::LocalBoxFuture;
use std::{future::ready, rc::Rc};

static AUTH_HEADER: &str = "authorization";
static BEARER_PREFIX: &str = "Bearer ";

/// Rejects every request whose bearer token does not match the configured
/// admin token. Everything behind this middleware trusts the caller to be an
/// authenticated admin.
#[derive(Clone)]
pub struct SessionMiddleware {
  context: CommuneContext,
}

impl SessionMiddleware {
  pub fn new(context: CommuneContext) -> Self {
    SessionMiddleware { context }
  }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Transform = SessionService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(SessionService {
      service: Rc::new(service),
      context: self.context.clone(),
    }))
  }
}

pub struct SessionService<S> {
  service: Rc<S>,
  context: CommuneContext,
}

impl<S, B> Service<ServiceRequest> for SessionService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let svc = self.service.clone();
    let context = self.context.clone();

    Box::pin(async move {
      let token = req
        .headers()
        .get(AUTH_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_PREFIX));

      let admin_token = &context.settings().admin_token;
      // an empty configured token matches nothing
      let valid = !admin_token.is_empty() && token == Some(admin_token.as_ref());
      if !valid {
        return Err(CommuneError::from(CommuneErrorType::NotAnAdmin).into());
      }

      svc.call(req).await
    })
  }
}
