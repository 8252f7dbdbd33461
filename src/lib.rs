//! The commune admin server crate

/// The API routes
pub mod api_routes_http;
/// Admin session validation for the API scope
pub mod session_middleware;

use actix_web::{App, HttpServer};
use clap::Parser;
use commune_api_common::context::CommuneContext;
use commune_db_schema::utils::StorePool;
use commune_utils::{error::CommuneResult, settings::structs::Settings};
use tracing_actix_web::TracingLogger;

#[derive(Parser, Debug)]
#[command(version, about = "The commune admin server")]
pub struct CmdArgs {
  /// Overrides the configured port
  #[arg(long)]
  pub port: Option<u16>,
}

pub async fn start_commune_server(args: CmdArgs) -> CommuneResult<()> {
  let mut settings = Settings::init()?;
  if let Some(port) = args.port {
    settings.port = port;
  }

  let pool = StorePool::new();
  let context = CommuneContext::create(pool, settings.clone());

  tracing::info!(
    "starting http server at {}:{}",
    settings.bind,
    settings.port
  );

  HttpServer::new(move || {
    let context = context.clone();
    App::new()
      .wrap(TracingLogger::default())
      .configure(|cfg| api_routes_http::config(cfg, &context))
  })
  .bind((settings.bind, settings.port))?
  .run()
  .await?;

  Ok(())
}
