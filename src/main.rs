use clap::Parser;
use commune_server::{start_commune_server, CmdArgs};
use commune_utils::error::CommuneResult;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> CommuneResult<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  tracing_subscriber::fmt().with_env_filter(filter).init();

  let args = CmdArgs::parse();

  start_commune_server(args).await?;
  Ok(())
}
