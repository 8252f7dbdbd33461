use crate::sensitive::Sensitive;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Settings {
  /// Address where the server listens for incoming requests
  pub bind: IpAddr,
  /// Port where the server listens for incoming requests
  pub port: u16,
  /// Bearer token that admin clients must present on every request. The
  /// server refuses to start while this is empty.
  pub admin_token: Sensitive,
  /// Seconds a community deletion may take before it is reported as failed
  pub deletion_timeout: u64,
}

impl Default for Settings {
  fn default() -> Self {
    Settings {
      bind: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
      port: 4000,
      admin_token: Sensitive::default(),
      deletion_timeout: 30,
    }
  }
}

/// Mirror of [`Settings`] with every field optional, deserialized from
/// `COMMUNE_`-prefixed environment variables and merged over the file config.
#[derive(Debug, Deserialize, Default)]
pub struct SettingsOpt {
  pub bind: Option<IpAddr>,
  pub port: Option<u16>,
  pub admin_token: Option<Sensitive>,
  pub deletion_timeout: Option<u64>,
}
