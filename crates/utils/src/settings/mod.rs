use crate::{
  error::CommuneError,
  settings::structs::{Settings, SettingsOpt},
};
use anyhow::anyhow;
use deser_hjson::from_str;
use std::{env, fs, time::Duration};

pub mod structs;

static CONFIG_FILE: &str = "config/config.hjson";

impl Settings {
  /// Reads config from file and environment. Values from the config file
  /// (optional) override the defaults, and `COMMUNE_`-prefixed environment
  /// variables override both.
  pub fn init() -> Result<Self, CommuneError> {
    let mut settings = match fs::read_to_string(Self::get_config_location()) {
      Ok(config) => from_str::<Settings>(&config)?,
      Err(_) => Settings::default(),
    };

    settings.merge(envy::prefixed("COMMUNE_").from_env::<SettingsOpt>()?);

    if settings.admin_token.is_empty() {
      return Err(anyhow!("admin_token is not set").into());
    }

    Ok(settings)
  }

  pub fn get_config_location() -> String {
    env::var("COMMUNE_CONFIG_LOCATION").unwrap_or_else(|_| CONFIG_FILE.to_string())
  }

  pub fn deletion_timeout(&self) -> Duration {
    Duration::from_secs(self.deletion_timeout)
  }

  fn merge(&mut self, opt: SettingsOpt) {
    if let Some(bind) = opt.bind {
      self.bind = bind;
    }
    if let Some(port) = opt.port {
      self.port = port;
    }
    if let Some(admin_token) = opt.admin_token {
      self.admin_token = admin_token;
    }
    if let Some(deletion_timeout) = opt.deletion_timeout {
      self.deletion_timeout = deletion_timeout;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::structs::{Settings, SettingsOpt};
  use crate::sensitive::Sensitive;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.port, 4000);
    assert_eq!(settings.deletion_timeout, 30);
    assert!(settings.admin_token.is_empty());
  }

  #[test]
  fn test_merge_overrides_only_set_fields() {
    let mut settings = Settings::default();
    settings.merge(SettingsOpt {
      port: Some(8000),
      admin_token: Some(Sensitive::from("seekrit")),
      ..SettingsOpt::default()
    });
    assert_eq!(settings.port, 8000);
    assert_eq!(settings.admin_token.as_ref(), "seekrit");
    // untouched fields keep their defaults
    assert_eq!(settings.deletion_timeout, 30);
  }

  #[test]
  fn test_parse_hjson() {
    let settings = deser_hjson::from_str::<Settings>(
      r#"{
        port: 9999
        admin_token: "letmein"
      }"#,
    )
    .unwrap();
    assert_eq!(settings.port, 9999);
    assert_eq!(settings.admin_token.as_ref(), "letmein");
  }
}
