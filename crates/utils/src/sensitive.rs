use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// A string holding a secret. The value is kept out of `Debug` output so it
/// never ends up in logs.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Sensitive(String);

impl Sensitive {
  pub fn new(string: String) -> Self {
    Sensitive(string)
  }

  pub fn into_inner(this: Self) -> String {
    this.0
  }
}

impl std::fmt::Debug for Sensitive {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Sensitive").finish()
  }
}

impl AsRef<str> for Sensitive {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl Deref for Sensitive {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl From<String> for Sensitive {
  fn from(t: String) -> Self {
    Sensitive(t)
  }
}

impl From<&str> for Sensitive {
  fn from(t: &str) -> Self {
    Sensitive(t.into())
  }
}
