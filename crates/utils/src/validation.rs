use crate::error::{CommuneErrorType, CommuneResult};
use url::Url;

const COMMUNITY_NAME_MAX_LENGTH: usize = 100;
const COMMUNITY_DESCRIPTION_MAX_LENGTH: usize = 1000;

fn has_newline(name: &str) -> bool {
  name.contains('\n')
}

pub fn is_valid_community_name(name: &str) -> CommuneResult<()> {
  if name.trim().is_empty() {
    return Err(CommuneErrorType::CommunityNameRequired.into());
  }
  if name.chars().count() > COMMUNITY_NAME_MAX_LENGTH || has_newline(name) {
    return Err(CommuneErrorType::InvalidCommunityName.into());
  }
  Ok(())
}

pub fn is_valid_community_description(description: &str) -> CommuneResult<()> {
  if description.trim().is_empty() {
    return Err(CommuneErrorType::CommunityDescriptionRequired.into());
  }
  if description.chars().count() > COMMUNITY_DESCRIPTION_MAX_LENGTH {
    return Err(CommuneErrorType::InvalidCommunityDescription.into());
  }
  Ok(())
}

/// Turns an optional url field from an api request into the double-option
/// shape update forms use: `None` leaves the stored value alone, an empty
/// string erases it, anything else must parse as a url.
pub fn option_url_overwrite(opt: &Option<String>) -> CommuneResult<Option<Option<Url>>> {
  match opt.as_deref() {
    Some("") => Ok(Some(None)),
    Some(str_url) => match Url::parse(str_url) {
      Ok(url) => Ok(Some(Some(url))),
      Err(_) => Err(CommuneErrorType::InvalidUrl.into()),
    },
    None => Ok(None),
  }
}
