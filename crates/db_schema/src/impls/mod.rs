pub mod comment;
pub mod community;
pub mod community_member;
pub mod community_moderator;
pub mod community_rule;
pub mod person;
pub mod post;
