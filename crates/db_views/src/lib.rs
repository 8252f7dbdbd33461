pub mod community_moderator_view;
pub mod community_view;
pub mod structs;
