pub mod community_aggregates;
pub mod structs;
