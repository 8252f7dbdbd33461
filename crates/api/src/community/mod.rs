pub mod add_mod;
pub mod remove_mod;
