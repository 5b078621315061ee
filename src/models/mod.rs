pub mod donation;
pub mod volunteer;
