pub mod lifecycle;
pub mod urgency;
