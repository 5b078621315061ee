pub mod cors;
pub mod rest;
