//! Endpoint handlers

pub mod examples;
pub mod health;
pub mod parse;
