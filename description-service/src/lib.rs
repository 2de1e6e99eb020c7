//! Product description service.
//!
//! Generates marketing copy for marketplace listings through OpenRouter and
//! falls back to local French templates whenever the AI path is unavailable.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;
