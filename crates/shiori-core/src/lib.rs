//! Core of the Shiori chat Q&A pipeline.
//!
//! A question flows through the [`classifier::Classifier`], which picks the
//! first matching rule of the active domain (or its fallback), into
//! [`synthesizer::synthesize`], which produces a typed response. Front ends
//! turn response bodies into displayable blocks with [`markup::render`].

pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod markup;
pub mod rule;
pub mod session;
pub mod synthesizer;

// Re-export common error type
pub use error::{Result, ShioriError};
