//! DocSentry Core Types
//!
//! This crate provides the fundamental types shared across DocSentry:
//! - Pattern category and risk level vocabulary
//! - The analysis result record
//! - Core error types

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{AnalysisResult, FileTypeRisk, PatternCategory, RiskLevel};
