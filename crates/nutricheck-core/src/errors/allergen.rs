// ABOUTME: Error type for the allergen suitability classifier's loosely typed entry point
// ABOUTME: Raised only when an allergen field arrives as a non-string JSON value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

use std::fmt;

use super::{AppError, ErrorCode};

/// JSON value kinds that can reach the classifier from upstream records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    /// `true` / `false`
    Bool,
    /// Any JSON number
    Number,
    /// JSON array
    Array,
    /// JSON object
    Object,
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

/// Errors raised while reading allergen fields
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllergenError {
    /// The field held something other than a string or null
    #[error("Allergen field '{field}' must be a string, found {found}")]
    InvalidInputKind {
        /// Name of the offending field
        field: &'static str,
        /// Kind of value that was supplied
        found: JsonKind,
    },
}

impl From<AllergenError> for AppError {
    fn from(error: AllergenError) -> Self {
        let field = match &error {
            AllergenError::InvalidInputKind { field, .. } => *field,
        };
        Self::new(ErrorCode::InvalidInput, error.to_string())
            .with_details(serde_json::json!({ "field": field }))
            .with_source(error)
    }
}
