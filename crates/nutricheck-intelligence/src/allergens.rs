// ABOUTME: Allergen suitability classifier comparing declared allergies with product disclosures
// ABOUTME: Produces a tri-state verdict plus direct and cross-contamination notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! # Allergen Suitability Classifier
//!
//! Given the allergies a user declared and the allergens a product discloses,
//! decide whether the product is `suitable`, needs `caution`, or is
//! `unsuitable`, and explain why.
//!
//! All three inputs are comma-delimited free text. Tokens are trimmed and
//! empty tokens are dropped, so `" milk , eggs ,,"` and `"milk,eggs"` are the
//! same list. A user allergen matches when it is exactly equal to a product
//! token; the same rule drives both the notes and the verdict.
//!
//! Verdict priority, first match wins:
//!
//! 1. any user allergen among the direct allergens: `unsuitable`
//! 2. any user allergen among the cross-contamination allergens: `caution`
//! 3. otherwise: `suitable`
//!
//! The classifier is a pure function. It never fails on string input;
//! [`classify_json_fields`] is the only entry point with an error path, for
//! JSON fields that are not strings at all.
//!
//! ```rust
//! use nutricheck_intelligence::allergens::{classify, SuitabilityVerdict};
//!
//! let report = classify("peanut, soy", "peanut", "soy");
//! assert_eq!(report.verdict, SuitabilityVerdict::Unsuitable);
//! assert_eq!(report.matched_direct, vec!["peanut".to_owned()]);
//! ```

use nutricheck_core::errors::allergen::JsonKind;
use nutricheck_core::errors::AllergenError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// Separator between allergen names in every allergen field
pub const ALLERGEN_DELIMITER: char = ',';

/// Separator used when notes list several allergens
const NOTE_LIST_SEPARATOR: &str = ", ";

/// Split a delimited allergen field into trimmed, non-empty tokens
///
/// Order is preserved for display; duplicates are kept as written.
#[must_use]
pub fn parse_allergen_list(raw: &str) -> Vec<String> {
    raw.split(ALLERGEN_DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Suitability of a product for a particular user
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SuitabilityVerdict {
    /// None of the user's allergens are disclosed
    #[default]
    Suitable,
    /// A user allergen may be present through cross-contamination
    Caution,
    /// A user allergen is a declared ingredient
    Unsuitable,
}

impl SuitabilityVerdict {
    /// Stable wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Suitable => "suitable",
            Self::Caution => "caution",
            Self::Unsuitable => "unsuitable",
        }
    }

    /// Display label in the given locale
    #[must_use]
    pub const fn label(&self, locale: NoteLocale) -> &'static str {
        match (locale, self) {
            (NoteLocale::English, Self::Suitable) => "suitable",
            (NoteLocale::English, Self::Caution) => "in need of caution",
            (NoteLocale::English, Self::Unsuitable) => "unsuitable",
            (NoteLocale::Korean, Self::Suitable) => "적합",
            (NoteLocale::Korean, Self::Caution) => "주의가 필요",
            (NoteLocale::Korean, Self::Unsuitable) => "부적합",
        }
    }

    /// Parse a wire name
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "suitable" => Some(Self::Suitable),
            "caution" => Some(Self::Caution),
            "unsuitable" => Some(Self::Unsuitable),
            _ => None,
        }
    }
}

impl fmt::Display for SuitabilityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language the explanatory notes are written in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteLocale {
    /// English notes
    #[default]
    English,
    /// Korean notes
    Korean,
}

impl NoteLocale {
    /// Parse from a language code with English as the fallback
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "ko" | "ko-kr" | "kr" | "korean" => Self::Korean,
            _ => Self::English,
        }
    }

    /// Language code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Korean => "ko",
        }
    }

    fn contains_note(self, allergens: &str) -> String {
        match self {
            Self::English => format!("❌ This product contains {allergens}."),
            Self::Korean => format!("❌ {allergens} 성분이 함유되어 있어요."),
        }
    }

    fn not_contained_note(self, allergens: &str) -> String {
        match self {
            Self::English => format!("✅ This product does not contain {allergens}."),
            Self::Korean => format!("✅ {allergens} 성분이 함유되어 있지 않아요."),
        }
    }

    fn no_allergies_note(self) -> String {
        match self {
            Self::English => "✅ No allergies registered.".to_owned(),
            Self::Korean => "✅ 등록된 알레르기가 없어요.".to_owned(),
        }
    }

    fn cross_contamination_note(self, allergens: &str) -> String {
        match self {
            Self::English => {
                format!("⚠️ {allergens} may be present due to shared manufacturing.")
            }
            Self::Korean => format!("⚠️ 제조 과정에서 {allergens}의 혼입 가능성이 있어요."),
        }
    }
}

impl fmt::Display for NoteLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// User allergens found in each of the product's allergen lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllergenMatches {
    /// The user's parsed allergens
    pub declared: Vec<String>,
    /// User allergens the product contains directly
    pub direct: Vec<String>,
    /// User allergens the product may contain through cross-contamination
    pub indirect: Vec<String>,
}

impl AllergenMatches {
    /// Match raw delimited fields
    #[must_use]
    pub fn from_raw(user_allergies: &str, direct: &str, indirect: &str) -> Self {
        let declared = parse_allergen_list(user_allergies);
        let direct_tokens = parse_allergen_list(direct);
        let indirect_tokens = parse_allergen_list(indirect);
        let direct_set: HashSet<&str> = direct_tokens.iter().map(String::as_str).collect();
        let indirect_set: HashSet<&str> = indirect_tokens.iter().map(String::as_str).collect();

        let matched_in = |set: &HashSet<&str>| -> Vec<String> {
            declared
                .iter()
                .filter(|allergen| set.contains(allergen.as_str()))
                .cloned()
                .collect()
        };

        Self {
            direct: matched_in(&direct_set),
            indirect: matched_in(&indirect_set),
            declared,
        }
    }

    /// Verdict implied by these matches
    #[must_use]
    pub fn verdict(&self) -> SuitabilityVerdict {
        if !self.direct.is_empty() {
            SuitabilityVerdict::Unsuitable
        } else if !self.indirect.is_empty() {
            SuitabilityVerdict::Caution
        } else {
            SuitabilityVerdict::Suitable
        }
    }
}

/// Outcome of classifying one user/product pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitabilityReport {
    /// Tri-state verdict
    pub verdict: SuitabilityVerdict,
    /// Note about direct allergens, always present
    pub direct_note: String,
    /// Note about cross-contamination, only when a user allergen is affected
    pub indirect_note: Option<String>,
    /// User allergens the product contains directly
    pub matched_direct: Vec<String>,
    /// User allergens the product may contain through cross-contamination
    pub matched_indirect: Vec<String>,
}

impl SuitabilityReport {
    fn from_matches(matches: AllergenMatches, locale: NoteLocale) -> Self {
        let verdict = matches.verdict();

        let direct_note = if !matches.direct.is_empty() {
            locale.contains_note(&matches.direct.join(NOTE_LIST_SEPARATOR))
        } else if !matches.declared.is_empty() {
            locale.not_contained_note(&matches.declared.join(NOTE_LIST_SEPARATOR))
        } else {
            locale.no_allergies_note()
        };

        let indirect_note = (!matches.indirect.is_empty())
            .then(|| locale.cross_contamination_note(&matches.indirect.join(NOTE_LIST_SEPARATOR)));

        Self {
            verdict,
            direct_note,
            indirect_note,
            matched_direct: matches.direct,
            matched_indirect: matches.indirect,
        }
    }
}

/// Classify with English notes
#[must_use]
pub fn classify(
    user_allergies: &str,
    product_allergens: &str,
    product_indirect_allergens: &str,
) -> SuitabilityReport {
    classify_with_locale(
        user_allergies,
        product_allergens,
        product_indirect_allergens,
        NoteLocale::default(),
    )
}

/// Classify with notes in `locale`
#[must_use]
pub fn classify_with_locale(
    user_allergies: &str,
    product_allergens: &str,
    product_indirect_allergens: &str,
    locale: NoteLocale,
) -> SuitabilityReport {
    let matches =
        AllergenMatches::from_raw(user_allergies, product_allergens, product_indirect_allergens);
    SuitabilityReport::from_matches(matches, locale)
}

/// Read an allergen field from loosely typed JSON
///
/// `null` reads as the empty list. Strings pass through.
///
/// # Errors
///
/// Returns [`AllergenError::InvalidInputKind`] for booleans, numbers, arrays
/// and objects.
pub fn allergen_text<'a>(field: &'static str, value: &'a Value) -> Result<&'a str, AllergenError> {
    let found = match value {
        Value::Null => return Ok(""),
        Value::String(text) => return Ok(text.as_str()),
        Value::Bool(_) => JsonKind::Bool,
        Value::Number(_) => JsonKind::Number,
        Value::Array(_) => JsonKind::Array,
        Value::Object(_) => JsonKind::Object,
    };
    Err(AllergenError::InvalidInputKind { field, found })
}

/// Classify fields taken straight from upstream JSON records
///
/// # Errors
///
/// Returns [`AllergenError::InvalidInputKind`] if any field is neither a
/// string nor `null`.
pub fn classify_json_fields(
    user_allergies: &Value,
    product_allergens: &Value,
    product_indirect_allergens: &Value,
    locale: NoteLocale,
) -> Result<SuitabilityReport, AllergenError> {
    let user = allergen_text("userAllergies", user_allergies)?;
    let direct = allergen_text("productAllergens", product_allergens)?;
    let indirect = allergen_text("productIndirectAllergens", product_indirect_allergens)?;
    Ok(classify_with_locale(user, direct, indirect, locale))
}
