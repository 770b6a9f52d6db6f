// ABOUTME: Presentation state for the nutrition facts view as plain values and transitions
// ABOUTME: Nutrition panel rows, recommendation heading, modal scroll lock and AI analysis state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! # View Model
//!
//! Everything the nutrition facts page renders, expressed without a UI
//! toolkit. Transitions are methods on small enums so a front end only has
//! to map state to markup:
//!
//! - [`NutritionFactsPanel`]: the fixed nine-row nutrition table
//! - [`RecommendationHeading`]: which heading sits above the alternatives
//! - [`SuitabilityModal`]: open/closed with the page scroll offset to restore
//! - [`AnalysisState`]: idle, loading, or loaded AI explanation

use crate::intelligence::{NoteLocale, SuitabilityVerdict};
use crate::models::{Nutrient, NutrientUnit, Product, RecommendedProduct};
use serde::{Deserialize, Serialize};
use std::mem;

/// Placeholder shown for a nutrient the catalog does not declare
pub const MISSING_VALUE: &str = "-";

/// Explanation text while the AI analysis is pending
#[must_use]
pub const fn loading_explanation(locale: NoteLocale) -> &'static str {
    match locale {
        NoteLocale::English => "Loading AI explanation...",
        NoteLocale::Korean => "AI 설명을 불러오는 중...",
    }
}

/// Explanation text when the AI analysis failed or returned nothing
#[must_use]
pub const fn unavailable_explanation(locale: NoteLocale) -> &'static str {
    match locale {
        NoteLocale::English => "The AI explanation is unavailable.",
        NoteLocale::Korean => "AI 설명을 불러올 수 없습니다.",
    }
}

/// Render an amount without a trailing `.0` for whole numbers
fn format_amount(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// One row of the nutrition facts table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFactsRow {
    /// Nutrient shown on this row
    pub nutrient: Nutrient,
    /// Row label in the panel locale
    pub label: String,
    /// Declared amount per serving
    pub value: Option<f64>,
    /// Display unit
    pub unit: NutrientUnit,
    /// Amount and unit as shown, or `-` when undeclared
    pub display: String,
}

impl NutritionFactsRow {
    fn new(nutrient: Nutrient, value: Option<f64>, locale: NoteLocale) -> Self {
        let label = match locale {
            NoteLocale::English => nutrient.label(),
            NoteLocale::Korean => nutrient.korean_label(),
        };
        let display = value.map_or_else(
            || MISSING_VALUE.to_owned(),
            |amount| format!("{} {}", format_amount(amount), nutrient.unit()),
        );
        Self {
            nutrient,
            label: label.to_owned(),
            value,
            unit: nutrient.unit(),
            display,
        }
    }
}

/// Nutrition facts table for a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFactsPanel {
    /// Catalog identifier
    pub product_id: i64,
    /// Product name shown above the table
    pub product_name: String,
    /// Product image
    pub image_url: Option<String>,
    /// Rows in [`Nutrient::PANEL_ORDER`]
    pub rows: Vec<NutritionFactsRow>,
}

impl NutritionFactsPanel {
    /// Build the panel for `product` with labels in `locale`
    #[must_use]
    pub fn from_product(product: &Product, locale: NoteLocale) -> Self {
        let rows = Nutrient::PANEL_ORDER
            .iter()
            .map(|&nutrient| {
                NutritionFactsRow::new(nutrient, product.nutrition.get(nutrient), locale)
            })
            .collect();
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            image_url: product.image_url.clone(),
            rows,
        }
    }

    /// Row for `nutrient`, if the panel shows it
    #[must_use]
    pub fn row(&self, nutrient: Nutrient) -> Option<&NutritionFactsRow> {
        self.rows.iter().find(|row| row.nutrient == nutrient)
    }
}

/// Heading above the recommended alternatives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationHeading {
    /// Analysis still running
    Loading,
    /// Nothing to recommend
    Empty,
    /// The product is unsuitable; these are replacements
    Instead,
    /// The product is fine; these are extra suggestions
    Also,
}

impl RecommendationHeading {
    /// Pick the heading for the current analysis state
    #[must_use]
    pub const fn derive(loading: bool, count: usize, verdict: SuitabilityVerdict) -> Self {
        if loading {
            Self::Loading
        } else if count == 0 {
            Self::Empty
        } else if matches!(verdict, SuitabilityVerdict::Unsuitable) {
            Self::Instead
        } else {
            Self::Also
        }
    }

    /// Heading text
    #[must_use]
    pub const fn text(&self, locale: NoteLocale) -> &'static str {
        match (locale, self) {
            (NoteLocale::English, Self::Loading) => "Loading recommendations ⏳",
            (NoteLocale::English, Self::Empty) => "No products to recommend 🥲",
            (NoteLocale::English, Self::Instead) => "Try these instead 😆",
            (NoteLocale::English, Self::Also) => "You might also like 😆",
            (NoteLocale::Korean, Self::Loading) => "추천 상품을 불러오는 중이에요 ⏳",
            (NoteLocale::Korean, Self::Empty) => "추천할 수 있는 상품이 없어요 🥲",
            (NoteLocale::Korean, Self::Instead) => "대신 이런 상품을 추천해요 😆",
            (NoteLocale::Korean, Self::Also) => "이런 상품도 추천해요 😆",
        }
    }
}

/// Suitability modal with the page scroll lock it holds while open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuitabilityModal {
    /// Page scrolls normally
    #[default]
    Closed,
    /// Page is pinned; `scroll_offset` is where it was when the modal opened
    Open {
        /// Vertical scroll position in pixels
        scroll_offset: u32,
    },
}

impl SuitabilityModal {
    /// Open the modal and lock the page at `scroll_offset`
    ///
    /// Opening an already open modal keeps the original offset.
    pub fn open(&mut self, scroll_offset: u32) {
        if let Self::Closed = self {
            *self = Self::Open { scroll_offset };
        }
    }

    /// Close the modal, returning the offset the page should scroll back to
    ///
    /// `None` when the modal was not open.
    pub fn close(&mut self) -> Option<u32> {
        match mem::take(self) {
            Self::Open { scroll_offset } => Some(scroll_offset),
            Self::Closed => None,
        }
    }

    /// Whether the modal is showing
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

/// Lifecycle of the AI explanation and its recommendations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum AnalysisState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Request settled, successfully or with the fallback text
    Loaded {
        /// AI explanation, or the unavailable text
        explanation: String,
        /// Suggested alternatives, empty on failure
        recommendations: Vec<RecommendedProduct>,
    },
}

impl AnalysisState {
    /// Start a request
    pub fn begin(&mut self) {
        *self = Self::Loading;
    }

    /// Product changed: back to loading with no recommendations shown
    pub fn reset(&mut self) {
        self.begin();
    }

    /// Settle the request
    pub fn complete(&mut self, explanation: String, recommendations: Vec<RecommendedProduct>) {
        *self = Self::Loaded {
            explanation,
            recommendations,
        };
    }

    /// Whether the heading should still show the loading text
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        !matches!(self, Self::Loaded { .. })
    }

    /// Text for the explanation area
    #[must_use]
    pub fn explanation(&self, locale: NoteLocale) -> &str {
        match self {
            Self::Loaded { explanation, .. } => explanation,
            Self::Idle | Self::Loading => loading_explanation(locale),
        }
    }

    /// Alternatives to list
    #[must_use]
    pub fn recommendations(&self) -> &[RecommendedProduct] {
        match self {
            Self::Loaded {
                recommendations, ..
            } => recommendations,
            Self::Idle | Self::Loading => &[],
        }
    }

    /// Heading for the alternatives given the product's verdict
    #[must_use]
    pub fn heading(&self, verdict: SuitabilityVerdict) -> RecommendationHeading {
        RecommendationHeading::derive(self.is_loading(), self.recommendations().len(), verdict)
    }
}
