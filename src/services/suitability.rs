// ABOUTME: Orchestrates profile/product fetches, allergen classification, AI analysis and local insights
// ABOUTME: Produces the SuitabilityPage returned by the HTTP API and printed by the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! # Suitability Service
//!
//! The flow behind the "is this product suitable for me?" button:
//!
//! 1. Fetch the signed-in user's profile and the product concurrently.
//! 2. Classify the product against the user's allergies. Absent allergen
//!    fields count as empty lists.
//! 3. Optionally ask the analysis service for an explanation and
//!    alternatives. Failures degrade to a fixed text and no alternatives.
//! 4. Optionally compute nutrient ratings and alternatives locally from the
//!    catalog.

use crate::clients::FoodDataSource;
use crate::constants::defaults;
use crate::errors::AppResult;
use crate::intelligence::nutrient_evaluation::{
    evaluate_nutrients, HealthCondition, NutrientEvaluation,
};
use crate::intelligence::{
    classify_with_locale, recommend_alternatives, NoteLocale, SuitabilityReport,
};
use crate::models::{AnalysisRequest, NutrientAssessment, Product, RecommendedProduct, UserProfile};
use crate::view::{
    unavailable_explanation, AnalysisState, NutritionFactsPanel, RecommendationHeading,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// The two records every suitability computation starts from
#[derive(Debug, Clone, PartialEq)]
pub struct SuitabilityContext {
    /// Identifier the profile was fetched with
    pub user_id: String,
    /// Signed-in user's profile
    pub profile: UserProfile,
    /// Product being viewed
    pub product: Product,
}

/// Allergen verdict for a user/product pair, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitabilityAssessment {
    /// Name addressed in the result ("{user} is ... for this product")
    pub user_name: String,
    /// Catalog identifier
    pub product_id: i64,
    /// Product name
    pub product_name: String,
    /// Verdict label in the configured locale
    pub verdict_label: String,
    /// Classifier output
    pub report: SuitabilityReport,
}

/// Settled AI analysis request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    /// Whether the analysis service answered
    pub available: bool,
    /// Explanation text, or the unavailable text
    pub explanation: String,
    /// Per-nutrient evaluation reported by the service
    pub nutrition_analysis: Vec<NutrientAssessment>,
    /// Suggested alternatives, empty on failure
    pub recommendations: Vec<RecommendedProduct>,
}

impl AnalysisOutcome {
    /// Outcome used when the analysis service could not be used
    #[must_use]
    pub fn unavailable(locale: NoteLocale) -> Self {
        Self {
            available: false,
            explanation: unavailable_explanation(locale).to_owned(),
            nutrition_analysis: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    /// View state after this outcome settles
    #[must_use]
    pub fn to_state(&self) -> AnalysisState {
        let mut state = AnalysisState::default();
        state.complete(self.explanation.clone(), self.recommendations.clone());
        state
    }
}

/// Nutrient ratings and alternatives computed from the catalog in-process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalInsights {
    /// Conditions recognized in the user's profile
    pub conditions: Vec<HealthCondition>,
    /// One rating per target nutrient
    pub evaluations: Vec<NutrientEvaluation>,
    /// Allergen-safe alternatives, most similar first
    pub alternatives: Vec<RecommendedProduct>,
}

/// Optional sections of a [`SuitabilityPage`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOptions {
    /// Call the AI analysis service
    #[serde(default)]
    pub analyze: bool,
    /// Compute local nutrient ratings and alternatives
    #[serde(default)]
    pub insights: bool,
}

/// Everything the nutrition facts view shows for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitabilityPage {
    /// Allergen verdict
    pub assessment: SuitabilityAssessment,
    /// Nutrition facts table
    pub nutrition: NutritionFactsPanel,
    /// AI analysis, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisOutcome>,
    /// Heading above the AI recommendations, when analysis was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_heading: Option<RecommendationHeading>,
    /// Local insights, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<LocalInsights>,
}

/// Suitability orchestration over a [`FoodDataSource`]
#[derive(Clone)]
pub struct SuitabilityService {
    source: Arc<dyn FoodDataSource>,
    locale: NoteLocale,
    top_k: usize,
}

impl SuitabilityService {
    /// Create a service with English notes and the default alternative count
    #[must_use]
    pub fn new(source: Arc<dyn FoodDataSource>) -> Self {
        Self {
            source,
            locale: NoteLocale::default(),
            top_k: defaults::RECOMMENDATION_TOP_K,
        }
    }

    /// Write notes and labels in `locale`
    #[must_use]
    pub const fn with_locale(mut self, locale: NoteLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Return at most `top_k` local alternatives
    #[must_use]
    pub const fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Locale notes are written in
    #[must_use]
    pub const fn locale(&self) -> NoteLocale {
        self.locale
    }

    /// Fetch the profile and the product concurrently
    ///
    /// # Errors
    ///
    /// Returns the first upstream error; the other fetch is dropped.
    #[instrument(skip(self))]
    pub async fn load_context(
        &self,
        user_id: &str,
        product_id: i64,
    ) -> AppResult<SuitabilityContext> {
        let (profile, product) = tokio::try_join!(
            self.source.fetch_profile(user_id),
            self.source.fetch_product(product_id)
        )?;
        Ok(SuitabilityContext {
            user_id: user_id.to_owned(),
            profile,
            product,
        })
    }

    /// Classify the product for the user
    #[must_use]
    pub fn assess(&self, context: &SuitabilityContext) -> SuitabilityAssessment {
        let report = classify_with_locale(
            context.profile.allergies_text(),
            context.product.allergy_text(),
            context.product.indirect_allergy_text(),
            self.locale,
        );
        debug!(
            product_id = context.product.id,
            verdict = %report.verdict,
            "Classified product"
        );
        SuitabilityAssessment {
            user_name: context.profile.display_name().to_owned(),
            product_id: context.product.id,
            product_name: context.product.name.clone(),
            verdict_label: report.verdict.label(self.locale).to_owned(),
            report,
        }
    }

    /// Ask the analysis service about `product`
    ///
    /// Never fails: an upstream error is logged and yields
    /// [`AnalysisOutcome::unavailable`].
    #[instrument(skip(self, product), fields(product = %product.name))]
    pub async fn request_analysis(&self, user_id: &str, product: &Product) -> AnalysisOutcome {
        let request = AnalysisRequest {
            user_id: user_id.to_owned(),
            product_name: product.name.clone(),
        };
        match self.source.analyze(&request).await {
            Ok(response) => AnalysisOutcome {
                available: true,
                explanation: response
                    .ai_description
                    .unwrap_or_else(|| unavailable_explanation(self.locale).to_owned()),
                nutrition_analysis: response.nutrition_analysis,
                recommendations: response.recommendations,
            },
            Err(e) => {
                warn!(code = ?e.code, "AI analysis failed: {}", e.message);
                AnalysisOutcome::unavailable(self.locale)
            }
        }
    }

    /// Rate target nutrients and rank alternatives from the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be fetched.
    #[instrument(skip(self, context), fields(product_id = context.product.id))]
    pub async fn local_insights(&self, context: &SuitabilityContext) -> AppResult<LocalInsights> {
        let mut catalog = self.source.fetch_catalog().await?;
        if !catalog.iter().any(|product| product.name == context.product.name) {
            catalog.push(context.product.clone());
        }

        let conditions = HealthCondition::parse_list(context.profile.medical_conditions_text());
        let evaluations = evaluate_nutrients(&context.product.nutrition, &catalog, &conditions);
        let alternatives = recommend_alternatives(
            &catalog,
            &context.product.name,
            context.profile.allergies_text(),
            self.top_k,
        )?;

        Ok(LocalInsights {
            conditions,
            evaluations,
            alternatives,
        })
    }

    /// Build the full page for a user and product
    ///
    /// # Errors
    ///
    /// Returns an error if the profile, the product or (with
    /// `options.insights`) the catalog cannot be fetched.
    #[instrument(skip(self))]
    pub async fn evaluate(
        &self,
        user_id: &str,
        product_id: i64,
        options: PageOptions,
    ) -> AppResult<SuitabilityPage> {
        let context = self.load_context(user_id, product_id).await?;
        let assessment = self.assess(&context);
        let nutrition = NutritionFactsPanel::from_product(&context.product, self.locale);

        let (analysis, insights) = tokio::join!(
            async {
                if options.analyze {
                    Some(self.request_analysis(user_id, &context.product).await)
                } else {
                    None
                }
            },
            async {
                if options.insights {
                    self.local_insights(&context).await.map(Some)
                } else {
                    Ok(None)
                }
            }
        );
        let insights = insights?;

        let recommendation_heading = analysis
            .as_ref()
            .map(|outcome| outcome.to_state().heading(assessment.report.verdict));

        info!(
            product_id,
            verdict = %assessment.report.verdict,
            analyzed = analysis.is_some(),
            insights = insights.is_some(),
            "Suitability page assembled"
        );

        Ok(SuitabilityPage {
            assessment,
            nutrition,
            analysis,
            recommendation_heading,
            insights,
        })
    }
}
