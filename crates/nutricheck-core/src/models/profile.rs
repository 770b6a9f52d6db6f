// ABOUTME: Signed-in user's profile as served by the profile service
// ABOUTME: Carries declared allergies and medical conditions as delimited text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

use serde::{Deserialize, Serialize};

/// User profile record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Stable user identifier
    #[serde(default, alias = "user_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Login name
    #[serde(default)]
    pub username: String,
    /// Display nickname, preferred over `username` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Declared allergies (comma-delimited, free-form)
    #[serde(default)]
    pub allergies: Option<String>,
    /// Declared medical conditions or health goals (comma- or semicolon-delimited)
    #[serde(default, alias = "medical_conditions", skip_serializing_if = "Option::is_none")]
    pub medical_conditions: Option<String>,
}

impl UserProfile {
    /// Declared allergies, with an absent field read as empty
    #[must_use]
    pub fn allergies_text(&self) -> &str {
        self.allergies.as_deref().unwrap_or_default()
    }

    /// Declared conditions, with an absent field read as empty
    #[must_use]
    pub fn medical_conditions_text(&self) -> &str {
        self.medical_conditions.as_deref().unwrap_or_default()
    }

    /// Name shown to the user: nickname when set, otherwise username
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|nickname| !nickname.trim().is_empty())
            .unwrap_or(&self.username)
    }
}
