// ABOUTME: Catalog and profile fixtures shared by integration tests
// ABOUTME: A small ramen/snack catalog with known allergens and nutrition facts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

use nutricheck::models::{NutritionFacts, Product, UserProfile};

/// Optional delimited text from a fixture literal
fn text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// Product with allergen fields and no nutrition facts
pub fn product(id: i64, name: &str, allergy: &str, indirect: &str) -> Product {
    Product {
        id,
        name: name.to_owned(),
        image_url: Some(format!("https://img.example/{id}.png")),
        allergy: text(allergy),
        indirect_allergy: text(indirect),
        nutrition: NutritionFacts::default(),
    }
}

pub fn spicy_ramen() -> Product {
    Product {
        nutrition: NutritionFacts {
            calories: Some(500.0),
            sodium: Some(1800.0),
            carbohydrate: Some(80.0),
            sugar: Some(4.0),
            fat: Some(16.0),
            trans_fat: Some(0.0),
            saturated_fat: Some(8.0),
            cholesterol: Some(0.0),
            protein: Some(10.0),
            serving_size: Some(120.0),
            ..NutritionFacts::default()
        },
        ..product(1, "Spicy Ramen", "wheat,soy", "milk,egg")
    }
}

pub fn mild_ramen() -> Product {
    Product {
        nutrition: NutritionFacts {
            calories: Some(450.0),
            sodium: Some(1500.0),
            carbohydrate: Some(75.0),
            sugar: Some(3.0),
            fat: Some(14.0),
            trans_fat: Some(0.0),
            saturated_fat: Some(7.0),
            cholesterol: Some(0.0),
            protein: Some(9.0),
            serving_size: Some(110.0),
            ..NutritionFacts::default()
        },
        ..product(2, "Mild Ramen", "wheat", "")
    }
}

pub fn peanut_bar() -> Product {
    Product {
        nutrition: NutritionFacts {
            calories: Some(250.0),
            sodium: Some(120.0),
            carbohydrate: Some(25.0),
            sugar: Some(15.0),
            fat: Some(14.0),
            saturated_fat: Some(3.0),
            protein: Some(8.0),
            serving_size: Some(50.0),
            ..NutritionFacts::default()
        },
        ..product(3, "Peanut Bar", "peanut, milk", "")
    }
}

pub fn rice_cracker() -> Product {
    Product {
        nutrition: NutritionFacts {
            calories: Some(130.0),
            sodium: Some(200.0),
            carbohydrate: Some(28.0),
            sugar: Some(2.0),
            fat: Some(1.0),
            protein: Some(2.0),
            serving_size: Some(30.0),
            ..NutritionFacts::default()
        },
        ..product(4, "Rice Cracker", "", "peanut")
    }
}

pub fn soy_milk() -> Product {
    Product {
        nutrition: NutritionFacts {
            calories: Some(130.0),
            sodium: Some(100.0),
            carbohydrate: Some(10.0),
            sugar: Some(8.0),
            fat: Some(5.0),
            protein: Some(7.0),
            calcium: Some(240.0),
            serving_size: Some(190.0),
            ..NutritionFacts::default()
        },
        ..product(5, "Soy Milk", "soy", "")
    }
}

/// Every fixture product, in id order
pub fn catalog() -> Vec<Product> {
    vec![
        spicy_ramen(),
        mild_ramen(),
        peanut_bar(),
        rice_cracker(),
        soy_milk(),
    ]
}

/// Profile with optional nickname, allergies and conditions
pub fn profile(
    user_id: &str,
    username: &str,
    nickname: &str,
    allergies: &str,
    conditions: &str,
) -> UserProfile {
    UserProfile {
        user_id: Some(user_id.to_owned()),
        username: username.to_owned(),
        nickname: text(nickname),
        allergies: text(allergies),
        medical_conditions: text(conditions),
    }
}

/// Peanut-allergic user with hypertension
pub fn kim() -> UserProfile {
    profile("u-1", "kim", "Kimmy", "peanut", "hypertension")
}

/// Soy-allergic user with no conditions
pub fn lee() -> UserProfile {
    profile("u-2", "lee", "", "soy", "")
}

/// User with no declared allergies
pub fn park() -> UserProfile {
    profile("u-3", "park", "", "", "")
}

/// Every fixture profile
pub fn profiles() -> Vec<UserProfile> {
    vec![kim(), lee(), park()]
}
