// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Scripted recipe collaborator, recipe builders, and Gemini response bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod scripted;

use serde_json::{json, Value};
use smartchef::models::{Ingredient, Recipe, RecipeId, RecipeImage, Temperature};

/// Recipe with `have` available and `missing` unavailable ingredients
pub fn recipe(id: &str, title: &str, minutes: u32, have: &[&str], missing: &[&str]) -> Recipe {
    let ingredient = |name: &&str, is_available| Ingredient {
        name: (*name).to_owned(),
        amount: "1".to_owned(),
        is_available,
    };
    Recipe {
        id: RecipeId::new(id),
        title: title.to_owned(),
        description: format!("{title} description"),
        instructions: vec!["Cook".to_owned()],
        cooking_time_minutes: minutes,
        ingredients: have
            .iter()
            .map(|n| ingredient(n, true))
            .chain(missing.iter().map(|n| ingredient(n, false)))
            .collect(),
        is_vegan: false,
        is_kosher: false,
        temperature: Temperature::Warm,
        rating: None,
    }
}

/// Small PNG-ish payload for image tests
pub fn image(tag: &str) -> RecipeImage {
    RecipeImage {
        mime_type: "image/png".to_owned(),
        data: format!("aW1hZ2Ut{tag}"),
    }
}

/// `generateContent` response whose only part is `text`
pub fn gemini_text_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

/// `generateContent` response carrying one inline image after a text part
pub fn gemini_image_body(mime_type: &str, data: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [
                    { "text": "Here is your dish" },
                    { "inlineData": { "mimeType": mime_type, "data": data } }
                ]
            },
            "finishReason": "STOP"
        }]
    })
}

/// Recipe list as the model returns it, with `соль` deliberately unlisted
pub fn recipe_json(with_availability: bool) -> String {
    let salt = if with_availability {
        json!({ "name": "соль", "amount": "по вкусу", "isAvailable": false })
    } else {
        json!({ "name": "соль", "amount": "по вкусу" })
    };
    json!([
        {
            "title": "Жареный рис с курицей",
            "description": "Быстрый ужин",
            "cookingTimeMinutes": 25,
            "instructions": ["Отварить рис", "Обжарить курицу", "Смешать"],
            "ingredients": [
                { "name": "рис", "amount": "200 г", "isAvailable": true },
                { "name": "курица", "amount": "300 г", "isAvailable": true },
                salt
            ],
            "isVegan": false,
            "isKosher": false,
            "temperature": "warm"
        },
        {
            "title": "Салат из риса",
            "description": "Холодная закуска",
            "cookingTimeMinutes": 15,
            "instructions": ["Остудить рис", "Заправить"],
            "ingredients": [
                { "name": "рис", "amount": "150 г", "isAvailable": true }
            ],
            "isVegan": true,
            "isKosher": true,
            "temperature": "cold"
        }
    ])
    .to_string()
}
