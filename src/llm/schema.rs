// ABOUTME: JSON response schemas for ingredient validation and recipe generation
// ABOUTME: Uses the OpenAPI subset accepted by Gemini structured output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Response schemas. Every property is listed in `required`, so a compliant
//! response never omits a field.

use serde_json::{json, Value};

/// Schema for `{ corrections: [{ original, suggested, reason }] }`
#[must_use]
pub fn validation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "corrections": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "original": { "type": "STRING" },
                        "suggested": { "type": "STRING" },
                        "reason": { "type": "STRING" }
                    },
                    "required": ["original", "suggested", "reason"]
                }
            }
        },
        "required": ["corrections"]
    })
}

/// Schema for the recipe array
#[must_use]
pub fn recipe_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING", "description": "Dish name" },
                "description": { "type": "STRING", "description": "Short description of the dish" },
                "cookingTimeMinutes": { "type": "INTEGER", "description": "Cooking time in minutes" },
                "instructions": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Step-by-step instructions"
                },
                "ingredients": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": { "type": "STRING", "description": "Ingredient name" },
                            "amount": { "type": "STRING", "description": "Amount" },
                            "isAvailable": {
                                "type": "BOOLEAN",
                                "description": "true if the user has this ingredient, false if it must be bought"
                            }
                        },
                        "required": ["name", "amount", "isAvailable"]
                    }
                },
                "isVegan": { "type": "BOOLEAN" },
                "isKosher": { "type": "BOOLEAN" },
                "temperature": { "type": "STRING", "enum": ["warm", "cold"] }
            },
            "required": [
                "title",
                "description",
                "cookingTimeMinutes",
                "instructions",
                "ingredients",
                "isVegan",
                "isKosher",
                "temperature"
            ]
        }
    })
}
