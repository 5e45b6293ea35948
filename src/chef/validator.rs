// ABOUTME: Ingredient validator asking the model for typo and non-food corrections
// ABOUTME: Fails soft: any collaborator failure yields an empty correction list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use serde::Deserialize;
use smartchef_core::errors::{AppError, AppResult, ErrorCode};
use smartchef_core::models::IngredientCorrection;
use tracing::{debug, instrument, warn};

use super::prompts;
use crate::llm::{schema, ContentRequest, GenerativeModel};

#[derive(Debug, Deserialize)]
struct ValidationResponse {
    corrections: Vec<IngredientCorrection>,
}

/// Ask the model for corrections to `names`
///
/// Never fails: transport, status and parse errors are logged and treated as
/// "no corrections".
#[instrument(skip(model, names), fields(model = %model_name, count = names.len()))]
pub(super) async fn validate_ingredients(
    model: &dyn GenerativeModel,
    model_name: &str,
    names: &[String],
) -> Vec<IngredientCorrection> {
    if names.is_empty() {
        return Vec::new();
    }

    match request_corrections(model, model_name, names).await {
        Ok(corrections) => sanitize_corrections(names, corrections),
        Err(e) => {
            warn!(error = %e, "Ingredient validation failed, continuing without corrections");
            Vec::new()
        }
    }
}

async fn request_corrections(
    model: &dyn GenerativeModel,
    model_name: &str,
    names: &[String],
) -> AppResult<Vec<IngredientCorrection>> {
    if !model.capabilities(model_name).supports_json_mode() {
        return Err(AppError::new(
            ErrorCode::ConfigInvalid,
            format!("model '{model_name}' does not support structured output"),
        ));
    }

    let request = ContentRequest::new(model_name, prompts::validation_prompt(names))
        .with_response_schema(schema::validation_schema());
    let response = model.generate_content(&request).await?;
    let parsed: ValidationResponse = serde_json::from_str(&response.text)?;
    Ok(parsed.corrections)
}

/// Keep only corrections whose `original` is one of `names`, at most one per `original`
///
/// Suggestions are trimmed. Corrections that suggest nothing, or the original
/// unchanged, are dropped as well.
#[must_use]
pub fn sanitize_corrections(
    names: &[String],
    corrections: Vec<IngredientCorrection>,
) -> Vec<IngredientCorrection> {
    let mut seen = HashSet::new();
    corrections
        .into_iter()
        .filter_map(|mut c| {
            if !names.contains(&c.original) {
                debug!(original = %c.original, "Dropping correction for unknown ingredient");
                return None;
            }
            let suggested = c.suggested.trim();
            if suggested.is_empty() || suggested == c.original {
                return None;
            }
            c.suggested = suggested.to_owned();
            seen.insert(c.original.clone()).then_some(c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correction(original: &str, suggested: &str) -> IngredientCorrection {
        IngredientCorrection {
            original: original.to_owned(),
            suggested: suggested.to_owned(),
            reason: "typo".to_owned(),
        }
    }

    #[test]
    fn test_sanitize_drops_unknown_and_duplicate_originals() {
        let names = vec!["лык".to_owned(), "курица".to_owned()];
        let sanitized = sanitize_corrections(
            &names,
            vec![
                correction("лык", "лук"),
                correction("лык", "лак"),
                correction("морковка", "морковь"),
                correction("курица", "курица"),
            ],
        );
        assert_eq!(sanitized, vec![correction("лык", "лук")]);
    }

    #[test]
    fn test_sanitize_drops_blank_and_trims_suggestions() {
        let names = vec!["лык".to_owned(), "курица".to_owned(), "рыс".to_owned()];
        let sanitized = sanitize_corrections(
            &names,
            vec![
                correction("лык", "   "),
                correction("курица", " курица "),
                correction("рыс", " рис "),
            ],
        );
        assert_eq!(sanitized, vec![correction("рыс", "рис")]);
    }
}
