// ABOUTME: Free-text ingredient entry: comma-delimited tag commits and pending-input merging
// ABOUTME: Operates on a tag list plus the not-yet-committed text next to it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tag Entry
//!
//! An ingredient field is a [`TagList`] plus the text the user is still typing.
//! Typing a comma or submitting commits the text as one tag; starting a
//! generation merges whatever is left, split on commas.

use smartchef_core::models::TagList;

/// Split comma-separated input into trimmed, non-empty names
#[must_use]
pub fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Commit `text` as a single tag, stripping one trailing comma
///
/// Returns whether a non-blank tag was produced; duplicates count as produced
/// but leave the list unchanged.
pub fn commit(tags: &mut TagList, text: &str) -> bool {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix(',').unwrap_or(trimmed).trim();
    if trimmed.is_empty() {
        return false;
    }
    tags.push(trimmed);
    true
}

/// Apply a change of the text field
///
/// Text ending with a comma is committed and the field cleared; anything else
/// becomes the pending text.
pub fn on_input(tags: &mut TagList, pending: &mut String, text: &str) {
    if text.ends_with(',') {
        if commit(tags, text) {
            pending.clear();
        }
    } else {
        text.clone_into(pending);
    }
}

/// Commit the pending text as one tag (Enter or focus loss)
pub fn on_submit(tags: &mut TagList, pending: &mut String) {
    if commit(tags, pending) {
        pending.clear();
    }
}

/// Merge the pending text into `tags`, split on commas, and clear it
///
/// New names are appended after existing tags; duplicates are skipped.
/// Returns how many tags were added.
pub fn merge_pending(tags: &mut TagList, pending: &mut String) -> usize {
    let before = tags.len();
    tags.extend(split_tags(pending));
    pending.clear();
    tags.len() - before
}
