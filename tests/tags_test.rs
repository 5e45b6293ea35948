// ABOUTME: Tests for comma-delimited ingredient entry
// ABOUTME: Covers commit-on-comma, submit, removal by index, and pending-input merging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use smartchef::flow::{transition, AppState, Event};
use smartchef::models::TagList;
use smartchef::tags::{merge_pending, on_input, on_submit};

#[test]
fn test_typing_keeps_text_pending_until_comma() {
    let mut tags = TagList::new();
    let mut pending = String::new();

    on_input(&mut tags, &mut pending, "кур");
    on_input(&mut tags, &mut pending, "курица");
    assert!(tags.is_empty());
    assert_eq!(pending, "курица");

    on_input(&mut tags, &mut pending, "курица,");
    assert_eq!(tags.as_slice(), ["курица"]);
    assert!(pending.is_empty());
}

#[test]
fn test_lone_comma_is_not_a_tag() {
    let mut tags = TagList::new();
    let mut pending = String::new();

    on_input(&mut tags, &mut pending, " ,");
    assert!(tags.is_empty());
}

#[test]
fn test_submit_commits_and_ignores_duplicates() {
    let mut tags: TagList = ["рис"].into_iter().collect();
    let mut pending = " рис ".to_owned();

    on_submit(&mut tags, &mut pending);
    assert_eq!(tags.as_slice(), ["рис"]);
    assert!(pending.is_empty());
}

#[test]
fn test_merge_pending_splits_and_counts() {
    let mut tags: TagList = ["рис"].into_iter().collect();
    let mut pending = "лук,  морковь ,, рис".to_owned();

    let added = merge_pending(&mut tags, &mut pending);

    assert_eq!(added, 2);
    assert_eq!(tags.as_slice(), ["рис", "лук", "морковь"]);
    assert!(pending.is_empty());
}

#[test]
fn test_field_events_update_filters() {
    let events = vec![
        Event::AvailableInputChanged("лук,".to_owned()),
        Event::AvailableInputChanged("рис".to_owned()),
        Event::AvailableInputSubmitted,
        Event::AvailableInputChanged("соль,".to_owned()),
        Event::RemoveAvailable(1),
        Event::ExcludedInputChanged("грибы,".to_owned()),
        Event::RemoveExcluded(5),
    ];
    let state = events
        .into_iter()
        .fold(AppState::default(), |state, event| transition(state, event).0);

    assert_eq!(
        state.filters.available_ingredients.as_slice(),
        ["лук", "соль"]
    );
    assert_eq!(state.filters.excluded_ingredients.as_slice(), ["грибы"]);
}
