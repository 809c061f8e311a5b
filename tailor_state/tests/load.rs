// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for lenient snapshot loading.

use proptest::prelude::*;
use serde_json::{Value, json};
use tailor_state::{BLUR_MAX, Breakpoint, OPACITY_MAX, StyleState};

const KNOWN_KEYS: [&str; 17] = [
    "elementId",
    "elementTag",
    "textContent",
    "link",
    "tailwindClasses",
    "margin",
    "padding",
    "size",
    "typography",
    "background",
    "border",
    "transforms",
    "transforms3d",
    "opacity",
    "blur",
    "backdropBlur",
    "breakpoint",
];

const STRING_KEYS: [&str; 5] = [
    "elementId",
    "elementTag",
    "textContent",
    "link",
    "tailwindClasses",
];

fn merge(base: &StyleState, doc: &Value) -> tailor_state::LoadReport {
    StyleState::merge_json(base, &doc.to_string()).unwrap()
}

proptest! {
    #[test]
    fn restored_effects_stay_in_range(
        opacity in -1.0e6..1.0e6f64,
        blur in -1.0e6..1.0e6f64,
        backdrop in -1.0e6..1.0e6f64,
    ) {
        let doc = json!({"opacity": opacity, "blur": blur, "backdropBlur": backdrop});
        let report = merge(&StyleState::default(), &doc);
        prop_assert!(report.is_clean());

        let state = report.state;
        prop_assert!((0.0..=OPACITY_MAX).contains(&state.opacity));
        for radius in [state.blur, state.backdrop_blur] {
            let radius = radius.unwrap();
            prop_assert!((0.0..=BLUR_MAX).contains(&radius));
        }
    }

    #[test]
    fn unknown_keys_are_ignored(key in "[a-z]{1,10}", value in any::<i32>()) {
        prop_assume!(!KNOWN_KEYS.contains(&key.as_str()));
        let base = StyleState::starter();
        let report = merge(&base, &json!({ key: value }));
        prop_assert!(report.is_clean());
        prop_assert_eq!(report.state, base);
    }

    #[test]
    fn misshapen_string_fields_keep_base(
        key in prop::sample::select(STRING_KEYS.to_vec()),
        value in any::<i64>(),
    ) {
        let base = StyleState::starter();
        let report = merge(&base, &json!({ key: value, "opacity": 60 }));

        prop_assert_eq!(report.rejected, vec![key]);
        prop_assert_eq!(report.state.opacity, 60.0);
        prop_assert_eq!(report.state.element_tag.as_str(), "h2");
        prop_assert_eq!(report.state.text_content.as_str(), "Layers");
    }

    #[test]
    fn breakpoints_restore_by_wire_name(index in 0..Breakpoint::ALL.len()) {
        let breakpoint = Breakpoint::ALL[index];
        let report = merge(&StyleState::default(), &json!({"breakpoint": breakpoint.as_str()}));
        prop_assert_eq!(report.state.breakpoint, breakpoint);
    }
}

#[test]
fn nested_records_fill_missing_members() {
    let base = StyleState::starter();
    let report = merge(&base, &json!({"padding": {"top": "6"}}));
    assert!(report.is_clean());
    // The record is replaced as a whole; absent members take their defaults.
    assert_eq!(report.state.padding.top, "6");
    assert_eq!(report.state.padding.bottom, "");
    assert_eq!(report.state.typography, base.typography);
}

#[test]
fn persisted_form_restores_exactly() {
    let mut state = StyleState::starter();
    state.opacity = 35.0;
    state.breakpoint = Breakpoint::Xxl;
    state.link = String::from("/pricing");

    let json = state.to_json().unwrap();
    let report = StyleState::merge_json(&StyleState::default(), &json).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.state, state);
}
