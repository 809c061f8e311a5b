// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `tailor_compile` crate.
//!
//! These cover the compiler's ordering, prefixing and de-duplication rules
//! over generated snapshots, plus concrete outputs for the starter snapshot.

use insta::assert_snapshot;
use proptest::prelude::*;
use tailor_compile::{MarkupOptions, class_source, compile, compile_to_string, generate_markup};
use tailor_state::{Breakpoint, NestedPatch, Side, StylePatch, StyleState, TextAlign};

const ALIGNS: [TextAlign; 4] = [
    TextAlign::Left,
    TextAlign::Center,
    TextAlign::Right,
    TextAlign::Justify,
];

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(String::from("  ")),
        "[0-9]{1,3}",
        "(red|#0ea5e9|rgb\\(1, 2, 3\\))",
    ]
}

fn degrees() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), -180.0..180.0_f64]
}

prop_compose! {
    fn style_state()(
        spacing in prop::collection::vec(token(), 8),
        size in prop::collection::vec(token(), 4),
        colors in prop::collection::vec(token(), 3),
        font_size in token(),
        align in prop::option::of(prop::sample::select(ALIGNS.to_vec())),
        rotations in prop::collection::vec(degrees(), 6),
        scale in prop_oneof![Just(100.0), 0.0..200.0_f64],
        opacity in prop_oneof![Just(100.0), 0.0..=100.0_f64],
        blur in prop::option::of(0.0..=50.0_f64),
        breakpoint in prop::sample::select(Breakpoint::ALL.to_vec()),
    ) -> StyleState {
        let mut state = StyleState::default();
        let sides = [Side::Top, Side::Right, Side::Bottom, Side::Left];
        for (i, side) in sides.into_iter().enumerate() {
            state.padding.set(side, spacing[i].clone());
            state.margin.set(side, spacing[i + 4].clone());
        }
        state.size.width = size[0].clone();
        state.size.height = size[1].clone();
        state.size.max_width = size[2].clone();
        state.size.max_height = size[3].clone();
        state.background.color = colors[0].clone();
        state.border.color = colors[1].clone();
        state.border.width = colors[2].clone();
        state.typography.font_size = font_size;
        state.typography.text_align = align;
        state.transforms.rotate = rotations[0];
        state.transforms.skew_x = rotations[1];
        state.transforms.scale = scale;
        state.transforms3d.rotate_x = rotations[2];
        state.transforms3d.rotate_z = rotations[3];
        state.transforms3d.perspective = rotations[4] / 10.0;
        state.opacity = opacity;
        state.blur = blur;
        state.backdrop_blur = blur.map(|b| 50.0 - b);
        state.breakpoint = breakpoint;
        state
    }
}

proptest! {
    #[test]
    fn compile_is_deterministic(state in style_state()) {
        prop_assert_eq!(compile_to_string(&state), compile_to_string(&state.clone()));
    }

    #[test]
    fn tokens_are_unique_and_single(state in style_state()) {
        let list = compile(&state);
        let tokens: Vec<&str> = list.iter().collect();
        for (i, token) in tokens.iter().enumerate() {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(char::is_whitespace), "token {token:?} has whitespace");
            prop_assert!(!tokens[..i].contains(token), "duplicate token {token:?}");
        }
    }

    #[test]
    fn breakpoint_prefixes_every_token(state in style_state()) {
        let mut base = state.clone();
        base.breakpoint = Breakpoint::Base;
        let mut auto = state.clone();
        auto.breakpoint = Breakpoint::Auto;
        let mut md = state;
        md.breakpoint = Breakpoint::Md;

        let unprefixed: Vec<String> = compile(&base).into_vec();
        prop_assert_eq!(&compile(&auto).into_vec(), &unprefixed);

        let expected: Vec<String> = unprefixed.iter().map(|t| format!("md:{t}")).collect();
        prop_assert_eq!(compile(&md).into_vec(), expected);
    }
}

#[test]
fn schema_default_compiles_to_empty() {
    assert_eq!(compile_to_string(&StyleState::default()), "");
}

#[test]
fn starter_padding_scenario() {
    let mut state = StyleState::starter();
    let before = compile_to_string(&state);
    assert_snapshot!(before, @"pb-3 pl-2 pr-2 text-[18px] font-semibold tracking-tight leading-normal text-left");
    assert!(!before.contains("pt-"));

    let mut edited = state.clone();
    NestedPatch::padding(Side::Top, "4").apply_to(&mut edited);
    assert_snapshot!(
        compile_to_string(&edited),
        @"pt-4 pb-3 pl-2 pr-2 text-[18px] font-semibold tracking-tight leading-normal text-left"
    );

    // Restoring the earlier snapshot restores the exact string.
    NestedPatch::padding(Side::Top, "").apply_to(&mut state);
    assert_eq!(compile_to_string(&state), before);
}

#[test]
fn opacity_sentinel_round_trip() {
    let mut state = StyleState::default();
    StylePatch::Opacity(50.0).apply_to(&mut state);
    let list = compile(&state);
    assert_eq!(list.iter().filter(|t| t.starts_with("opacity-")).count(), 1);
    assert!(list.contains("opacity-[0.50]"));

    StylePatch::Opacity(100.0).apply_to(&mut state);
    assert!(compile(&state).is_empty());
}

#[test]
fn coinciding_tokens_are_emitted_once() {
    let mut state = StyleState::default();
    state.border.color = "4px".into();
    state.border.width = "4".into();
    let list = compile(&state);
    assert_eq!(list.len(), 1);
    assert_eq!(list.to_string(), "border-[4px]");
}

#[test]
fn full_emission_order() {
    let state: StyleState = serde_json::from_str(
        r##"{
            "padding": {"top": "1", "right": "2", "bottom": "3", "left": "4"},
            "margin": {"top": "auto"},
            "size": {"width": "320", "maxHeight": "90"},
            "typography": {"fontSize": "14", "fontWeight": "bold", "textAlign": "justify"},
            "background": {"color": "#fff"},
            "border": {"color": "#000", "width": "1", "radius": "8"},
            "transforms": {"translateX": 4, "scale": 50},
            "transforms3d": {"rotateX": 10, "perspective": 5},
            "opacity": 75,
            "blur": 2,
            "backdropBlur": 3,
            "breakpoint": "lg"
        }"##,
    )
    .unwrap();
    assert_snapshot!(
        compile_to_string(&state),
        @"lg:pt-1 lg:pb-3 lg:pl-4 lg:pr-2 lg:mt-auto lg:w-[320px] lg:max-h-[90px] lg:text-[14px] lg:font-bold lg:text-justify lg:translate-x-[4px] lg:scale-[0.50] lg:[transform:rotateX(10deg)] lg:[perspective:500px] lg:opacity-[0.75] lg:blur-[2px] lg:backdrop-blur-[3px] lg:bg-[#fff] lg:border-[#000] lg:border-[1px] lg:rounded-[8px]"
    );
}

#[test]
fn starter_markup_prefers_captured_classes() {
    let state = StyleState::starter();
    let compiled = compile_to_string(&state);
    assert_snapshot!(
        generate_markup(&state, class_source(&state, &compiled), &MarkupOptions::default()),
        @r#"<h2 class="px-2 pb-3 text-[18px] md:text-[20px] font-semibold tracking-tight">Layers</h2>"#
    );
}
