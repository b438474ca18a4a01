use glam::DVec2;
use hover_select::host::SelectionSink;
use hover_select::{HoverOptions, LayerId, RadiusUnit, SelectionMode};

use super::{point_layer, Fixture};

#[test]
fn add_mode_selects_features_within_radius_and_reports_count() {
    let mut fx = Fixture::new(SelectionMode::Add, 10.0);
    fx.registry.add_layer(point_layer(
        "pts",
        &[(1, 3.0, 4.0), (2, -6.0, 0.0), (3, 15.0, 15.0)],
    ));
    fx.activate();

    fx.hover_at(DVec2::ZERO);

    assert_eq!(fx.selected("pts"), vec![1, 2]);
    assert_eq!(fx.status.last(), Some(2));
    let report = fx.state.last_report.as_ref().expect("Zyklus-Report erwartet");
    assert_eq!(report.total_matched, 2);
}

#[test]
fn toggle_mode_flips_overlapping_prior_selection() {
    let mut fx = Fixture::new(SelectionMode::Toggle, 10.0);
    // A=1 liegt außerhalb, B=2 und C=3 innerhalb des Radius
    let mut layer = point_layer("pts", &[(1, 50.0, 50.0), (2, 1.0, 1.0), (3, -2.0, 2.0)]);
    layer.set_selected_ids([1, 2].into_iter().collect());
    fx.registry.add_layer(layer);
    fx.activate();

    fx.hover_at(DVec2::ZERO);

    assert_eq!(fx.selected("pts"), vec![1, 3]);
}

#[test]
fn toggle_twice_at_same_position_restores_selection() {
    let mut fx = Fixture::new(SelectionMode::Toggle, 10.0);
    let mut layer = point_layer("pts", &[(1, 50.0, 50.0), (2, 1.0, 1.0), (3, -2.0, 2.0)]);
    layer.set_selected_ids([1, 2].into_iter().collect());
    fx.registry.add_layer(layer);
    fx.activate();

    fx.hover_at(DVec2::ZERO);
    fx.hover_at(DVec2::ZERO);

    assert_eq!(fx.selected("pts"), vec![1, 2]);
}

#[test]
fn replace_is_idempotent_and_clears_only_in_scope_layers() {
    let mut fx = Fixture::new(SelectionMode::Replace, 10.0);
    let mut in_scope = point_layer("near", &[(1, 0.0, 0.0), (2, 40.0, 0.0)]);
    in_scope.set_selected_ids([2].into_iter().collect());
    let mut hidden = point_layer("hidden", &[(7, 0.0, 0.0)]);
    hidden.info.visible = false;
    hidden.set_selected_ids([7].into_iter().collect());
    fx.registry.add_layer(in_scope);
    fx.registry.add_layer(hidden);
    fx.activate();

    fx.hover_at(DVec2::ZERO);
    let once = fx.selected("near");
    fx.hover_at(DVec2::ZERO);

    assert_eq!(once, vec![1]);
    assert_eq!(fx.selected("near"), once);
    assert_eq!(fx.selected("hidden"), vec![7]);
}

#[test]
fn add_mode_with_empty_match_leaves_selection_untouched() {
    let mut fx = Fixture::new(SelectionMode::Add, 10.0);
    let mut layer = point_layer("pts", &[(1, 0.0, 0.0)]);
    layer.set_selected_ids([1].into_iter().collect());
    fx.registry.add_layer(layer);
    fx.activate();

    fx.hover_at(DVec2::new(500.0, 500.0));

    assert_eq!(fx.selected("pts"), vec![1]);
    assert_eq!(fx.status.last(), Some(0));
    let outcome = &fx.state.last_report.as_ref().unwrap().layers[&LayerId::new("pts")];
    assert!(!outcome.selection_changed);
}

#[test]
fn pixel_radius_doubles_with_map_units_per_pixel() {
    let mut fx = Fixture::new(SelectionMode::Replace, 10.0);
    // Gleichmäßiges Raster mit Abstand 1
    let points: Vec<_> = (-40..=40)
        .flat_map(|x| (-40..=40).map(move |y| (x, y)))
        .enumerate()
        .map(|(i, (x, y))| (i as u64 + 1, f64::from(x), f64::from(y)))
        .collect();
    fx.registry.add_layer(point_layer("grid", &points));
    fx.state.options = HoverOptions {
        radius_unit: RadiusUnit::Pixels,
        radius_pixels: 20,
        selection_mode: SelectionMode::Replace,
        ..HoverOptions::default()
    };
    fx.view.zoom = 20.0;
    fx.activate();

    let mup_near = hover_select::MapContext::map_units_per_pixel(&fx.view);
    fx.hover_at(DVec2::ZERO);
    let near_count = fx.status.last().unwrap();
    let near_radius = fx.state.last_query.as_ref().unwrap().radius;

    fx.view.zoom_by(0.5);
    let mup_far = hover_select::MapContext::map_units_per_pixel(&fx.view);
    fx.hover_at(DVec2::ZERO);
    let far_count = fx.status.last().unwrap();
    let far_radius = fx.state.last_query.as_ref().unwrap().radius;

    approx::assert_relative_eq!(mup_far, 2.0 * mup_near);
    approx::assert_relative_eq!(far_radius, 2.0 * near_radius);
    assert!(near_count > 0);
    assert!(far_count >= near_count);
}
