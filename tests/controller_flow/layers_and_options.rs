use glam::DVec2;
use hover_select::host::memory::MemoryLayer;
use hover_select::host::SelectionSink;
use hover_select::{
    CrsId, FeatureGeometry, GeometryKind, HoverIntent, HoverOptions, LayerFilterMode, LayerId,
    LayerInfo, SelectionMode,
};

use super::{point_layer, point_layer_in, Fixture};

#[test]
fn failed_crs_transform_skips_only_that_layer() {
    let mut fx = Fixture::new(SelectionMode::Add, 10.0);
    fx.registry.add_layer(point_layer("ok", &[(1, 0.0, 0.0)]));
    let mut broken = point_layer_in("broken", CrsId::new("EPSG:99999"), &[(5, 0.0, 0.0)]);
    broken.set_selected_ids([9].into_iter().collect());
    fx.registry.add_layer(broken);
    fx.activate();

    fx.hover_at(DVec2::ZERO);

    assert_eq!(fx.selected("ok"), vec![1]);
    assert_eq!(fx.selected("broken"), vec![9]);
    let report = fx.state.last_report.as_ref().unwrap();
    assert_eq!(report.skipped, vec![LayerId::new("broken")]);
    assert_eq!(fx.status.last(), Some(1));
}

#[test]
fn layer_in_other_crs_is_queried_with_transformed_geometry() {
    let mut fx = Fixture::new(SelectionMode::Add, 10.0);
    let local = CrsId::new("LOCAL:1");
    fx.transformer
        .register(CrsId::new(super::MAP_CRS), local.clone(), 2.0, DVec2::new(1000.0, 0.0));
    // Karte (0,0) entspricht lokal (1000,0); Radius 10 wird lokal zu 20
    fx.registry.add_layer(point_layer_in(
        "local",
        local,
        &[(1, 1015.0, 0.0), (2, 1000.0, 25.0)],
    ));
    fx.activate();

    fx.hover_at(DVec2::ZERO);

    assert_eq!(fx.selected("local"), vec![1]);
}

#[test]
fn deleted_feature_is_not_selected_after_edit_event() {
    let mut fx = Fixture::new(SelectionMode::Add, 10.0);
    fx.registry
        .add_layer(point_layer("pts", &[(1, 0.0, 0.0), (2, 2.0, 2.0)]));
    fx.activate();

    fx.registry
        .layer_mut(&LayerId::new("pts"))
        .unwrap()
        .remove_feature(1);
    fx.send(HoverIntent::LayerFeaturesEdited {
        id: LayerId::new("pts"),
    });
    fx.hover_at(DVec2::ZERO);

    assert_eq!(fx.selected("pts"), vec![2]);
    let outcome = &fx.state.last_report.as_ref().unwrap().layers[&LayerId::new("pts")];
    assert_eq!(outcome.candidates, vec![2]);
}

#[test]
fn added_feature_is_found_after_edit_event() {
    let mut fx = Fixture::new(SelectionMode::Add, 10.0);
    fx.registry.add_layer(point_layer("pts", &[(1, 50.0, 50.0)]));
    fx.activate();

    fx.registry
        .layer_mut(&LayerId::new("pts"))
        .unwrap()
        .insert_feature(2, FeatureGeometry::Point(DVec2::new(1.0, 0.0)));
    fx.send(HoverIntent::LayerFeaturesEdited {
        id: LayerId::new("pts"),
    });
    fx.hover_at(DVec2::ZERO);

    assert_eq!(fx.selected("pts"), vec![2]);
}

#[test]
fn added_and_removed_layers_change_the_index_set() {
    let mut fx = Fixture::new(SelectionMode::Add, 10.0);
    fx.registry.add_layer(point_layer("a", &[(1, 0.0, 0.0)]));
    fx.activate();

    fx.registry.add_layer(point_layer("b", &[(1, 1.0, 1.0)]));
    fx.send(HoverIntent::LayersAdded {
        ids: vec![LayerId::new("b")],
    });
    fx.hover_at(DVec2::ZERO);
    assert_eq!(fx.selected("b"), vec![1]);
    assert_eq!(fx.state.index_store.len(), 2);

    fx.registry.remove_layer(&LayerId::new("a"));
    fx.send(HoverIntent::LayersRemoved {
        ids: vec![LayerId::new("a")],
    });
    assert!(fx.state.index_store.get(&LayerId::new("a")).is_none());
}

#[test]
fn unindexable_layer_is_skipped_without_aborting_others() {
    let mut fx = Fixture::new(SelectionMode::Add, 10.0);
    fx.registry.add_layer(MemoryLayer::new(LayerInfo::vector(
        "table",
        GeometryKind::NoGeometry,
        CrsId::new(super::MAP_CRS),
    )));
    let mut broken = point_layer("broken", &[(1, 0.0, 0.0)]);
    broken.fail_reads = true;
    fx.registry.add_layer(broken);
    fx.registry.add_layer(point_layer("ok", &[(1, 0.0, 0.0)]));
    fx.activate();

    fx.hover_at(DVec2::ZERO);

    assert_eq!(fx.state.index_store.len(), 1);
    assert_eq!(fx.selected("ok"), vec![1]);
    assert!(fx.selected("broken").is_empty());
}

#[test]
fn active_layer_only_follows_the_active_layer() {
    let mut fx = Fixture::new(SelectionMode::Add, 10.0);
    fx.registry.add_layer(point_layer("a", &[(1, 0.0, 0.0)]));
    fx.registry.add_layer(point_layer("b", &[(1, 0.0, 0.0)]));
    fx.registry.set_active(Some(LayerId::new("a")));
    fx.state.options.layer_filter_mode = LayerFilterMode::ActiveLayerOnly;
    fx.activate();
    assert_eq!(fx.state.index_store.len(), 1);

    fx.hover_at(DVec2::ZERO);
    assert_eq!(fx.selected("a"), vec![1]);
    assert!(fx.selected("b").is_empty());

    fx.registry.set_active(Some(LayerId::new("b")));
    fx.send(HoverIntent::ActiveLayerChanged);
    assert!(fx.state.index_store.get(&LayerId::new("a")).is_none());

    fx.hover_at(DVec2::ZERO);
    assert_eq!(fx.selected("b"), vec![1]);
}

#[test]
fn visibility_change_rescopes_in_visible_mode() {
    let mut fx = Fixture::new(SelectionMode::Add, 10.0);
    fx.registry.add_layer(point_layer("a", &[(1, 0.0, 0.0)]));
    fx.activate();

    fx.registry
        .layer_mut(&LayerId::new("a"))
        .unwrap()
        .info
        .visible = false;
    fx.send(HoverIntent::LayerFlagsChanged {
        id: LayerId::new("a"),
    });
    assert!(fx.state.index_store.is_empty());

    fx.hover_at(DVec2::ZERO);
    assert!(fx.selected("a").is_empty());
}

#[test]
fn invalid_options_are_rejected_and_state_is_kept() {
    let mut fx = Fixture::new(SelectionMode::Add, 10.0);
    let before = fx.state.options.clone();
    let invalid = HoverOptions {
        radius_pixels: 0,
        ..HoverOptions::default()
    };

    let mut host = hover_select::HoverHost {
        map: &fx.view,
        layers: &mut fx.registry,
        crs: &fx.transformer,
        status: &mut fx.status,
    };
    let result = fx.controller.handle_intent(
        &mut fx.state,
        &mut host,
        HoverIntent::OptionsChanged { options: invalid },
    );

    assert!(result.is_err());
    assert_eq!(fx.state.options, before);
}

#[test]
fn filter_mode_change_rebuilds_indexes() {
    let mut fx = Fixture::new(SelectionMode::Add, 10.0);
    fx.registry.add_layer(point_layer("a", &[(1, 0.0, 0.0)]));
    let mut hidden = point_layer("b", &[(1, 0.0, 0.0)]);
    hidden.info.visible = false;
    fx.registry.add_layer(hidden);
    fx.activate();
    assert_eq!(fx.state.index_store.len(), 1);

    let options = HoverOptions {
        layer_filter_mode: LayerFilterMode::AllSelectable,
        ..fx.state.options.clone()
    };
    fx.send(HoverIntent::OptionsChanged { options });

    assert_eq!(fx.state.index_store.len(), 2);
}

#[test]
fn clear_selection_empties_all_layers() {
    let mut fx = Fixture::new(SelectionMode::Add, 10.0);
    let mut a = point_layer("a", &[(1, 0.0, 0.0), (2, 1.0, 0.0)]);
    a.set_selected_ids([1, 2].into_iter().collect());
    let mut b = point_layer("b", &[(1, 0.0, 0.0)]);
    b.info.selectable = false;
    b.set_selected_ids([1].into_iter().collect());
    fx.registry.add_layer(a);
    fx.registry.add_layer(b);

    fx.send(HoverIntent::ClearSelectionRequested);

    assert!(fx.selected("a").is_empty());
    assert!(fx.selected("b").is_empty());
    assert_eq!(
        fx.state.status_message.as_deref(),
        Some("Selektion aufgehoben (3 Features)")
    );
}

#[test]
fn manual_rebuild_reports_indexed_layers() {
    let mut fx = Fixture::new(SelectionMode::Add, 10.0);
    fx.registry.add_layer(point_layer("a", &[(1, 0.0, 0.0)]));
    fx.registry.add_layer(point_layer("b", &[(1, 0.0, 0.0)]));
    fx.activate();

    fx.send(HoverIntent::RebuildIndexesRequested);

    assert_eq!(fx.state.index_store.len(), 2);
    assert_eq!(
        fx.state.status_message.as_deref(),
        Some("2 Spatial-Index(e) neu aufgebaut")
    );
}

#[test]
fn active_layer_switch_without_event_rescopes_at_query_time() {
    let mut fx = Fixture::new(SelectionMode::Add, 10.0);
    fx.registry.add_layer(point_layer("a", &[(1, 0.0, 0.0)]));
    fx.registry.add_layer(point_layer("b", &[(1, 0.0, 0.0)]));
    fx.registry.set_active(Some(LayerId::new("a")));
    fx.state.options.layer_filter_mode = LayerFilterMode::ActiveLayerOnly;
    fx.activate();
    assert!(fx.state.index_store.get(&LayerId::new("a")).is_some());

    // Kein ActiveLayerChanged-Intent: der Zyklus selbst muss umschalten
    fx.registry.set_active(Some(LayerId::new("b")));
    fx.hover_at(DVec2::ZERO);

    assert_eq!(fx.selected("b"), vec![1]);
    assert!(fx.selected("a").is_empty());
    let report = fx.state.last_report.as_ref().unwrap();
    assert_eq!(
        report.layers.keys().cloned().collect::<Vec<_>>(),
        vec![LayerId::new("b")]
    );
    assert!(fx.state.index_store.get(&LayerId::new("a")).is_none());
    assert!(fx.state.index_store.get(&LayerId::new("b")).is_some());
}

#[test]
fn rebuild_request_while_inactive_builds_nothing() {
    let mut fx = Fixture::new(SelectionMode::Add, 10.0);
    fx.registry.add_layer(point_layer("a", &[(1, 0.0, 0.0)]));

    fx.send(HoverIntent::RebuildIndexesRequested);
    assert!(fx.state.index_store.is_empty());
    assert!(fx.state.command_log.is_empty());

    fx.activate();
    fx.send(HoverIntent::DeactivateRequested);
    fx.send(HoverIntent::RebuildIndexesRequested);
    assert!(fx.state.index_store.is_empty());
}

#[test]
fn rejected_options_are_not_logged_as_executed() {
    let mut fx = Fixture::new(SelectionMode::Add, 10.0);
    let invalid = HoverOptions {
        circle_segments: 1_000_000_000,
        ..HoverOptions::default()
    };

    let mut host = hover_select::HoverHost {
        map: &fx.view,
        layers: &mut fx.registry,
        crs: &fx.transformer,
        status: &mut fx.status,
    };
    let result = fx.controller.handle_intent(
        &mut fx.state,
        &mut host,
        HoverIntent::OptionsChanged { options: invalid },
    );

    assert!(result.is_err());
    assert!(fx.state.command_log.is_empty());
}
