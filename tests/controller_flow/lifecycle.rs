use std::time::Duration;

use glam::DVec2;
use hover_select::{HoverIntent, SelectionMode};

use super::{point_layer, Fixture};

#[test]
fn burst_of_motion_produces_one_query_at_last_position() {
    let mut fx = Fixture::new(SelectionMode::Add, 5.0);
    fx.registry
        .add_layer(point_layer("pts", &[(1, 0.0, 0.0), (2, 100.0, 0.0)]));
    fx.activate();

    for step in 0..=10 {
        fx.move_to(DVec2::new(10.0 * f64::from(step), 0.0));
        fx.advance(Duration::from_millis(2));
    }
    assert!(fx.status.reports.is_empty());

    fx.advance(Duration::from_millis(20));

    assert_eq!(fx.status.reports, vec![1]);
    assert_eq!(fx.selected("pts"), vec![2]);
}

#[test]
fn motion_after_quiescence_starts_a_new_cycle() {
    let mut fx = Fixture::new(SelectionMode::Add, 5.0);
    fx.registry
        .add_layer(point_layer("pts", &[(1, 0.0, 0.0), (2, 100.0, 0.0)]));
    fx.activate();

    fx.hover_at(DVec2::ZERO);
    fx.hover_at(DVec2::new(100.0, 0.0));

    assert_eq!(fx.status.reports, vec![1, 1]);
    assert_eq!(fx.selected("pts"), vec![1, 2]);
}

#[test]
fn deactivation_cancels_pending_query_and_releases_indexes() {
    let mut fx = Fixture::new(SelectionMode::Add, 5.0);
    fx.registry.add_layer(point_layer("pts", &[(1, 0.0, 0.0)]));
    fx.activate();
    fx.hover_at(DVec2::new(50.0, 50.0));
    assert!(!fx.state.index_store.is_empty());
    assert!(fx.state.last_query.is_some());

    fx.move_to(DVec2::ZERO);
    fx.send(HoverIntent::DeactivateRequested);
    fx.advance(Duration::from_millis(100));

    assert!(!fx.state.active);
    assert!(fx.state.next_wakeup().is_none());
    assert!(fx.state.index_store.is_empty());
    assert!(fx.state.last_query.is_none());
    assert!(fx.state.last_report.is_none());
    assert_eq!(fx.status.reports.len(), 1);
    assert!(fx.selected("pts").is_empty());
}

#[test]
fn motion_is_ignored_while_inactive() {
    let mut fx = Fixture::new(SelectionMode::Add, 5.0);
    fx.registry.add_layer(point_layer("pts", &[(1, 0.0, 0.0)]));

    fx.hover_at(DVec2::ZERO);

    assert!(fx.status.reports.is_empty());
    assert!(fx.state.command_log.is_empty());
}

#[test]
fn activation_indexes_eligible_layers_and_logs_commands() {
    let mut fx = Fixture::new(SelectionMode::Add, 5.0);
    fx.registry.add_layer(point_layer("a", &[(1, 0.0, 0.0)]));
    let mut hidden = point_layer("b", &[(1, 0.0, 0.0)]);
    hidden.info.visible = false;
    fx.registry.add_layer(hidden);

    fx.activate();

    assert!(fx.state.active);
    assert_eq!(fx.state.index_store.len(), 1);
    let last = fx
        .state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert_eq!(last, "Activate");
}

#[test]
fn query_geometry_is_kept_only_with_visual_feedback() {
    let mut fx = Fixture::new(SelectionMode::Add, 5.0);
    fx.registry.add_layer(point_layer("pts", &[(1, 0.0, 0.0)]));
    fx.activate();

    fx.hover_at(DVec2::new(3.0, 4.0));
    let query = fx.state.last_query.clone().expect("Query-Kreis erwartet");
    approx::assert_relative_eq!(query.center.x, 3.0, epsilon = 1e-9);
    approx::assert_relative_eq!(query.radius, 5.0);

    let mut options = fx.state.options.clone();
    options.show_query_geometry = false;
    fx.send(HoverIntent::OptionsChanged { options });
    assert!(fx.state.last_query.is_none());

    fx.hover_at(DVec2::ZERO);
    assert!(fx.state.last_query.is_none());
}

#[test]
fn status_message_is_cleared_when_nothing_matches() {
    let mut fx = Fixture::new(SelectionMode::Add, 5.0);
    fx.registry.add_layer(point_layer("pts", &[(1, 0.0, 0.0)]));
    fx.activate();

    fx.hover_at(DVec2::ZERO);
    assert_eq!(
        fx.state.status_message.as_deref(),
        Some("1 Feature(s) selektiert")
    );

    fx.hover_at(DVec2::new(100.0, 100.0));
    assert!(fx.state.status_message.is_none());
}

#[test]
fn idle_ticks_are_not_logged() {
    let mut fx = Fixture::new(SelectionMode::Add, 5.0);
    fx.registry.add_layer(point_layer("pts", &[(1, 0.0, 0.0)]));
    fx.activate();
    let after_activation = fx.state.command_log.len();

    for _ in 0..5 {
        fx.advance(Duration::from_millis(100));
    }
    assert_eq!(fx.state.command_log.len(), after_activation);

    fx.hover_at(DVec2::ZERO);
    let entries = fx.state.command_log.entries();
    assert_eq!(entries.len(), after_activation + 2);
    assert!(entries[after_activation].starts_with("RecordMotion"));
    assert!(entries[after_activation + 1].starts_with("RunDueQuery"));
}
