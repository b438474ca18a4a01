//! Hover-Select Demo.
//!
//! Spielt eine synthetische Mausspur über zwei Vektor-Layern in
//! unterschiedlichen KBS ab und loggt die resultierende Selektion.

use std::time::{Duration, Instant};

use glam::DVec2;
use hover_select::host::memory::{
    AffineCrsTransformer, MemoryLayer, MemoryLayerRegistry, StatusLog,
};
use hover_select::{
    CrsId, FeatureGeometry, GeometryKind, HoverController, HoverHost, HoverIntent, HoverOptions,
    HoverState, LayerInfo, MapView,
};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Hover-Select Demo v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = HoverOptions::load_from_file(&HoverOptions::config_path());
    let map_crs = CrsId::new("EPSG:3857");
    let local_crs = CrsId::new("LOCAL:grid");

    let mut transformer = AffineCrsTransformer::new();
    transformer.register(map_crs.clone(), local_crs.clone(), 0.1, DVec2::new(500.0, 500.0));

    let mut registry = MemoryLayerRegistry::new();
    registry.add_layer(point_grid(&map_crs));
    registry.add_layer(road_layer(&local_crs));

    let view = MapView::new(map_crs, DVec2::new(1280.0, 720.0));
    let mut status = StatusLog::default();
    let mut host = HoverHost {
        map: &view,
        layers: &mut registry,
        crs: &transformer,
        status: &mut status,
    };

    let mut state = HoverState::new(options);
    let mut controller = HoverController::new();
    controller.handle_intent(&mut state, &mut host, HoverIntent::ActivateRequested)?;

    // Mausspur: diagonal über den Viewport, 4ms pro Event, Pausen nach je 10 Events
    let mut now = Instant::now();
    for step in 0..60u32 {
        let screen_pos = DVec2::new(200.0 + 15.0 * f64::from(step), 100.0 + 8.0 * f64::from(step));
        controller.handle_intent(
            &mut state,
            &mut host,
            HoverIntent::PointerMoved {
                screen_pos,
                at: now,
            },
        )?;
        now += if step % 10 == 9 {
            state.debounce.delay() + Duration::from_millis(1)
        } else {
            Duration::from_millis(4)
        };
        controller.handle_intent(&mut state, &mut host, HoverIntent::TimerTick { now })?;
    }

    controller.handle_intent(&mut state, &mut host, HoverIntent::DeactivateRequested)?;

    log::info!(
        "{} Hover-Zyklen, zuletzt {} Treffer",
        status.reports.len(),
        status.last().unwrap_or(0)
    );
    for id in ["points", "roads"] {
        if let Some(layer) = registry.layer(&id.into()) {
            log::info!("Layer {}: {} Feature(s) selektiert", id, layer.selected().len());
        }
    }

    Ok(())
}

/// Punktraster im Karten-KBS.
fn point_grid(crs: &CrsId) -> MemoryLayer {
    let mut layer = MemoryLayer::new(LayerInfo::vector("points", GeometryKind::Point, crs.clone()));
    let mut id = 0;
    for x in (-1000..=1000).step_by(25) {
        for y in (-600..=600).step_by(25) {
            id += 1;
            layer.insert_feature(id, FeatureGeometry::Point(DVec2::new(f64::from(x), f64::from(y))));
        }
    }
    layer
}

/// Horizontale Linien in einem lokalen KBS.
fn road_layer(crs: &CrsId) -> MemoryLayer {
    let mut layer = MemoryLayer::new(LayerInfo::vector("roads", GeometryKind::Line, crs.clone()));
    for row in 0..20u64 {
        let y = 440.0 + 6.0 * row as f64;
        layer.insert_feature(
            row + 1,
            FeatureGeometry::LineString(vec![DVec2::new(400.0, y), DVec2::new(600.0, y)]),
        );
    }
    layer
}
