use glam::Vec2;
use map_drag_measure::app::events::BUTTON_SECONDARY;
use map_drag_measure::app::{
    CursorStyle, EventResponse, EventTarget, KeyEvent, MapEvent, Modifiers, PointerEvent,
};
use map_drag_measure::core::Overlay;
use map_drag_measure::ui::ViewportSurface;
use map_drag_measure::{MapOptions, MapView, MeasureModifier, MeasureState};

/// 720×720-Viewport: Mitte (360, 360) = (0°, 0°), 0.25° pro Pixel.
fn map_with(options: MapOptions) -> MapView<ViewportSurface> {
    MapView::new(ViewportSurface::new(Vec2::new(720.0, 720.0)), options)
}

fn map() -> MapView<ViewportSurface> {
    map_with(MapOptions::default())
}

fn ctrl_down(map: &mut MapView<ViewportSurface>, x: f32, y: f32) -> EventResponse {
    map.dispatch(
        MapEvent::MouseDown(PointerEvent::primary(Vec2::new(x, y), Modifiers::CTRL)),
        EventTarget::Container,
    )
}

fn move_to(map: &mut MapView<ViewportSurface>, x: f32, y: f32, origin: EventTarget) {
    map.dispatch(MapEvent::MouseMove(PointerEvent::motion(Vec2::new(x, y))), origin);
}

fn up(map: &mut MapView<ViewportSurface>, x: f32, y: f32, origin: EventTarget) {
    map.dispatch(
        MapEvent::MouseUp(PointerEvent::primary(Vec2::new(x, y), Modifiers::NONE)),
        origin,
    );
}

fn tooltip_texts(map: &MapView<ViewportSurface>) -> Vec<String> {
    map.surface()
        .overlays
        .iter()
        .filter_map(|(_, overlay)| match overlay {
            Overlay::CircleMarker {
                tooltip: Some(tooltip),
                ..
            } => Some(tooltip.text.clone()),
            _ => None,
        })
        .collect()
}

fn state(map: &MapView<ViewportSurface>) -> MeasureState {
    map.drag_measure()
        .expect("Drag-Measure sollte installiert sein")
        .state()
}

#[test]
fn test_drag_east_along_equator_shows_bearing_and_distance() {
    let mut map = map();

    assert_eq!(ctrl_down(&mut map, 360.0, 360.0), EventResponse::Handled);
    assert_eq!(state(&map), MeasureState::Armed);
    assert!(!map.surface().map_dragging);
    assert_eq!(map.surface().cursor, CursorStyle::Crosshair);
    assert_eq!(map.surface().overlays.marker_count(), 1);

    move_to(&mut map, 400.0, 360.0, EventTarget::Container);

    assert_eq!(state(&map), MeasureState::Measuring);
    assert_eq!(map.surface().overlays.polyline_count(), 1);
    assert_eq!(map.surface().overlays.marker_count(), 2);
    // 10° auf dem Äquator ≈ 600.40 NM
    assert_eq!(
        tooltip_texts(&map),
        vec!["Bearing: 90\nDistance: 600.40 NM".to_string()]
    );
}

#[test]
fn test_release_clears_overlays_and_defers_moved_reset() {
    let mut map = map();
    ctrl_down(&mut map, 360.0, 360.0);
    move_to(&mut map, 360.0, 320.0, EventTarget::Container);
    up(&mut map, 360.0, 320.0, EventTarget::Container);

    assert!(map.surface().overlays.is_empty());
    assert!(map.surface().map_dragging);
    assert!(map.surface().text_selection);
    assert!(map.surface().image_drag);
    assert_eq!(map.surface().cursor, CursorStyle::Default);

    // Klick am Drag-Ende kann noch unterdrückt werden
    assert!(map.drag_measure_moved());
    assert_eq!(state(&map), MeasureState::ResetPending);

    assert_eq!(map.tick(), 1);
    assert!(!map.drag_measure_moved());
    assert_eq!(state(&map), MeasureState::Idle);
    assert_eq!(map.tick(), 0);
}

#[test]
fn test_session_follows_pointer_outside_container() {
    let mut map = map();
    ctrl_down(&mut map, 360.0, 360.0);

    move_to(&mut map, 1000.0, 360.0, EventTarget::Document);
    assert_eq!(map.surface().overlays.polyline_count(), 1);

    up(&mut map, 1000.0, 360.0, EventTarget::Document);
    assert!(map.surface().overlays.is_empty());
    assert_eq!(map.listeners().count_for("dragMeasure"), 1);
}

#[test]
fn test_press_outside_container_is_ignored() {
    let mut map = map();
    let response = map.dispatch(
        MapEvent::MouseDown(PointerEvent::primary(Vec2::new(10.0, 10.0), Modifiers::CTRL)),
        EventTarget::Document,
    );

    assert_eq!(response, EventResponse::Ignored);
    assert_eq!(state(&map), MeasureState::Idle);
    assert!(map.surface().overlays.is_empty());
}

#[test]
fn test_plain_drag_does_not_measure() {
    let mut map = map();
    let response = map.dispatch(
        MapEvent::MouseDown(PointerEvent::primary(Vec2::new(360.0, 360.0), Modifiers::NONE)),
        EventTarget::Container,
    );
    move_to(&mut map, 400.0, 360.0, EventTarget::Container);

    assert_eq!(response, EventResponse::Ignored);
    assert!(map.surface().overlays.is_empty());
    assert!(map.surface().map_dragging);
}

#[test]
fn test_escape_aborts_running_measurement() {
    let mut map = map();
    ctrl_down(&mut map, 360.0, 360.0);
    move_to(&mut map, 380.0, 380.0, EventTarget::Container);

    map.dispatch(MapEvent::KeyDown(KeyEvent::escape()), EventTarget::Document);

    assert!(map.surface().overlays.is_empty());
    assert!(map.surface().map_dragging);
    assert_eq!(map.listeners().count_for("dragMeasure"), 1);
    assert_eq!(map.tick(), 1);
    assert!(!map.drag_measure_moved());
}

#[test]
fn test_non_escape_key_is_left_to_host() {
    let mut map = map();
    ctrl_down(&mut map, 360.0, 360.0);
    move_to(&mut map, 400.0, 360.0, EventTarget::Container);

    let response = map.dispatch(MapEvent::KeyDown(KeyEvent::new(13)), EventTarget::Document);

    assert_eq!(response, EventResponse::Ignored);
    assert_eq!(state(&map), MeasureState::Measuring);
    assert_eq!(map.surface().overlays.polyline_count(), 1);
}

#[test]
fn test_context_menu_consumed_only_while_measuring() {
    let mut map = map();
    let secondary =
        PointerEvent::with_button(Vec2::new(360.0, 360.0), BUTTON_SECONDARY, Modifiers::NONE);

    assert_eq!(
        map.dispatch(MapEvent::ContextMenu(secondary), EventTarget::Container),
        EventResponse::Ignored
    );

    ctrl_down(&mut map, 360.0, 360.0);
    assert_eq!(
        map.dispatch(MapEvent::ContextMenu(secondary), EventTarget::Container),
        EventResponse::Consumed
    );
}

#[test]
fn test_disabled_option_installs_no_handler() {
    let mut map = map_with(MapOptions {
        drag_measure: false,
        ..MapOptions::default()
    });

    assert!(map.drag_measure().is_none());
    assert!(map.listeners().is_empty());
    assert_eq!(ctrl_down(&mut map, 360.0, 360.0), EventResponse::Ignored);
    assert!(map.surface().overlays.is_empty());
    assert!(!map.drag_measure_moved());
}

#[test]
fn test_disable_handler_keeps_running_session() {
    let mut map = map();
    ctrl_down(&mut map, 360.0, 360.0);

    assert!(map.disable_handler("dragMeasure"));
    move_to(&mut map, 400.0, 360.0, EventTarget::Container);
    assert_eq!(map.surface().overlays.polyline_count(), 1);

    up(&mut map, 400.0, 360.0, EventTarget::Container);
    assert!(map.surface().overlays.is_empty());
    assert!(map.listeners().is_empty());

    // Neue Messung startet erst nach erneutem Aktivieren
    assert_eq!(ctrl_down(&mut map, 360.0, 360.0), EventResponse::Ignored);
    assert!(map.enable_handler("dragMeasure"));
    assert_eq!(ctrl_down(&mut map, 360.0, 360.0), EventResponse::Handled);
}

#[test]
fn test_unload_aborts_session_and_ignores_later_events() {
    let mut map = map();
    ctrl_down(&mut map, 360.0, 360.0);
    move_to(&mut map, 400.0, 360.0, EventTarget::Container);

    map.unload();

    assert!(map.is_unloaded());
    assert!(map.surface().overlays.is_empty());
    assert!(map.surface().map_dragging);
    assert!(map.listeners().is_empty());
    assert_eq!(map.scheduler().pending_count(), 0);
    assert_eq!(ctrl_down(&mut map, 360.0, 360.0), EventResponse::Ignored);

    // Zweites Entladen ist wirkungslos
    map.unload();
    assert!(map.is_unloaded());
}

#[test]
fn test_shift_modifier_from_toml() {
    let options = MapOptions::from_toml_str(
        r#"
        [measure]
        modifier = "Shift"
        "#,
    )
    .expect("TOML sollte parsen");
    assert_eq!(options.measure.modifier, MeasureModifier::Shift);
    let mut map = map_with(options);

    assert_eq!(ctrl_down(&mut map, 360.0, 360.0), EventResponse::Ignored);

    let shift = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };
    let response = map.dispatch(
        MapEvent::MouseDown(PointerEvent::primary(Vec2::new(360.0, 360.0), shift)),
        EventTarget::Container,
    );
    assert_eq!(response, EventResponse::Handled);
}

#[test]
fn test_panned_camera_changes_measured_points() {
    let mut map = map();
    map.surface_mut()
        .camera
        .look_at(map_drag_measure::GeoPoint::new(45.0, 0.0));

    ctrl_down(&mut map, 360.0, 360.0);
    move_to(&mut map, 360.0, 320.0, EventTarget::Container);

    let measurement = map
        .drag_measure()
        .and_then(|m| m.last_measurement())
        .copied()
        .expect("Messung sollte vorliegen");
    approx::assert_relative_eq!(measurement.start.lat, 45.0, epsilon = 1e-9);
    approx::assert_relative_eq!(measurement.end.lat, 55.0, epsilon = 1e-9);
    assert_eq!(measurement.label().bearing, "0");
}
