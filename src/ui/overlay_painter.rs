//! Zeichnet Graticule und Mess-Overlays in den Viewport.

use super::surface::ViewportSurface;
use crate::core::{GeoPoint, Overlay, OverlayPane, Tooltip};
use glam::Vec2;

/// Schriftgröße des Tooltips
const TOOLTIP_FONT_SIZE: f32 = 13.0;
/// Innenabstand des Tooltips in Pixeln
const TOOLTIP_PADDING: f32 = 4.0;
/// Abstand Tooltip ↔ Marker in Pixeln
const TOOLTIP_OFFSET: egui::Vec2 = egui::vec2(8.0, -8.0);

fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(color[0], color[1], color[2], color[3]).into()
}

fn to_pos(rect: egui::Rect, local: Vec2) -> egui::Pos2 {
    rect.min + egui::vec2(local.x, local.y)
}

/// Wählt den Linienabstand des Gradnetzes so, dass ca. 60 px zwischen Linien liegen.
fn graticule_step(degrees_per_pixel: f64) -> f64 {
    const STEPS: [f64; 9] = [0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0, 15.0, 30.0];
    let wanted = degrees_per_pixel * 60.0;
    STEPS
        .iter()
        .copied()
        .find(|step| *step >= wanted)
        .unwrap_or(30.0)
}

/// Zeichnet ein Längen-/Breitengrad-Netz als Orientierung.
pub fn draw_graticule(painter: &egui::Painter, rect: egui::Rect, surface: &ViewportSurface) {
    let size = surface.viewport_size;
    let top_left = surface.camera.screen_to_geo(Vec2::ZERO, size);
    let bottom_right = surface.camera.screen_to_geo(size, size);
    let step = graticule_step(surface.camera.degrees_per_pixel(size.y));
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(70));

    let mut lng = (top_left.lng / step).floor() * step;
    while lng <= bottom_right.lng {
        let x = surface.geo_to_screen(GeoPoint::new(0.0, lng)).x;
        painter.line_segment(
            [to_pos(rect, Vec2::new(x, 0.0)), to_pos(rect, Vec2::new(x, size.y))],
            stroke,
        );
        lng += step;
    }

    let mut lat = (bottom_right.lat / step).floor() * step;
    while lat <= top_left.lat {
        let y = surface.geo_to_screen(GeoPoint::new(lat, 0.0)).y;
        painter.line_segment(
            [to_pos(rect, Vec2::new(0.0, y)), to_pos(rect, Vec2::new(size.x, y))],
            stroke,
        );
        lat += step;
    }
}

/// Zeichnet alle Overlays; Tooltips landen immer über den übrigen Overlays.
pub fn draw_overlays(painter: &egui::Painter, rect: egui::Rect, surface: &ViewportSurface) {
    let mut tooltips: Vec<(egui::Pos2, &Tooltip)> = Vec::new();

    // Pane-Reihenfolge: Overlay-Pane zuerst, Tooltip-Pane darüber
    for pane in [OverlayPane::Overlay, OverlayPane::Tooltip] {
        for (_, overlay) in surface.overlays.iter() {
            if overlay.pane() != pane {
                continue;
            }
            match overlay {
                Overlay::Polyline { points, style } => {
                    let screen: Vec<egui::Pos2> = points
                        .iter()
                        .map(|p| to_pos(rect, surface.geo_to_screen(*p)))
                        .collect();
                    let stroke = egui::Stroke::new(style.weight, to_color32(style.color));
                    match style.dash_array.as_slice() {
                        [dash, gap, ..] => {
                            painter.extend(egui::Shape::dashed_line(&screen, stroke, *dash, *gap));
                        }
                        _ => {
                            painter.add(egui::Shape::line(screen, stroke));
                        }
                    }
                }
                Overlay::CircleMarker {
                    center,
                    style,
                    tooltip,
                } => {
                    let pos = to_pos(rect, surface.geo_to_screen(*center));
                    painter.circle_stroke(
                        pos,
                        style.radius,
                        egui::Stroke::new(1.5, to_color32(style.color)),
                    );
                    if let Some(tooltip) = tooltip {
                        tooltips.push((pos, tooltip));
                    }
                }
            }
        }
    }

    for (anchor, tooltip) in tooltips {
        draw_tooltip(painter, anchor, tooltip);
    }
}

fn draw_tooltip(painter: &egui::Painter, anchor: egui::Pos2, tooltip: &Tooltip) {
    let galley = painter.layout_no_wrap(
        tooltip.text.clone(),
        egui::FontId::proportional(TOOLTIP_FONT_SIZE),
        egui::Color32::BLACK,
    );
    let size = galley.size() + egui::vec2(TOOLTIP_PADDING, TOOLTIP_PADDING) * 2.0;
    let top_left = anchor + TOOLTIP_OFFSET - egui::vec2(0.0, size.y);
    let frame = egui::Rect::from_min_size(top_left, size);

    painter.rect_filled(frame, 3.0, egui::Color32::from_white_alpha(230));
    painter.rect_stroke(
        frame,
        3.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(120)),
        egui::StrokeKind::Inside,
    );
    painter.galley(
        top_left + egui::vec2(TOOLTIP_PADDING, TOOLTIP_PADDING),
        galley,
        egui::Color32::BLACK,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graticule_step_targets_sixty_pixels() {
        assert_eq!(graticule_step(0.1), 10.0);
        assert_eq!(graticule_step(0.001), 0.1);
        assert_eq!(graticule_step(10.0), 30.0);
    }
}
