//! Status-Bar am unteren Bildschirmrand.

use crate::app::{MapView, MeasureState};
use crate::ui::ViewportSurface;

/// Rendert die Status-Bar. Gibt `true` zurück, wenn Optionen gespeichert werden sollen.
pub fn render_status_bar(ctx: &egui::Context, map: &MapView<ViewportSurface>) -> bool {
    let mut save_requested = false;
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let camera = &map.surface().camera;
            ui.label(format!(
                "Zoom: {:.2}x | Zentrum: ({:.4}, {:.4})",
                camera.zoom, camera.center.y, camera.center.x
            ));

            ui.separator();

            match map.drag_measure() {
                Some(measure) => {
                    let state = match measure.state() {
                        MeasureState::Idle => "bereit",
                        MeasureState::Armed => "gestartet",
                        MeasureState::Measuring => "misst",
                        MeasureState::ResetPending => "beendet",
                    };
                    ui.label(format!("Messen: {}", state));

                    if let Some(measurement) = measure.last_measurement() {
                        ui.separator();
                        ui.label(measurement.label().to_string().replace('\n', " | "));
                    }
                }
                None => {
                    ui.label("Messen: deaktiviert");
                }
            }

            ui.separator();
            ui.label(format!("Overlays: {}", map.surface().overlays.len()));

            ui.separator();
            if ui.button("Optionen speichern").clicked() {
                save_requested = true;
            }
        });
    });
    save_requested
}
