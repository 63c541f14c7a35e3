//! Map Drag-Measure Demo.
//!
//! Equirektangulare Kartenfläche mit Pan/Zoom; Ctrl + Ziehen misst
//! Peilung und Großkreis-Distanz.

use eframe::egui;
use glam::Vec2;
use map_drag_measure::app::CursorStyle;
use map_drag_measure::{ui, MapOptions, MapView};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Map Drag-Measure Demo v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Map Drag-Measure"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Map Drag-Measure",
            options,
            Box::new(|_cc| Ok(Box::new(DemoApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct DemoApp {
    map: MapView<ui::ViewportSurface>,
}

impl DemoApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = MapOptions::config_path();
        let options = MapOptions::load_from_file(&config_path);

        Self {
            map: MapView::new(ui::ViewportSurface::default(), options),
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Zurückgestellte Resets vom letzten Frame zuerst ausführen
        let ran = self.map.tick();

        if ui::render_status_bar(ctx, &self.map) {
            self.save_options();
        }

        let mut had_events = false;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                self.map.surface_mut().viewport_size = Vec2::new(rect.width(), rect.height());

                let events = ui::collect_map_events(ui, rect);
                had_events = !events.is_empty();
                for (event, origin) in events {
                    self.map.dispatch(event, origin);
                }

                self.handle_camera(ui, &response);

                let painter = ui.painter_at(rect);
                painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(24, 32, 40));
                ui::draw_graticule(&painter, rect, self.map.surface());
                ui::draw_overlays(&painter, rect, self.map.surface());

                if self.map.surface().cursor == CursorStyle::Crosshair {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
                }
            });

        // Ausstehender Reset braucht einen weiteren Frame
        if ran > 0 || had_events || self.map.scheduler().pending_count() > 0 {
            ctx.request_repaint();
        }
    }
}

impl DemoApp {
    fn save_options(&self) {
        let path = MapOptions::config_path();
        if let Err(e) = self.map.options().save_to_file(&path) {
            log::error!("Optionen konnten nicht gespeichert werden: {:#}", e);
        }
    }

    fn handle_camera(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let surface = self.map.surface();
        let can_pan = surface.map_dragging;
        let viewport_height = surface.viewport_size.y;
        let options = self.map.options();
        let (zoom_min, zoom_max, zoom_step) = (
            options.camera_zoom_min,
            options.camera_zoom_max,
            options.camera_scroll_zoom_step,
        );

        if can_pan && response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            self.map
                .surface_mut()
                .camera
                .pan_pixels(Vec2::new(delta.x, delta.y), viewport_height);
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                let factor = if scroll > 0.0 { zoom_step } else { 1.0 / zoom_step };
                self.map
                    .surface_mut()
                    .camera
                    .zoom_by(factor, zoom_min, zoom_max);
            }
        }
    }
}

impl Drop for DemoApp {
    fn drop(&mut self) {
        self.map.unload();
    }
}
