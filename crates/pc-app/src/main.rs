//! Parallel coordinates viewer
//!
//! Usage: `parcoords [file.csv]`. Without a file, synthetic demo data is shown.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use eframe::egui::{self, Color32, Pos2, Rect, Sense, Stroke, Ui};
use eframe::egui::emath::RectTransform;
use pc_core::{DataTable, LinkedSelection};
use pc_data::{NullConfig, NumericTable};
use pc_render::SceneBuffer;
use pc_views::{GestureState, NiceScale, ParallelCoordinatesPlot, PlotConfig, PlotFrame, VisibleSubset};
use tracing::{debug, info};

mod demo;

const PADDING: f32 = 40.0;

/// What a drag on the plot does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectionMode {
    Click,
    Rect,
    Brush,
}

impl SelectionMode {
    const ALL: [SelectionMode; 3] = [SelectionMode::Click, SelectionMode::Rect, SelectionMode::Brush];

    fn label(self) -> &'static str {
        match self {
            SelectionMode::Click => "Click",
            SelectionMode::Rect => "Rectangle",
            SelectionMode::Brush => "Brush",
        }
    }
}

/// Main application state
struct ParallelCoordinatesApp {
    plot: ParallelCoordinatesPlot<SceneBuffer>,
    source: String,
    mode: SelectionMode,
    /// Plot-space start of the current rectangle drag
    drag_origin: Option<Pos2>,
}

impl ParallelCoordinatesApp {
    fn new(table: NumericTable, source: String) -> Result<Self> {
        let rows = table.row_count();
        let plot = ParallelCoordinatesPlot::new(
            Arc::new(table),
            VisibleSubset::all(rows),
            LinkedSelection::new(rows),
            Box::new(NiceScale::default()),
            SceneBuffer::new(),
            PlotFrame::default(),
            PlotConfig::default(),
        )?;

        Ok(Self {
            plot,
            source,
            mode: SelectionMode::Click,
            drag_origin: None,
        })
    }

    fn controls_ui(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("{} ({} records)", self.source, self.plot.subset().len()));
            ui.separator();

            for mode in SelectionMode::ALL {
                ui.selectable_value(&mut self.mode, mode, mode.label());
            }
            ui.separator();

            let mut enabled = self.plot.selection_enabled();
            if ui.checkbox(&mut enabled, "Selection").changed() {
                self.plot.set_selection_enabled(enabled);
            }

            let mut scale_to_zero = self.plot.config().scale_to_zero;
            if ui.checkbox(&mut scale_to_zero, "Scale to zero").changed() {
                let config = PlotConfig {
                    scale_to_zero,
                    ..self.plot.config().clone()
                };
                self.plot.set_config(config);
            }
            ui.separator();

            if ui.button("Mask unselected").clicked() {
                self.mask_unselected();
            }
            if ui.button("Reset").clicked() {
                self.reset_selection();
            }
        });

        ui.horizontal_wrapped(|ui| {
            ui.label("Flip:");
            for axis in 0..self.plot.axes().len() {
                let state = &self.plot.axes()[axis];
                let label = if state.inverted { format!("{} ↓", state.name) } else { format!("{} ↑", state.name) };
                if ui.button(label).clicked() {
                    self.plot.flip_axis(axis);
                }
            }
        });
    }

    fn plot_ui(&mut self, ui: &mut Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        let screen = response.rect;

        let frame = PlotFrame::new(screen.width(), screen.height(), PADDING);
        if let Err(err) = self.plot.set_frame(frame) {
            debug!("Skipping plot: {}", err);
            return;
        }

        // Plot space has y pointing up
        let plot_rect = Rect::from_min_max(egui::pos2(0.0, frame.size.y), egui::pos2(frame.size.x, 0.0));
        let to_screen = RectTransform::from_to(plot_rect, screen);
        let to_plot = to_screen.inverse();

        if self.plot.is_stale() {
            self.plot.sync_linked_state();
        }

        let state = if response.drag_started() {
            Some(GestureState::Start)
        } else if response.drag_released() {
            Some(GestureState::End)
        } else if response.dragged() {
            Some(GestureState::Update)
        } else {
            None
        };

        if let (Some(state), Some(pointer)) = (state, response.interact_pointer_pos()) {
            let previous = to_plot.transform_pos(pointer - response.drag_delta());
            let current = to_plot.transform_pos(pointer);
            self.on_gesture(previous, current, state);
        }
        if response.drag_released() {
            self.drag_origin = None;
        }

        painter.rect_filled(screen, 0.0, ui.visuals().extreme_bg_color);
        self.plot.renderer().paint(&painter, to_screen);

        if let Some(pointer) = response.hover_pos() {
            let stroke = Stroke::new(1.0, Color32::WHITE);
            match (self.mode, self.drag_origin) {
                (SelectionMode::Rect, Some(origin)) => {
                    painter.rect_stroke(Rect::from_two_pos(to_screen.transform_pos(origin), pointer), 0.0, stroke);
                }
                (SelectionMode::Brush, _) => {
                    let radius = self.plot.config().brush_radius * to_screen.scale().x.abs();
                    painter.circle_stroke(pointer, radius, stroke);
                }
                _ => {}
            }
        }
    }

    /// Route one drag step, in plot space, to the active selection mode
    fn on_gesture(&mut self, previous: Pos2, current: Pos2, state: GestureState) {
        let changed = match self.mode {
            SelectionMode::Click => self.plot.on_pointer_gesture(current, state),
            SelectionMode::Rect => {
                if state == GestureState::Start {
                    self.drag_origin = Some(current);
                }
                match self.drag_origin {
                    Some(origin) => self.plot.on_rect_gesture(Rect::from_two_pos(origin, current)),
                    None => Vec::new(),
                }
            }
            SelectionMode::Brush => self.plot.on_brush_gesture(previous, current - previous, state),
        };

        if !changed.is_empty() {
            debug!("{} gesture ({:?}) restyled {} records", self.mode.label(), state, changed.len());
        }
    }

    fn mask_unselected(&mut self) {
        let linked = self.plot.linked().clone();
        let highlighted = linked.highlighted_records();
        if highlighted.is_empty() {
            return;
        }

        let mut keep = vec![false; linked.len()];
        for record in highlighted {
            keep[record] = true;
        }
        for (record, keep) in keep.into_iter().enumerate() {
            linked.set_masked(record, !keep);
        }
        info!("Masked every unselected record");
        self.plot.sync_linked_state();
    }

    fn reset_selection(&mut self) {
        let linked = self.plot.linked().clone();
        for record in 0..linked.len() {
            linked.set_masked(record, false);
        }
        linked.clear_highlights();
        self.plot.sync_linked_state();
    }
}

impl eframe::App for ParallelCoordinatesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls_ui(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.plot_ui(ui));
    }
}

/// Table from the CSV path argument, or the demo table
fn load_table() -> Result<(NumericTable, String)> {
    match std::env::args().nth(1) {
        Some(path) => {
            let table = pc_data::load_csv(Path::new(&path), &NullConfig::default())?;
            Ok((table, path))
        }
        None => {
            info!("No CSV file given, using demo data");
            Ok((demo::demo_table()?, "Demo data".to_string()))
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting parallel coordinates viewer");

    let (table, source) = load_table()?;
    let app = ParallelCoordinatesApp::new(table, source)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };

    eframe::run_native(
        "Parallel Coordinates",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
