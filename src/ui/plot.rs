use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::data::scale::min_max_scale;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Column plot (central panel)
// ---------------------------------------------------------------------------

/// Render one line per visible column against the row index.
pub fn column_plot(ui: &mut Ui, state: &AppState) {
    let matrix = match &state.matrix {
        Some(m) => m,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a file to plot  (File → Open…)");
            });
            return;
        }
    };

    if matrix.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("The file has no rows to plot");
        });
        return;
    }

    Plot::new("column_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Row")
        .y_axis_label(if state.minmax_scaling { "Value (scaled)" } else { "Value" })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for &col in &state.visible_columns {
                let mut series = matrix.column_series(col);
                if state.minmax_scaling {
                    min_max_scale(&mut series);
                }

                let line = Line::new(PlotPoints::from(series))
                    .name(format!("column {col}"))
                    .color(state.color_for(col))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
