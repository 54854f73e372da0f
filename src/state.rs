use std::path::{Path, PathBuf};

use eframe::egui::Color32;

use crate::color::generate_palette;
use crate::data::filter::{ColumnFilter, visible_columns};
use crate::data::loader::load_file;
use crate::data::model::NumericMatrix;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded matrix (None until a file is loaded).
    pub matrix: Option<NumericMatrix>,

    /// File the matrix was read from.
    pub source: Option<PathBuf>,

    /// Columns unchecked in the side panel.
    pub hidden_columns: ColumnFilter,

    /// Columns passing the current selection (cached).
    pub visible_columns: Vec<usize>,

    /// One colour per column.
    pub palette: Vec<Color32>,

    /// Rescale every column to [0, 1] before drawing.
    pub minmax_scaling: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded matrix, reset the column selection and colours.
    pub fn set_matrix(&mut self, source: PathBuf, matrix: NumericMatrix) {
        self.hidden_columns.clear();
        self.visible_columns = (0..matrix.column_count()).collect();
        self.palette = generate_palette(matrix.column_count());

        self.matrix = Some(matrix);
        self.source = Some(source);
        self.status_message = None;
    }

    /// Read `path` and show it. On failure the current matrix stays and the
    /// error is surfaced in the status line.
    pub fn load(&mut self, path: &Path) {
        match load_file(path) {
            Ok(matrix) => self.set_matrix(path.to_path_buf(), matrix),
            Err(e) => {
                log::error!("Failed to load file: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Re-read the current source file.
    pub fn reload(&mut self) {
        if let Some(path) = self.source.clone() {
            self.load(&path);
        }
    }

    /// Recompute `visible_columns` after a selection change.
    pub fn refilter(&mut self) {
        if let Some(m) = &self.matrix {
            self.visible_columns = visible_columns(m, &self.hidden_columns);
        }
    }

    /// Show or hide a single column.
    pub fn toggle_column(&mut self, column: usize) {
        if !self.hidden_columns.remove(&column) {
            self.hidden_columns.insert(column);
        }
        self.refilter();
    }

    pub fn show_all(&mut self) {
        self.hidden_columns.clear();
        self.refilter();
    }

    pub fn hide_all(&mut self) {
        let n = self.matrix.as_ref().map_or(0, NumericMatrix::column_count);
        self.hidden_columns = (0..n).collect();
        self.refilter();
    }

    /// Colour assigned to `column`.
    pub fn color_for(&self, column: usize) -> Color32 {
        self.palette
            .get(column)
            .copied()
            .unwrap_or(Color32::LIGHT_BLUE)
    }
}
