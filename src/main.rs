use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use eframe::egui;

use plotnotify::app::ColumnPlotApp;
use plotnotify::data::loader;
use plotnotify::state::AppState;

/// Plot every column of a whitespace-delimited numeric file against row index.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path of the file to read in and plot from.
    #[arg(short = 'f', long = "filepath")]
    filepath: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Read before opening a window so bad input fails fast.
    let matrix = loader::load_file(&args.filepath)?;

    let title = match args.filepath.file_name() {
        Some(name) => format!("Column Plot – {}", name.to_string_lossy()),
        None => "Column Plot".to_owned(),
    };

    let mut state = AppState::default();
    state.set_matrix(args.filepath, matrix);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    // Blocks until the window is closed.
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(ColumnPlotApp::new(state)))),
    )
    .map_err(|e| anyhow!("plot window failed: {e}"))
}
