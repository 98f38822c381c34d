use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, mpsc};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use colstats_cli::present::{PresentOptions, write_display};
use colstats_cli::worker::{LoopSummary, run_event_loop, spawn_line_selections};
use colstats_cli::{Controller, FileLoader, FsLoader, Settings};
use colstats_engine::{PolarsEngine, StatisticsEngine};
use colstats_render::{TableView, TextView};

use crate::cli::{Cli, DisplayArgs, RowsArgs, ShowArgs};

type TerminalController = Controller<PolarsEngine, TableView, TextView>;

/// Settings file merged with command-line overrides.
pub fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load_optional(cli.config.as_deref()).context("load settings")?;
    settings
        .date_columns
        .extend(cli.date_cols.iter().cloned().collect());
    if let Some(separator) = cli.separator {
        settings.engine.separator = separator;
    }
    Ok(settings)
}

fn present_options(settings: &Settings, args: &DisplayArgs) -> PresentOptions {
    PresentOptions {
        view: args.view.unwrap_or(settings.display.view),
        table_width: args.width.unwrap_or(settings.display.table_width),
    }
}

fn build_controller(settings: &Settings) -> Result<TerminalController> {
    let engine = PolarsEngine::new(settings.engine_options()?);
    Ok(Controller::new(
        engine,
        settings.date_columns.clone(),
        TableView::default(),
        TextView::default(),
    ))
}

fn print_current(
    controller: &TerminalController,
    source: &Path,
    options: PresentOptions,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_display(
        &mut out,
        source,
        controller.state(),
        controller.table(),
        controller.text(),
        options,
    )?;
    out.flush()
}

pub fn run_show(args: &ShowArgs, settings: &Settings) -> Result<LoopSummary> {
    let options = present_options(settings, &args.display);
    let loader = FsLoader::with_max_bytes(settings.engine.max_file_bytes);
    let mut controller = build_controller(settings)?;
    let mut summary = LoopSummary::default();

    for file in &args.files {
        let span = info_span!("show", file = %file.display());
        let _guard = span.enter();
        let completion = controller.load(&loader, file);
        summary.record(&completion);
        print_current(&controller, file, options).context("write output")?;
    }
    info!(
        rendered = summary.rendered,
        failed = summary.failed,
        "show complete"
    );
    Ok(summary)
}

pub fn run_watch(args: &DisplayArgs, settings: &Settings) -> Result<LoopSummary> {
    let options = present_options(settings, args);
    let loader = Arc::new(FsLoader::with_max_bytes(settings.engine.max_file_bytes));
    let mut controller = build_controller(settings)?;

    let (sender, events) = mpsc::channel();
    spawn_line_selections(io::BufReader::new(io::stdin()), sender.clone());

    let mut last_error = None;
    let summary = run_event_loop(
        &mut controller,
        &loader,
        &events,
        &sender,
        |controller, source, _completion| {
            if let Err(error) = print_current(controller, source, options) {
                last_error = Some(error);
            }
        },
    );
    if let Some(error) = last_error {
        return Err(error).context("write output");
    }
    Ok(summary)
}

pub fn run_rows(args: &RowsArgs, settings: &Settings) -> Result<()> {
    let loader = FsLoader::with_max_bytes(settings.engine.max_file_bytes);
    let engine = PolarsEngine::new(settings.engine_options()?);
    let text = loader.read_text(&args.file)?;
    let rows = engine
        .count_rows(&text)
        .with_context(|| format!("count rows: {}", args.file.display()))?;
    println!("{rows}");
    Ok(())
}
