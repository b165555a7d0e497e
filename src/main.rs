use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use long_lines::config_io::{load_layer_from_file, load_user_layer};
use long_lines::partial_config::PartialLongLinesConfig;
use long_lines::primitives::display_width::DEFAULT_TAB_SIZE;
use long_lines::services::logging::init_tracing;
use long_lines::{
    long_line_stats, status_summary, EditorHost, HostEvent, InMemoryHost, LongLineHighlighter,
    OverlayFace,
};

/// Report lines that run past a width limit, split into a warning margin and
/// an error zone
#[derive(Parser, Debug)]
#[command(name = "longlines", version)]
struct Args {
    /// Files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Width limit in display columns (0 disables highlighting)
    #[arg(short, long, default_value_t = 80)]
    width: i64,

    /// Width of the warning margin past the limit (overrides the config file)
    #[arg(short, long)]
    margin: Option<usize>,

    /// Tab stop width used to measure display columns
    #[arg(long, default_value_t = DEFAULT_TAB_SIZE)]
    tab_size: usize,

    /// Config file to use instead of the user config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only print the per-file summary
    #[arg(long)]
    summary_only: bool,

    /// Exit with a failure status if any line reaches the error zone
    #[arg(long)]
    check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn cli_layer(&self) -> PartialLongLinesConfig {
        PartialLongLinesConfig {
            enabled: None,
            margin: self.margin,
            debug: self.verbose.then_some(true),
        }
    }
}

/// Per-file result of a scan
struct FileReport {
    error_lines: usize,
}

fn scan_file(
    host: &mut InMemoryHost,
    highlighter: &mut LongLineHighlighter,
    path: &Path,
    args: &Args,
) -> anyhow::Result<FileReport> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let buffer = host.open_buffer(&text, args.width);
    host.set_tab_size(buffer, args.tab_size);
    let view = host
        .open_view(buffer)
        .with_context(|| format!("Failed to open a view for {}", path.display()))?;

    highlighter.handle_event(host, HostEvent::CursorMoved(view));

    let mut error_lines = 0;
    for line in 0..host.line_count(buffer) {
        let Some(face) = host.line_face(view, line) else {
            continue;
        };
        if face == OverlayFace::Error {
            error_lines += 1;
        }
        if !args.summary_only {
            println!(
                "{}:{}: {}: width {} (limit {})",
                path.display(),
                line + 1,
                face,
                host.line_display_width(buffer, line),
                args.width
            );
        }
    }

    let summary = status_summary(&*host, buffer);
    if !summary.is_empty() {
        let first_line = long_line_stats(&*host, buffer).map_or(0, |stats| stats.first_line + 1);
        println!("{}: {} (first at line {})", path.display(), summary, first_line);
    }

    highlighter.handle_event(host, HostEvent::ViewClosed(view));
    host.close_view(view);

    Ok(FileReport { error_lines })
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let file_layer = match &args.config {
        Some(path) => load_layer_from_file(path)?,
        None => load_user_layer()?,
    };
    let config = args.cli_layer().merge(file_layer).resolve();
    tracing::debug!("Resolved long-lines config: {:?}", config);

    let mut host = InMemoryHost::new();
    let mut highlighter = LongLineHighlighter::new(config);

    let mut error_lines = 0;
    for path in &args.files {
        let report = scan_file(&mut host, &mut highlighter, path, &args)?;
        error_lines += report.error_lines;
    }

    if host.live_overlay_count() != 0 {
        tracing::warn!("{} overlays leaked after scan", host.live_overlay_count());
    }

    if args.check && error_lines > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
