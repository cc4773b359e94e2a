// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `calwheel`: render calendar wheels to SVG.

mod config;
mod registry;
mod svg;

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use calwheel::{TimeWindow, WheelSpec, WheelStyle, sort_chronologically};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "calwheel", version, about = "Render calendar wheels as SVG")]
struct Cli {
    /// More log output (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a wheel to an SVG document.
    Render(RenderArgs),
    /// Print the default style for a canvas size as JSON.
    Style(StyleArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// First day shown (YYYY-MM-DD).
    #[arg(long)]
    from: NaiveDate,

    /// Last day shown (YYYY-MM-DD).
    #[arg(long)]
    to: NaiveDate,

    /// Events JSON file: an array of {uid, start, end, subject, lane}.
    #[arg(long)]
    events: Option<PathBuf>,

    /// Style JSON file; missing fields take the defaults for a 1000 unit canvas.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Canvas size. Without --style the default proportions are scaled to it; with --style
    /// only the canvas changes.
    #[arg(long)]
    size: Option<f64>,

    /// Locale tag for month names and week numbering.
    #[arg(long, default_value = "en-US")]
    locale: String,

    /// Month palette name.
    #[arg(long, default_value = "spectral")]
    palette: String,

    /// Current instant (defaults to the local wall clock).
    #[arg(long)]
    now: Option<String>,

    /// Rotate the wheel so the current instant sits at the start angle.
    #[arg(long)]
    align_to_today: bool,

    /// Mark the current instant on the day ring.
    #[arg(long)]
    today: bool,

    /// Run counter-clockwise.
    #[arg(long)]
    reverse: bool,

    /// Sort events chronologically before drawing.
    #[arg(long)]
    sort: bool,

    /// Output file (defaults to stdout).
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct StyleArgs {
    /// Canvas size.
    #[arg(long, default_value_t = 1000.0)]
    size: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Style(args) => cmd_style(&args),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let window = TimeWindow::new(args.from, args.to)?;
    let mut style = match &args.style {
        Some(path) => {
            let mut style = config::load_style(path)?;
            if let Some(size) = args.size {
                style.size = size;
            }
            style
        }
        None => WheelStyle::for_size(args.size.unwrap_or(1000.0)),
    };
    style.align_to_today |= args.align_to_today;
    style.show_today |= args.today;
    style.reverse |= args.reverse;

    let locale = registry::locale(&args.locale)?;
    let palette = registry::palette(&args.palette)?;
    let mut events = match &args.events {
        Some(path) => config::load_events(path)?,
        None => Vec::new(),
    };
    if args.sort {
        sort_chronologically(&mut events);
    }
    let now = current_instant(args.now.as_deref())?;
    tracing::info!(
        from = %window.min_date(),
        to = %window.max_date(),
        events = events.len(),
        %now,
        "rendering wheel"
    );

    let scene = WheelSpec::new(window, &events, &style, &locale, &palette).render(now);
    let document = svg::to_svg_document(&scene);
    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, document)
                .with_context(|| format!("write svg '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => std::io::stdout()
            .write_all(document.as_bytes())
            .context("write svg to stdout")?,
    }
    Ok(())
}

fn cmd_style(args: &StyleArgs) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&WheelStyle::for_size(args.size))?;
    println!("{json}");
    Ok(())
}

/// The instant used for the whole render, sampled once.
fn current_instant(now: Option<&str>) -> anyhow::Result<NaiveDateTime> {
    match now {
        Some(s) => config::parse_instant(s).context("invalid --now"),
        None => Ok(chrono::Local::now().naive_local()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory as _;
        Cli::command().debug_assert();
    }

    #[test]
    fn render_flags_parse() {
        let cli = Cli::try_parse_from([
            "calwheel",
            "-vv",
            "render",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-31",
            "--now",
            "2024-01-15",
            "--today",
            "--align-to-today",
        ])
        .expect("valid arguments");
        assert_eq!(cli.verbose, 2);
        let Command::Render(args) = cli.cmd else {
            panic!("expected render");
        };
        assert_eq!(
            args.from,
            NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
        );
        assert!(args.today && args.align_to_today && !args.reverse);
        assert_eq!(args.locale, "en-US");
        assert_eq!(args.now.as_deref(), Some("2024-01-15"));
    }

    #[test]
    fn explicit_now_is_parsed() {
        let now = current_instant(Some("2024-01-15T12:00:00")).expect("valid now");
        assert_eq!(now.to_string(), "2024-01-15 12:00:00");
        assert!(current_instant(Some("later")).is_err());
    }

    #[test]
    fn rendered_january_document() {
        let window = TimeWindow::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            NaiveDate::from_ymd_opt(2024, 1, 31).expect("valid date"),
        )
        .expect("valid window");
        let events = config::parse_events(
            r#"[{"uid": "x", "start": "2024-01-10", "end": "2024-01-20", "subject": "X"}]"#,
        )
        .expect("valid events");
        let style = WheelStyle::default();
        let locale = registry::locale("en-US").expect("locale");
        let palette = registry::palette("spectral").expect("palette");
        let now = current_instant(Some("2024-01-15")).expect("valid now");
        let scene = WheelSpec::new(window, &events, &style, &locale, &palette).render(now);
        let doc = svg::to_svg_document(&scene);
        assert!(doc.contains(r#"<g id="wheel" transform="translate(500 500)">"#));
        assert!(doc.contains(">January 2024</textPath>"));
        assert!(doc.contains(r##"href="#event-x""##));
        assert_eq!(doc.matches("<line ").count(), 31);
    }
}
