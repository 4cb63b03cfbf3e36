//! toclist: render a table of contents as a nested list.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::PathBuf;
use std::process::ExitCode;
use toclist::error::{Error, Result};
use toclist::render::ListRenderer;
use toclist::{config, input};

#[derive(Parser)]
#[command(name = "toclist")]
#[command(about = "Render a table of contents as a nested list", long_about = None)]
struct Args {
    /// Table of contents JSON file, stdin when omitted or `-`
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Bullet marker for generated lists, overrides toclist.toml
    #[arg(long, short = 'm', value_name = "CHAR")]
    marker: Option<char>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = Format::Dump)]
    format: Format,

    /// Log debug information to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Box-drawing outline of the node tree
    Dump,
    /// Node tree as pretty-printed JSON
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // A logger can only be installed once; a second attempt changes nothing.
    let _ = SimpleLogger::new().with_level(level).init();
}

fn run(args: &Args) -> Result<()> {
    let cfg = config::Config::load();

    let marker = config::resolve_marker(args.marker, &cfg)?;

    let toc = input::read_toc(args.path.as_deref())?;
    let renderer = ListRenderer::new(marker);

    let Some(list) = renderer.render(&toc) else {
        log::info!("table of contents is empty, nothing to render");
        return Ok(());
    };
    log::debug!(
        "rendered {} top-level items, depth {}",
        list.children().len(),
        list.depth()
    );

    match args.format {
        Format::Dump => print!("{}", list.dump()),
        Format::Json => {
            let json = serde_json::to_string_pretty(&list).map_err(Error::Serialize)?;
            println!("{json}");
        }
    }

    Ok(())
}
