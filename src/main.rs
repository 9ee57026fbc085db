use anyhow::{bail, Context, Result};
use clap::Parser;
use gnuggplot::args::batch_layer_args;
use gnuggplot::diagnostic::Diagnostics;
use gnuggplot::pipe::GnuplotPipe;
use gnuggplot::plot::Plot;
use gnuggplot::PipeOptions;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const LAYER_HELP: &str = "\
Layers (each starts a new layer; attribute options apply to the layer before them):
  -G, --global <FILE>   data file and aesthetics shared by later layers (must be first)
  -P, --point <FILE>    points
  -L, --line <FILE>     lines
  -B, --bar <FILE>      boxes
      --labs            title and axis labels
      --theme           legend placement
  FILE may be empty to use the global file, or '-' for inline data given with -x/-y.

Attributes:
  -x, -y <COL>          column index, column name or (expression); comma separated
                        values for inline data; axis labels inside --labs
  -c, --color, --fill   -s, --shape   -z, --size   -t, --linetype   -l, --label
      --linewidth       --width       -w (linewidth for lines, width for bars)
  -f, --fillstyle       -d, --delim   --title
      --legend_position none|left|right|top|bottom   --legend_direction

Example:
  gnuggplot -G data.dat -x 1 -P '' -y 2 -c red -L '' -y 3 --labs --title 'Run 1'";

#[derive(Parser, Debug)]
#[command(name = "gnuggplot")]
#[command(about = "Build a gnuplot script from ggplot2-style layer options and pipe it to gnuplot", long_about = None)]
#[command(after_help = LAYER_HELP)]
struct Args {
    /// Print the script instead of sending it to gnuplot
    #[arg(long)]
    dry_run: bool,

    /// Plotting program to pipe the script to
    #[arg(long, value_name = "PROGRAM")]
    gnuplot: Option<String>,

    /// Do not pass -persist to the plotting program
    #[arg(long)]
    no_persist: bool,

    /// Wait for Enter before closing the plot
    #[arg(long)]
    wait: bool,

    /// JSON file with pipe options (program, persist, wait)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log composition details
    #[arg(short, long)]
    verbose: bool,

    /// Layer and attribute options
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "LAYERS")]
    layers: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let options = pipe_options(&args)?;

    let mut diagnostics = Diagnostics::new();
    let batches = batch_layer_args(&args.layers, &mut diagnostics)
        .context("Invalid layer options")?;
    if batches.is_empty() {
        bail!("No layers given (try --help)");
    }

    let mut plot = Plot::new();
    for batch in batches {
        plot.add_layer(batch.kind, batch.local, &mut diagnostics)?;
    }
    if !plot.has_plot_clauses() {
        bail!("Nothing to plot: add a --point, --line or --bar layer");
    }

    for (key, value) in plot.global().iter() {
        debug!(key, value, "global setting");
    }
    let script = plot.script();
    if diagnostics.has_errors() {
        warn!("script was built despite errors above; gnuplot may reject it");
    }
    debug!(layers = plot.layers().len(), diagnostics = diagnostics.len(), "script:\n{}", script);

    if args.dry_run {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(script.as_bytes())
            .context("Failed to write script to stdout")?;
        handle.flush().context("Failed to flush stdout")?;
        return Ok(());
    }

    let mut pipe = GnuplotPipe::spawn(&options)?;
    pipe.send(&script)?;
    if options.wait {
        eprintln!("Press enter to exit");
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
    }
    let status = pipe.close()?;
    if !status.success() {
        bail!("'{}' exited with {}", options.program, status);
    }

    Ok(())
}

/// Config file values, overridden by command-line options.
fn pipe_options(args: &Args) -> Result<PipeOptions> {
    let mut options = match &args.config {
        Some(path) => PipeOptions::load(path)?,
        None => PipeOptions::default(),
    };
    if let Some(program) = &args.gnuplot {
        options.program = program.clone();
    }
    if args.no_persist {
        options.persist = false;
    }
    if args.wait {
        options.wait = true;
    }
    Ok(options)
}
