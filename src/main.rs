// stackviz: draw the stack after every pseudo-assembly instruction

use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use stackviz::layout::{FrameLayout, GridComposer, LayoutConfig, Warning};
use stackviz::render::{SvgTemplates, TemplateRenderer};

/// Visualize how push/pop and frame-setup instructions move the stack.
///
/// EXAMPLES:
///     stackviz render prologue.asm                  Write out.svg
///     stackviz render prologue.asm -o stack.svg -s 3
#[derive(Parser)]
#[command(name = "stackviz")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one stack diagram per instruction into an SVG grid
    ///
    /// Each non-blank line of the input is one instruction, optionally
    /// prefixed with an address (`12: push a`). Unrecognized lines are
    /// reported as warnings and still get a frame.
    #[command(visible_alias = "r")]
    Render {
        /// Path to the pseudo-assembly file
        input: PathBuf,
        /// Output SVG path
        #[arg(long, short = 'o', default_value = "out.svg")]
        output: PathBuf,
        /// Number of frames per grid row
        #[arg(long, short = 's', default_value = "4")]
        columns_per_row: NonZeroUsize,
        /// Width of the slot column (overrides the config file)
        #[arg(long, short = 'w')]
        column_width: Option<f64>,
        /// Layout configuration file (TOML)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
        /// Do not annotate slots with [ebp+N] offsets
        #[arg(long)]
        no_offsets: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            input,
            output,
            columns_per_row,
            column_width,
            config,
            no_offsets,
        } => render(RenderArgs {
            input,
            output,
            columns_per_row,
            column_width,
            config,
            no_offsets,
        }),
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

struct RenderArgs {
    input: PathBuf,
    output: PathBuf,
    columns_per_row: NonZeroUsize,
    column_width: Option<f64>,
    config: Option<PathBuf>,
    no_offsets: bool,
}

fn render(args: RenderArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => LayoutConfig::load_from_file(path)?,
        None => LayoutConfig::default(),
    };
    if let Some(width) = args.column_width {
        config = config.with_column_width(width);
    }
    if args.no_offsets {
        config = config.with_offsets(false);
    }
    config.validate()?;

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read input file '{}'", args.input.display()))?;

    let templates = SvgTemplates::new();
    let composer = GridComposer::new(FrameLayout::new(config), args.columns_per_row, &templates);
    let composition = match composer.compose(&source) {
        Ok(composition) => composition,
        Err(e) => {
            print_warnings(e.warnings());
            return Err(e.into());
        }
    };
    print_warnings(&composition.warnings);

    templates.write(&composition.markup, &args.output)?;
    println!(
        "done, {} frames written to {}",
        composition.frame_count(),
        args.output.display()
    );
    Ok(())
}

fn print_warnings(warnings: &[Warning]) {
    for warning in warnings {
        eprintln!("warning: {}", warning);
    }
}
