//! icon-loader CLI - generate icon stylesheets and printable grids.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use icon_loader::printer::{Grid, GridPrinter, PrinterConfig};
use icon_loader::{FrameworkDefaults, IconRegistry, MemorySink, RegistryConfig};
use tracing::Level;

#[derive(Parser)]
#[command(name = "icon-loader")]
#[command(about = "Icon stylesheet and printable grid generator")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the stylesheet for a set of icons
    Css {
        /// Icons as `name` or `library/name` (class names with --class)
        #[arg(required = true)]
        icons: Vec<String>,

        /// Root path of the icon assets
        #[arg(short, long, default_value = "/icons/")]
        base_path: String,

        /// Do not insert the library name as a subdirectory
        #[arg(long)]
        no_library_path: bool,

        /// Treat arguments as class names such as `icon-accept`
        #[arg(long)]
        class: bool,

        /// Fail on malformed icon identifiers
        #[arg(long)]
        strict: bool,

        /// Registry configuration as JSON (overrides the flags above)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Render a grid described in JSON as printable HTML
    Print {
        /// Path to the grid JSON file
        grid: PathBuf,

        /// Heading printed above the table
        #[arg(short, long)]
        title: Option<String>,

        /// Stylesheet linked from the document
        #[arg(long)]
        stylesheet: Option<String>,
    },

    /// Print the framework default overrides as JSON
    Defaults,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Css {
            icons,
            base_path,
            no_library_path,
            class,
            strict,
            config,
        } => {
            let config = match config {
                Some(path) => RegistryConfig::from_json(&fs::read_to_string(path)?)?,
                None => RegistryConfig::new(base_path)
                    .with_library_path(!no_library_path)
                    .with_strict(strict),
            };
            print!("{}", css_command(config, icons, class)?);
        }
        Commands::Print {
            grid,
            title,
            stylesheet,
        } => {
            let grid = fs::read_to_string(&grid)?;
            print!("{}", print_command(&grid, title, stylesheet)?);
        }
        Commands::Defaults => {
            println!("{}", defaults_command()?);
        }
    }
    Ok(())
}

/// Builds the stylesheet for `icons`, read as class names when `class` is set.
fn css_command(
    config: RegistryConfig,
    icons: Vec<String>,
    class: bool,
) -> icon_loader::Result<String> {
    let mut registry = IconRegistry::initialize(config, MemorySink::new())?;
    if class {
        for name in &icons {
            registry.require_by_class_name(name)?;
        }
    } else {
        registry.require(icons)?;
    }
    Ok(registry.build_stylesheet())
}

/// Renders the grid in `grid_json` as a printable document.
fn print_command(
    grid_json: &str,
    title: Option<String>,
    stylesheet: Option<String>,
) -> icon_loader::Result<String> {
    let grid = Grid::from_json(grid_json)?;
    let mut config = PrinterConfig::default();
    if let Some(title) = title {
        config.main_title = title;
    }
    if let Some(stylesheet) = stylesheet {
        config.stylesheet_path = stylesheet;
    }
    Ok(GridPrinter::new(config).render(&grid))
}

fn defaults_command() -> icon_loader::Result<String> {
    FrameworkDefaults::default().to_json_pretty()
}
