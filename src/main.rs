use biota_tabs::binding::Preset;
use biota_tabs::commands;
use biota_tabs::config;
use biota_tabs::tui;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "biota-tabs")]
#[command(about = "Biota dashboard tab router", long_about = "Biota dashboard tab router\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Action preset to use instead of the configured one
    #[arg(short, long, global = true)]
    preset: Option<PresetArg>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    /// biota opens the tables view in the explorer
    Public,
    /// biota opens the home view in the explorer
    Draft,
}

impl PresetArg {
    fn to_preset(self) -> Preset {
        match self {
            PresetArg::Public => Preset::Public,
            PresetArg::Draft => Preset::Draft,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List every action and the tab loads bound to it
    Actions,
    /// Trigger one action against a headless dashboard and print its panels
    Dispatch {
        /// Action name (e.g., biota, tables, testviews)
        action: String,

        /// Dashboard tab to create; repeat for several (defaults to the configured tabs)
        #[arg(short, long = "tab")]
        tabs: Vec<String>,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("time_format: {}", cfg.time_format);
    println!("preset: {}", cfg.preset);
    println!("tabs: {}", cfg.tabs.join(", "));
    println!("actions: {} override(s)", cfg.actions.len());
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("selection_fg: {:?}", cfg.display.selection_fg);
    println!("error_fg: {:?}", cfg.display.error_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(config: &config::Config, preset: Option<Preset>, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Config => {
            handle_config_command(config);
            Ok(())
        }
        Commands::Actions => {
            let binding = commands::resolve_binding(config, preset)?;
            commands::actions::run(&binding, &config.display);
            Ok(())
        }
        Commands::Dispatch { action, tabs } => {
            let mut router = commands::build_router(config, preset, &tabs)?;
            commands::dispatch::run(&mut router, &action, &config.time_format, &config.display)
        }
    }
}

/// Run TUI mode over a dashboard built from the configured tabs
fn run_tui_mode(config: config::Config, preset: Option<Preset>) -> anyhow::Result<()> {
    let router = commands::build_router(&config, preset, &[])?;
    tui::run(router, config)?;
    Ok(())
}

fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let preset = cli.preset.map(PresetArg::to_preset);

    let result = match cli.command {
        None => run_tui_mode(config, preset),
        Some(command) => execute_command(&config, preset, command),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
