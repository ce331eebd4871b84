use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imagelab::models::AppConfig;
use imagelab::script::{Flow, Interpreter};

#[derive(Parser)]
#[command(name = "imagelab")]
#[command(about = "Script-driven image editing for PPM, PNG, JPEG and BMP files")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "IMAGELAB_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a script file, one command per line
    Run {
        /// Script path
        script: PathBuf,
    },
    /// Read commands interactively from standard input
    Shell,
    /// Execute a single command line
    Exec {
        /// The command and its arguments, e.g. `blur koala koala-blur`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { script }) => run_script_command(cli.config.as_deref(), &script),
        Some(Commands::Shell) => run_shell_command(cli.config.as_deref()),
        Some(Commands::Exec { command }) => {
            run_exec_command(cli.config.as_deref(), &command.join(" "))
        }
        None => {
            run_status_command(cli.config.as_deref());
            Ok(())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imagelab=warn,imagelab_engine=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_config(path: Option<&Path>) -> AppConfig {
    match path {
        Some(path) => AppConfig::load_from_file(path),
        None => AppConfig::default(),
    }
}

/// Execute a script file
fn run_script_command(config: Option<&Path>, script: &Path) -> anyhow::Result<()> {
    init_tracing();
    let mut interpreter = Interpreter::new(load_config(config), std::io::stdout().lock());

    let flow = interpreter.run_script(script)?;
    finish(flow)
}

/// Interactive mode: one command per stdin line
fn run_shell_command(config: Option<&Path>) -> anyhow::Result<()> {
    init_tracing();
    let mut interpreter = Interpreter::new(load_config(config), std::io::stdout());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        match interpreter.run_line(&line?)? {
            Flow::Continue => {}
            Flow::Quit => break,
            Flow::Abort => return finish(Flow::Abort),
        }
        std::io::stdout().flush()?;
    }
    Ok(())
}

/// Execute one command line
fn run_exec_command(config: Option<&Path>, line: &str) -> anyhow::Result<()> {
    init_tracing();
    let mut interpreter = Interpreter::new(load_config(config), std::io::stdout().lock());

    let flow = interpreter.run_line(line)?;
    finish(flow)
}

fn finish(flow: Flow) -> anyhow::Result<()> {
    match flow {
        Flow::Continue | Flow::Quit => Ok(()),
        Flow::Abort => anyhow::bail!("stopped after a failed command"),
    }
}

/// Show version, configuration and usage
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("imagelab v{VERSION}");
    println!("Script-driven image editing for PPM, PNG, JPEG and BMP files\n");

    println!("Configuration:");
    let config = match config_path {
        Some(path) if path.exists() => {
            println!("  File:             {}", path.display());
            AppConfig::load_from_file(path)
        }
        Some(path) => {
            println!("  File:             {} (not found, defaults)", path.display());
            AppConfig::default()
        }
        None => {
            println!("  File:             (not set, defaults)");
            AppConfig::default()
        }
    };
    println!(
        "  base_dir         = {}",
        config
            .base_dir
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(current directory)".to_string())
    );
    println!("  stop_on_error    = {}", config.stop_on_error);
    println!("  echo_status      = {}", config.echo_status);
    println!("  max_script_depth = {}", config.max_script_depth);

    println!("\nCommands:");
    println!("  imagelab run <script>       Execute a script file");
    println!("  imagelab shell              Read commands from standard input");
    println!("  imagelab exec <command...>  Execute a single command");
    println!("\nRun 'imagelab --help' for more details.");
}
