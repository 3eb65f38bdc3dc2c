use anyhow::Result;
use clap::{Parser, Subcommand};
use korml_base::logging::formatter::LogFormat;
use korml_cli::commands::execute_locate;
use korml_cli::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "korml", version, about = "Source position tools for korml")]
struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log format (text or json)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    /// Shortcut for --log-level debug
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the position of each byte offset in a file
    Locate {
        file: PathBuf,

        #[arg(required = true)]
        offsets: Vec<usize>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    korml_base::init_from_args(cli.log_level, cli.log_file, cli.log_format, cli.verbose)?;

    match cli.command {
        Commands::Locate {
            file,
            offsets,
            format,
        } => {
            for line in execute_locate(&file, &offsets, format)? {
                println!("{line}");
            }
        }
    }

    Ok(())
}
