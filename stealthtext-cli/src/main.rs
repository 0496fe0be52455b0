use anyhow::Result;
use clap::{Parser, Subcommand};
use stealthtext_cli::{commands, PayloadKind};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "stealthtext")]
#[command(about = "StealthText - Hide any data inside ordinary text", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a payload inside a carrier string
    Encode {
        /// Visible carrier text
        carrier: String,

        /// Text to hide; takes priority over --input-file (stdin if neither)
        #[arg(short, long)]
        message: Option<String>,

        /// File whose contents to hide
        #[arg(short, long)]
        input_file: Option<String>,

        /// Write the encoded text here instead of stdout
        #[arg(short, long)]
        output_file: Option<String>,

        /// How to read --input-file
        #[arg(long, value_enum, default_value_t = PayloadKind::Auto)]
        kind: PayloadKind,
    },

    /// Recover a hidden payload
    Decode {
        /// Text containing a hidden payload
        text: Option<String>,

        /// Read the text from this file ("-" for stdin)
        #[arg(short, long)]
        input_file: Option<String>,

        /// Write the payload here instead of stdout
        #[arg(short, long)]
        output_file: Option<String>,

        /// Base64-decode the payload and write raw bytes
        #[arg(short, long)]
        binary_write: bool,
    },

    /// Show where payload bytes sit in a text
    Inspect {
        /// Text to inspect
        text: Option<String>,

        /// Read the text from this file ("-" for stdin)
        #[arg(short, long)]
        input_file: Option<String>,

        /// Output JSON report
        #[arg(short, long)]
        output: Option<String>,

        /// Show statistics only
        #[arg(long)]
        stats_only: bool,

        /// Print the report as JSON to stdout
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Encode {
            carrier,
            message,
            input_file,
            output_file,
            kind,
        } => commands::encode::execute(
            &carrier,
            message.as_deref(),
            input_file.as_deref(),
            output_file.as_deref(),
            kind,
        ),

        Commands::Decode {
            text,
            input_file,
            output_file,
            binary_write,
        } => commands::decode::execute(
            text.as_deref(),
            input_file.as_deref(),
            output_file.as_deref(),
            binary_write,
        ),

        Commands::Inspect {
            text,
            input_file,
            output,
            stats_only,
            json,
        } => commands::inspect::execute(
            text.as_deref(),
            input_file.as_deref(),
            output.as_deref(),
            stats_only,
            json,
        ),
    }
}
