use std::path::PathBuf;

use clap::{Parser, Subcommand};

use translit_cli::commands::{convert_ops, table_ops};
use translit_cli::trace_init::init_tracing;
use translit_core::{Options, Standard};

#[derive(Parser)]
#[command(name = "translit", about = "Cyrillic ⇄ Latin transliteration")]
struct Cli {
    /// Load transliteration tables from this TOML file instead of the built-in ones
    #[arg(long, global = true)]
    tables: Option<PathBuf>,
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text (words are joined with single spaces)
    Convert {
        /// Text to convert
        #[arg(required = true)]
        text: Vec<String>,
        /// Latin → Cyrillic instead of Cyrillic → Latin
        #[arg(short, long)]
        reverse: bool,
        /// GOST, RADIO or ICAO
        #[arg(short, long, default_value = "GOST")]
        standard: Standard,
        /// Language code
        #[arg(short, long, default_value = "ru")]
        language: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List configured languages
    Languages {
        /// List languages that support reverse conversion
        #[arg(short, long)]
        reverse: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Inspect transliteration tables
    Tables {
        #[command(subcommand)]
        command: TablesCommand,
    },
}

#[derive(Subcommand)]
enum TablesCommand {
    /// Print the built-in tables TOML
    Export,
    /// Validate a tables TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    if let Some(path) = &cli.tables {
        if let Err(e) = table_ops::load_custom(path) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    match cli.command {
        Command::Convert {
            text,
            reverse,
            standard,
            language,
            json,
        } => {
            let options = Options {
                reverse,
                standard,
                language,
            };
            convert_ops::convert_cmd(&text, &options, json);
        }
        Command::Languages { reverse, json } => convert_ops::languages_cmd(reverse, json),
        Command::Tables { command } => match command {
            TablesCommand::Export => table_ops::tables_export(),
            TablesCommand::Validate { file } => table_ops::tables_validate(&file),
        },
    }
}
