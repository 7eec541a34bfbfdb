use clap::{Parser, Subcommand};

use kana_cli::commands::{config_ops, convert_ops, table_ops};
use kana_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "kanaconv", about = "Convert between kana and romanizations")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text from one format to another
    Convert {
        /// Input format
        #[arg(short, long, default_value = "hiragana")]
        from: String,
        /// Output format
        #[arg(short, long)]
        to: String,
        /// Text to convert
        text: String,
    },
    /// List format names and their directions
    Formats,
    /// Dump the lemma alphabet and conversion tables
    Tables {
        /// Only this format's layers
        format: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Some(file) = &cli.settings {
        config_ops::install_settings(file);
    }

    match cli.command {
        Command::Convert { from, to, text } => convert_ops::convert_cmd(&text, &from, &to),
        Command::Formats => convert_ops::formats_cmd(),
        Command::Tables { format, json } => table_ops::tables_cmd(format.as_deref(), json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
