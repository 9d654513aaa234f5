use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kana_cli::commands::{config_ops, convert_ops};

#[derive(Parser)]
#[command(name = "kanatool", about = "Kana and character width converter")]
struct Cli {
    /// Settings TOML to use instead of the built-in defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text from an argument, a file, or stdin
    Convert {
        /// Text to convert (stdin when neither this nor --file is given)
        text: Option<String>,
        /// Read input from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<String>,
        /// Flag names separated by `|` or `,`
        #[arg(long)]
        flags: Option<String>,
        /// NKF option string, e.g. "-w -W -m0 -Z1"
        #[arg(long, conflicts_with = "flags", allow_hyphen_values = true)]
        nkf: Option<String>,
    },
    /// Show the normalized flags for a set of names or NKF options
    Flags {
        /// Flag names separated by `|` or `,`
        names: Option<String>,
        /// NKF option string
        #[arg(long, conflicts_with = "names", allow_hyphen_values = true)]
        nkf: Option<String>,
        /// Print the flag names as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings file
        file: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    if let Some(file) = cli.settings.as_deref() {
        config_ops::settings_load(file);
    }

    match cli.command {
        Command::Convert {
            text,
            file,
            flags,
            nkf,
        } => convert_ops::convert_cmd(
            text.as_deref(),
            file.as_deref(),
            flags.as_deref(),
            nkf.as_deref(),
        ),
        Command::Flags { names, nkf, json } => {
            convert_ops::flags_cmd(names.as_deref(), nkf.as_deref(), json)
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
