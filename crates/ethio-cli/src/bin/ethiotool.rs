use clap::{Parser, Subcommand};
use ethio_core::calendar::Script;
use tracing_subscriber::EnvFilter;

use ethio_cli::commands::{calendar_ops, config_ops, numeral_ops, translit_ops};

#[derive(Parser)]
#[command(name = "ethiotool", about = "Ethiopian calendar, numeral and transliteration tool")]
struct Cli {
    /// Log conversion steps to stderr (filter with RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a Gregorian date (YYYY-MM-DD) to the Ethiopian calendar
    ToEthiopian {
        date: String,
        /// Month name script: latin or ethiopic
        #[arg(long, default_value = "latin")]
        script: Script,
        /// Output structured components as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert an Ethiopian date to Gregorian
    ToGregorian { year: i32, month: u8, day: u8 },
    /// Show today's Ethiopian date
    Today {
        #[arg(long, default_value = "latin")]
        script: Script,
    },
    /// List the thirteen Ethiopian months
    Months {
        /// Show only this script (default: both)
        #[arg(long)]
        script: Option<Script>,
        /// Also show month lengths for this Ethiopian year
        #[arg(long)]
        year: Option<i32>,
    },
    /// Check whether an Ethiopian year is a leap year
    Leap {
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },
    /// Encode an integer as a Ge'ez numeral
    Encode {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Decode a Ge'ez numeral string
    Decode {
        glyphs: String,
        /// Reject input containing non-numeral characters
        #[arg(long)]
        strict: bool,
    },
    /// Transliterate Latin text to Ethiopic in one pass
    Transliterate { text: String },
    /// Replay keystrokes one at a time (`<` is backspace)
    Keys { sequence: String },
    /// Export the default glyph table as TOML
    GlyphsExport,
    /// Validate a custom glyph table TOML file
    GlyphsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// List supported languages with their native names
    Languages,
    /// Look up a built-in translation
    Translate { lang: String, key: String },
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("ethio_core=debug")),
            )
            .init();
    }

    match cli.command {
        Command::ToEthiopian { date, script, json } => {
            calendar_ops::to_ethiopian(&date, script, json)
        }
        Command::ToGregorian { year, month, day } => calendar_ops::to_gregorian(year, month, day),
        Command::Today { script } => calendar_ops::today(script),
        Command::Months { script, year } => calendar_ops::months(script, year),
        Command::Leap { year } => calendar_ops::leap(year),
        Command::Encode { value } => numeral_ops::encode(&value),
        Command::Decode { glyphs, strict } => numeral_ops::decode(&glyphs, strict),
        Command::Transliterate { text } => translit_ops::transliterate(&text),
        Command::Keys { sequence } => translit_ops::keys(&sequence),
        Command::GlyphsExport => config_ops::glyphs_export(),
        Command::GlyphsValidate { file } => config_ops::glyphs_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::Languages => config_ops::languages(),
        Command::Translate { lang, key } => config_ops::translate(&lang, &key),
    }
}
