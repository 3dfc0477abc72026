use bytewords::cli::{
    decode_text, decode_to_file, encode_file, encode_hex_payload, inspect_shard, read_text,
    DecodeOptions, EncodeOptions, InspectOptions,
};
use bytewords::{Result, Style};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod telemetry;

/// Version info from build.rs
const VERSION: &str = env!("BYTEWORDS_VERSION");
const PROFILE: &str = env!("BYTEWORDS_PROFILE");
const GIT_HASH: &str = env!("BYTEWORDS_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} ({})", VERSION, PROFILE, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "bytewords")]
#[command(author, about = "Encode binary data as transcribable words", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a hex payload or a file as bytewords
    #[command(alias = "e")]
    Encode {
        /// Output style: standard, uri, or minimal
        #[arg(long, default_value = "standard", value_parser = parse_style)]
        style: Style,

        /// Encode the raw bytes of this file instead of a hex argument
        #[arg(long, conflicts_with = "hex")]
        file: Option<PathBuf>,

        /// Payload as hex
        #[arg(required_unless_present = "file")]
        hex: Option<String>,
    },

    /// Decode bytewords back to the payload
    #[command(alias = "d")]
    Decode {
        /// Input style: standard, uri, or minimal
        #[arg(long, default_value = "standard", value_parser = parse_style)]
        style: Style,

        /// Read the bytewords text from this file
        #[arg(long, conflicts_with = "words")]
        file: Option<PathBuf>,

        /// Write raw payload bytes here instead of printing hex
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Bytewords text, quoted or as separate words
        #[arg(num_args = 1.., required_unless_present = "file")]
        words: Vec<String>,
    },

    /// Decode a bytewords-encoded SSKR shard and show its header
    #[command(alias = "i")]
    Inspect {
        /// Input style: standard, uri, or minimal
        #[arg(long, default_value = "standard", value_parser = parse_style)]
        style: Style,

        /// Print as JSON
        #[arg(long)]
        json: bool,

        /// Bytewords text of the shard, quoted or as separate words
        #[arg(num_args = 1.., required = true)]
        words: Vec<String>,
    },
}

fn parse_style(s: &str) -> std::result::Result<Style, String> {
    s.parse().map_err(|e| format!("{}", e))
}

/// Rejoin words the shell split apart, using the style's separator
fn join_words(words: &[String], style: Style) -> String {
    let separator = style.separator().map(String::from).unwrap_or_default();
    words.join(&separator)
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Encode { style, file, hex } => {
            let options = EncodeOptions { style };
            let encoded = match file {
                Some(path) => encode_file(&path, &options)?,
                None => encode_hex_payload(&hex.unwrap_or_default(), &options)?,
            };
            println!("{}", encoded);
        }

        Commands::Decode {
            style,
            file,
            output,
            words,
        } => {
            let options = DecodeOptions { style };
            let text = match file {
                Some(path) => read_text(&path)?,
                None => join_words(&words, style),
            };

            match output {
                Some(path) => {
                    let written = decode_to_file(&text, &path, &options)?;
                    println!("Decoded {} bytes to {}", written, path.display());
                }
                None => println!("{}", decode_text(&text, &options)?),
            }
        }

        Commands::Inspect { style, json, words } => {
            let options = InspectOptions { style, json };
            print!("{}", inspect_shard(&join_words(&words, style), &options)?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("bytewords {}", get_version());
        return ExitCode::SUCCESS;
    }

    telemetry::init(cli.verbose);

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
