use clap::{Args, Parser, Subcommand};
use ciphertool::cli::{
    read_text, render_result, run_batch, run_cipher, show_list, show_square, write_output,
    BatchOptions, RunOptions, TextSource,
};
use ciphertool::{CipherKind, CipherParams, Operation};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("CIPHERTOOL_VERSION");
const PROFILE: &str = env!("CIPHERTOOL_PROFILE");
const GIT_HASH: &str = env!("CIPHERTOOL_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} ({})", PROFILE, VERSION, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "ciphertool")]
#[command(author, about = "Classical text ciphers and a Morse transcoder", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a cipher
    #[command(alias = "e")]
    Encrypt(CipherArgs),

    /// Decrypt text with a cipher
    #[command(alias = "d")]
    Decrypt(CipherArgs),

    /// Process a JSON array of requests
    #[command(alias = "b")]
    Batch {
        /// JSON file with the requests
        file: PathBuf,

        /// Pretty-print the JSON results
        #[arg(long)]
        pretty: bool,
    },

    /// List the supported ciphers
    #[command(alias = "l")]
    List,

    /// Show the Playfair key square for a keyword
    #[command(alias = "s")]
    Square {
        /// Keyword (letters only)
        key: String,
    },
}

#[derive(Args)]
struct CipherArgs {
    /// Cipher to use (caesar, atbash, vigenere, affine, railfence, playfair, columnar, morse)
    #[arg(value_parser = parse_cipher)]
    cipher: CipherKind,

    /// Text to process (reads --input or stdin when omitted)
    text: Option<String>,

    /// Caesar shift (1-25)
    #[arg(long, allow_hyphen_values = true)]
    shift: Option<i64>,

    /// Keyword for Vigenère, Playfair and Columnar
    #[arg(short, long)]
    key: Option<String>,

    /// Affine multiplier, coprime with 26
    #[arg(short = 'a', allow_hyphen_values = true)]
    a: Option<i64>,

    /// Affine offset (0-25)
    #[arg(short = 'b', allow_hyphen_values = true)]
    b: Option<i64>,

    /// Rail Fence rail count (2 or more)
    #[arg(long, allow_hyphen_values = true)]
    rails: Option<i64>,

    /// Read text from a file
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Write the result to a file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fold accented letters to ASCII first
    #[arg(long)]
    fold_accents: bool,

    /// Print the result as a JSON record
    #[arg(long)]
    json: bool,
}

fn parse_cipher(s: &str) -> Result<CipherKind, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn run_command(operation: Operation, args: CipherArgs) -> ciphertool::Result<bool> {
    let source = match (args.text, args.input) {
        (Some(text), _) => TextSource::Inline(text),
        (None, Some(path)) => TextSource::File(path),
        (None, None) => TextSource::Stdin,
    };
    let text = read_text(&source)?;

    let options = RunOptions {
        params: CipherParams {
            shift: args.shift,
            key: args.key,
            a: args.a,
            b: args.b,
            rails: args.rails,
        },
        fold_accents: args.fold_accents,
        json: args.json,
    };

    let result = run_cipher(args.cipher, operation, text, &options);
    let body = render_result(&result, options.json)?;

    if result.is_ok() || options.json {
        write_output(args.output.as_deref(), &body)?;
    }
    if !result.is_ok() && !options.json {
        eprintln!("Error: {}", body);
    }
    Ok(result.is_ok())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    ciphertool::logging::init(cli.verbose);

    // Handle --version flag
    if cli.version {
        println!("ciphertool {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            let _ = Cli::command().print_help();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt(args) => run_command(Operation::Encrypt, args),
        Commands::Decrypt(args) => run_command(Operation::Decrypt, args),

        Commands::Batch { file, pretty } => {
            let options = BatchOptions { pretty };
            run_batch(&file, &options).map(|json| {
                println!("{}", json);
                true
            })
        }

        Commands::List => {
            print!("{}", show_list());
            Ok(true)
        }

        Commands::Square { key } => show_square(&key).map(|square| {
            print!("{}", square);
            true
        }),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
