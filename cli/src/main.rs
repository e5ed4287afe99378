//! pasteclean CLI - pasted content cleanup tool
//!
//! A command-line tool for reducing pasted HTML and rich text to clean
//! lightweight markup.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use pasteclean::{
    classify_source, looks_like_markup, preserve_markdown, quick_clean_paste, Cleaner,
    CleanupOptions, CleanupResult, RawInput,
};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Pasted content cleanup to lightweight markup
#[derive(Parser)]
#[command(
    name = "pasteclean",
    author = "iyulab",
    version,
    about = "Clean pasted HTML and rich text into lightweight markup",
    long_about = "pasteclean - Pasted content cleanup tool.\n\n\
                  Strips Word, Google Docs and web page noise from pasted content\n\
                  and converts its structure to lightweight markup.\n\n\
                  Usage:\n  \
                  pasteclean <file>            Clean a file and print the text\n  \
                  pasteclean -                 Clean standard input\n  \
                  pasteclean clean --json <file>  Print the full result as JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path, or "-" for standard input (for default cleanup)
    #[arg(global = false)]
    input: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full cleanup pipeline and report what changed
    Clean {
        /// Input file path (default: stdin)
        input: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Treat the input as plain text (whitespace cleanup only)
        #[arg(long, conflicts_with = "markup")]
        plain: bool,

        /// Treat the input as markup even without tags
        #[arg(long)]
        markup: bool,

        /// Output the full result as JSON
        #[arg(long)]
        json: bool,

        /// Output compact JSON (no indentation)
        #[arg(long, requires = "json")]
        compact: bool,

        /// Separator between table cells
        #[arg(long)]
        separator: Option<String>,

        /// Alt text for images without one
        #[arg(long)]
        placeholder: Option<String>,

        /// Presentation removals allowed before Word content is flagged
        #[arg(long)]
        word_threshold: Option<usize>,
    },

    /// Clean content and print only the text
    Quick {
        /// Input file path (default: stdin)
        input: Option<PathBuf>,
    },

    /// Keep lightweight markup as is, only tidying whitespace
    #[command(visible_alias = "md")]
    Markdown {
        /// Input file path (default: stdin)
        input: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the detected source and markup flag
    Detect {
        /// Input file path (default: stdin)
        input: Option<PathBuf>,
    },

    /// Clean many files in parallel
    Batch {
        /// Input file paths
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Also write the full result of each file as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(command) = cli.command else {
        // Default command: pasteclean <file>
        match cli.input {
            Some(input) => {
                let content = read_input(Some(&input))?;
                write_output(None, &quick_clean_paste(&content))?;
            }
            None => {
                use clap::CommandFactory;
                Cli::command().print_help()?;
            }
        }
        return Ok(());
    };

    match command {
        Commands::Clean {
            input,
            output,
            plain,
            markup,
            json,
            compact,
            separator,
            placeholder,
            word_threshold,
        } => {
            let content = read_input(input.as_ref())?;
            let raw = if plain {
                RawInput::plain(&content)
            } else if markup {
                RawInput::markup(&content)
            } else {
                RawInput::detect(&content)
            };

            let options = build_options(separator, placeholder, word_threshold);
            let result = Cleaner::new().with_options(options).clean(raw);

            if json {
                let rendered = if compact {
                    serde_json::to_string(&result)?
                } else {
                    serde_json::to_string_pretty(&result)?
                };
                write_output(output.as_ref(), &rendered)?;
            } else {
                write_output(output.as_ref(), &result.cleaned_text)?;
                print_report(&result);
            }

            if let Some(path) = output {
                eprintln!("{} Cleaned: {}", "✓".green().bold(), path.display());
            }
        }

        Commands::Quick { input } => {
            let content = read_input(input.as_ref())?;
            write_output(None, &quick_clean_paste(&content))?;
        }

        Commands::Markdown { input, output } => {
            let content = read_input(input.as_ref())?;
            write_output(output.as_ref(), &preserve_markdown(&content))?;

            if let Some(path) = output {
                eprintln!("{} Cleaned: {}", "✓".green().bold(), path.display());
            }
        }

        Commands::Detect { input } => {
            let content = read_input(input.as_ref())?;

            println!("{}", "Paste Information".cyan().bold());
            println!("{}", "─".repeat(40));
            if let Some(path) = &input {
                println!(
                    "{}: {}",
                    "File".bold(),
                    path.file_name().unwrap_or_default().to_string_lossy()
                );
            }
            println!("{}: {}", "Source".bold(), classify_source(&content));
            println!("{}: {}", "Markup".bold(), looks_like_markup(&content));
            println!("{}: {}", "Characters".bold(), content.chars().count());
        }

        Commands::Batch {
            inputs,
            output,
            json,
        } => {
            run_batch(&inputs, &output, json)?;
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

/// Clean every input in parallel and write `<stem>.md` (and `<stem>.json`)
/// into the output directory.
fn run_batch(inputs: &[PathBuf], output_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;

    let pb = create_progress_bar(inputs.len() as u64);

    pb.set_message("Reading files...");
    let mut contents = Vec::with_capacity(inputs.len());
    for input in inputs {
        contents.push(read_input(Some(input))?);
        pb.inc(1);
    }

    pb.set_position(0);
    pb.set_message("Cleaning...");
    let results = Cleaner::new().clean_batch(&contents);

    pb.set_message("Writing output...");
    let mut warning_count = 0;
    for (input, result) in inputs.iter().zip(&results) {
        let stem = input
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        fs::write(output_dir.join(format!("{}.md", stem)), &result.cleaned_text)?;
        if json {
            fs::write(output_dir.join(format!("{}.json", stem)), result.to_json())?;
        }

        warning_count += result.warnings.len();
        log::info!("{}: {} ({} warning(s))", input.display(), result.source, result.warnings.len());
        pb.inc(1);
    }

    pb.finish_and_clear();

    println!("{}", "Batch Complete".green().bold());
    println!("{}", "─".repeat(40));
    println!("{}: {}", "Output".bold(), output_dir.display());
    println!("{}: {}", "Files".bold(), results.len());
    println!("{}: {}", "Warnings".bold(), warning_count);

    Ok(())
}

fn build_options(
    separator: Option<String>,
    placeholder: Option<String>,
    word_threshold: Option<usize>,
) -> CleanupOptions {
    let mut options = CleanupOptions::default();
    if let Some(separator) = separator {
        options = options.with_table_separator(separator);
    }
    if let Some(placeholder) = placeholder {
        options = options.with_image_placeholder(placeholder);
    }
    if let Some(threshold) = word_threshold {
        options = options.with_word_artifact_threshold(threshold);
    }
    options
}

/// Summary of removals and warnings, on stderr so stdout stays pipeable.
fn print_report(result: &CleanupResult) {
    let removed = result.removed.total();
    let converted = result.converted.total();

    if removed > 0 || converted > 0 {
        eprintln!(
            "{} {} source: {} removed, {} converted",
            "✓".green().bold(),
            result.source,
            removed,
            converted
        );
    }

    for message in result.warning_messages() {
        eprintln!("{} {}", "!".yellow().bold(), message);
    }
}

fn print_version() {
    println!("{} {}", "pasteclean".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Pasted content cleanup to lightweight markup");
    println!();
    println!("Recognized sources: Word, Google Docs, HTML, Markdown");
    println!("Repository: https://github.com/iyulab/pasteclean");
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.blue} {msg} [{bar:30.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("=> "),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Read a file, or standard input for `None` and `-`.
fn read_input(path: Option<&PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            if p.is_dir() {
                return Err(format!("{} is a directory", p.display()).into());
            }
            let bytes = fs::read(p)?;
            Ok(String::from_utf8(bytes).map_err(pasteclean::Error::from)?)
        }
        _ => {
            let mut content = String::new();
            io::stdin().lock().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
