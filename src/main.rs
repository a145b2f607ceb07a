//! CLI for docx2tex - DOCX to LaTeX converter

use clap::{ArgAction, Parser};
use docx2tex::{ConvertOptions, DocxToLatex, TemplateOptions, DEFAULT_SUPPLEMENT_MARKER};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input DOCX file path
    input: PathBuf,

    /// Output LaTeX file path (optional, prints to stdout if not specified)
    output: Option<PathBuf>,

    /// Document class of the journal template (defaults to wlscirep)
    #[arg(long)]
    document_class: Option<String>,

    /// Document class option (repeatable; defaults to fleqn and 10pt)
    #[arg(long = "class-option")]
    class_options: Vec<String>,

    /// Package to load in the preamble (repeatable; replaces the default list)
    #[arg(long = "package")]
    packages: Vec<String>,

    /// Section headings containing this phrase start the supplement
    #[arg(long, default_value = DEFAULT_SUPPLEMENT_MARKER)]
    supplement_marker: String,

    /// Reset supplement numbering only before the first supplementary heading
    #[arg(long)]
    reset_supplement_once: bool,

    /// Escape LaTeX special characters in the document text
    #[arg(long)]
    escape_special_chars: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let defaults = TemplateOptions::default();
    let template = TemplateOptions {
        document_class: args.document_class.unwrap_or(defaults.document_class),
        class_options: if args.class_options.is_empty() {
            defaults.class_options
        } else {
            args.class_options
        },
        packages: if args.packages.is_empty() {
            defaults.packages
        } else {
            args.packages
        },
    };

    let options = ConvertOptions {
        template,
        supplement_marker: args.supplement_marker,
        reset_supplement_once: args.reset_supplement_once,
        escape_special_chars: args.escape_special_chars,
    };

    let converter = DocxToLatex::new(options);

    let result = match &args.output {
        Some(output) => converter.convert(&args.input).and_then(|latex| {
            std::fs::write(output, latex)?;
            log::info!("wrote {}", output.display());
            Ok(())
        }),
        None => converter.convert_to_writer(&args.input, &mut std::io::stdout().lock()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
