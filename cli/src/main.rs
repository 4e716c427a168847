//! rubrica CLI - DOCX rubric inspection tool
//!
//! Prints the paragraphs and tables of a Word document to stdout so a
//! grading rubric can be reviewed by eye.

use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;

/// Path of the course rubric this tool was written for. Used when no
/// argument is given.
const DEFAULT_DOCUMENT: &str =
    r"c:\vscode\cursos\6semestre\series de tiempo\dashboard_final\RÚBRICA DE EVALUACIÓN_dashboard.docx";

/// Print the paragraphs and tables of a DOCX document
#[derive(Parser)]
#[command(
    name = "rubrica",
    version,
    about = "Print the paragraphs and tables of a DOCX document",
    long_about = "rubrica - DOCX rubric inspection tool.\n\n\
                  Lists every non-blank paragraph, then every table with its rows\n\
                  flattened to pipe-separated lines."
)]
struct Cli {
    /// Document to inspect (defaults to the course rubric)
    #[arg(default_value = DEFAULT_DOCUMENT)]
    input: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let pb = create_spinner("Leyendo el documento...");
    let doc = match rubrica::parse_file(&cli.input) {
        Ok(doc) => doc,
        Err(e) => {
            pb.finish_and_clear();
            println!("{} al abrir el documento: {}", "ERROR".red().bold(), e);
            std::process::exit(1);
        }
    };
    pb.finish_and_clear();

    if let Err(e) = print_report(&doc) {
        eprintln!("{}: {}", "ERROR".red().bold(), e);
        std::process::exit(1);
    }
}

fn print_report(doc: &rubrica::Document) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    rubrica::write_report(doc, &mut handle)?;
    handle.flush()
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_document_path() {
        let cli = Cli::parse_from(["rubrica"]);
        assert_eq!(cli.input, PathBuf::from(DEFAULT_DOCUMENT));
    }
}
