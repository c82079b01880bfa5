//! perkconv CLI
//!
//! Matches image files in an input directory against a name-mapping file and
//! copies each match to the output directory as `<target>.png`.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use perkconv_core::{copy_matched, list_files, load_mapping, plan_copies, RunReport};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "perkconv")]
#[command(about = "Copy perk images under names from a mapping file", long_about = None)]
#[command(version)]
struct Cli {
    /// Input directory which holds the perk images
    #[arg(short = 'i', value_name = "DIR")]
    input: Option<PathBuf>,

    /// Output directory where the renamed files should be copied to
    #[arg(short = 'o', value_name = "DIR")]
    output: Option<PathBuf>,

    /// Mapping file holding the new perk names (format: NN_name or target;NN_name)
    #[arg(short = 'd', value_name = "FILE")]
    data: Option<PathBuf>,

    /// Plan and report matches without copying anything
    #[arg(long)]
    dry_run: bool,

    /// Write a JSON report of the run to this path
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> perkconv_core::Result<ExitCode> {
    let (input_dir, output_dir) = match (cli.input, cli.output) {
        (Some(i), Some(o)) => (i, o),
        _ => {
            print_usage();
            return Ok(ExitCode::SUCCESS);
        }
    };

    let data_file = match cli.data {
        Some(d) if d.exists() => d,
        _ => {
            eprintln!("Error: Data file does not exist");
            return Ok(ExitCode::FAILURE);
        }
    };
    if !input_dir.exists() {
        eprintln!("Error: Input folder does not exist");
        return Ok(ExitCode::FAILURE);
    }
    if !output_dir.exists() {
        eprintln!("Error: Output folder does not exist");
        return Ok(ExitCode::FAILURE);
    }

    let spinner = ProgressBar::new_spinner().with_message("Fetching input files.");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let files = list_files(&input_dir)?;
    spinner.finish_with_message(format!("Found {} input files.", files.len()));

    let entries = load_mapping(&data_file)?;

    let pb = progress_bar(entries.len(), "Matching file names");
    let outcome = plan_copies(&entries, &files, &output_dir);
    pb.finish_and_clear();

    let mut report = RunReport::new(
        &input_dir,
        &output_dir,
        &data_file,
        files.len(),
        outcome.clone(),
    );

    if !outcome.all_matched() {
        let rows: Vec<Vec<String>> = outcome
            .missing
            .iter()
            .map(|e| e.segments().iter().map(|s| s.to_string()).collect())
            .collect();
        println!("{}", render_boxed(&rows));
        eprintln!(
            "Error: {} files could not be matched, please fix the entries above.",
            outcome.missing.len()
        );
        save_report(&report, cli.report.as_deref())?;
        return Ok(ExitCode::FAILURE);
    }

    println!("Matched: {}", outcome.matched.len());

    if cli.dry_run {
        let rows: Vec<Vec<String>> = outcome
            .matched
            .iter()
            .map(|p| vec![p.source.display().to_string(), p.dest.display().to_string()])
            .collect();
        println!("{}", render_boxed(&rows));
        println!("Dry run: {} files would be copied.", outcome.matched.len());
        save_report(&report, cli.report.as_deref())?;
        return Ok(ExitCode::SUCCESS);
    }

    let pb = progress_bar(outcome.matched.len(), "Copying file");
    // copy_matched enforces the missing gate; unmatched entries copy nothing
    let copy_report = copy_matched(&outcome, |_| pb.inc(1)).unwrap_or_default();
    pb.finish_and_clear();

    if !copy_report.failures.is_empty() {
        let rows: Vec<Vec<String>> = copy_report
            .failures
            .iter()
            .map(|f| vec![f.message.clone()])
            .collect();
        println!("{}", render_boxed(&rows));
        eprintln!("Warning: Some files could not be copied, review list above");
    }
    println!("Copied: {}", copy_report.copied);

    report.record_copies(copy_report);
    save_report(&report, cli.report.as_deref())?;

    Ok(ExitCode::SUCCESS)
}

fn save_report(report: &RunReport, path: Option<&std::path::Path>) -> perkconv_core::Result<()> {
    if let Some(path) = path {
        report.save(path)?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn progress_bar(len: usize, message: &'static str) -> ProgressBar {
    let style = ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    ProgressBar::new(len as u64)
        .with_style(style)
        .with_message(message)
}

fn print_usage() {
    let rows = vec![
        vec!["Input and output folder needed.".to_string()],
        vec![String::new()],
        vec!["Usage: perkconv -i /path/to/input/folder -o /path/to/output/folder -d /path/to/mapping.txt".to_string()],
        vec![String::new()],
        vec!["Input Folder: Specify the input directory which holds the perk images.".to_string()],
        vec!["Output Folder: Specify the output directory where the renamed files should be copied to.".to_string()],
        vec!["Mapping File: Specify the file holding the new perk names.".to_string()],
    ];
    println!("{}", render_boxed(&rows));
}

/// Render rows as a unicode-boxed table with per-column padding
fn render_boxed(rows: &[Vec<String>]) -> String {
    let cols = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    if cols == 0 {
        return String::new();
    }

    let mut widths = vec![0usize; cols];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let edge = |left: char, mid: char, right: char| {
        let mut line = String::new();
        line.push(left);
        for (i, w) in widths.iter().enumerate() {
            line.push_str(&"─".repeat(w + 2));
            line.push(if i + 1 == cols { right } else { mid });
        }
        line
    };

    let mut out = String::new();
    out.push_str(&edge('┌', '┬', '┐'));
    out.push('\n');
    for row in rows {
        out.push('│');
        for (i, w) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let pad = w - cell.chars().count();
            out.push(' ');
            out.push_str(cell);
            out.push_str(&" ".repeat(pad + 1));
            out.push('│');
        }
        out.push('\n');
    }
    out.push_str(&edge('└', '┴', '┘'));
    out
}
