//! Line Table CLI
//!
//! Command-line tool for inspecting and exporting delimiter-separated
//! line-table files.

use clap::{Parser, Subcommand};
use lt_core::{export_csv, export_json, parse_file, scan_directory, DEFAULT_DELIMITER};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lt-cli")]
#[command(about = "Line Table Viewer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and display a single data file
    Parse {
        /// Path to the data file
        #[arg(short, long)]
        file: PathBuf,

        /// Field delimiter
        #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
        delimiter: char,
    },

    /// Look up a labeled value with a typed accessor
    Get {
        /// Path to the data file
        #[arg(short, long)]
        file: PathBuf,

        /// Label of the line to read
        #[arg(short, long)]
        label: String,

        /// Value type (string, int, float or bool)
        #[arg(long = "as", default_value = "string")]
        value_type: String,

        /// Field delimiter
        #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
        delimiter: char,
    },

    /// Scan directories for data files
    Scan {
        /// Root directories to scan
        #[arg(short, long, required = true)]
        root: Vec<PathBuf>,

        /// File extension to look for
        #[arg(short, long, default_value = "csv")]
        ext: String,
    },

    /// Export a parsed file as normalized CSV or JSON
    Export {
        /// Path to the data file
        #[arg(short, long)]
        file: PathBuf,

        /// Output format (csv or json)
        #[arg(long, default_value = "csv")]
        format: String,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Field delimiter
        #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
        delimiter: char,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> lt_core::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, delimiter } => cmd_parse(&file, delimiter),
        Commands::Get {
            file,
            label,
            value_type,
            delimiter,
        } => cmd_get(&file, &label, &value_type, delimiter),
        Commands::Scan { root, ext } => cmd_scan(&root, &ext),
        Commands::Export {
            file,
            format,
            output,
            delimiter,
        } => cmd_export(&file, &format, &output, delimiter),
    }
}

fn cmd_parse(file: &PathBuf, delimiter: char) -> lt_core::Result<()> {
    let table = parse_file(file, delimiter)?;

    println!("File: {}", file.display());
    println!("Lines: {}", table.line_count());
    println!("Last line number: {}", table.last_line_number());
    match table.first_non_blank_line() {
        Some(line) => println!("First non-blank line: {}", line.number),
        None => println!("First non-blank line: none"),
    }
    println!();

    for line in table.lines.iter().take(10) {
        println!("{:>4} | {}", line.number, line.fields.join("\t"));
    }

    if table.line_count() > 10 {
        println!("... ({} more lines)", table.line_count() - 10);
    }

    Ok(())
}

fn cmd_get(file: &PathBuf, label: &str, value_type: &str, delimiter: char) -> lt_core::Result<()> {
    let table = parse_file(file, delimiter)?;

    match value_type.to_lowercase().as_str() {
        "string" => println!("{}", table.required_string(label)?),
        "int" => println!("{}", table.required_int(label)?),
        "float" => println!("{}", table.required_double(label)?),
        "bool" => println!("{}", table.required_bool_or_default(label)?),
        _ => {
            eprintln!(
                "Unknown type: {}. Supported types: string, int, float, bool",
                value_type
            );
            std::process::exit(1);
        }
    }

    Ok(())
}

fn cmd_scan(roots: &[PathBuf], ext: &str) -> lt_core::Result<()> {
    let result = scan_directory(roots, ext)?;

    println!("Scanned {} root(s):", result.roots.len());
    for root in &result.roots {
        println!("  {}", root.display());
    }
    println!();
    println!("Found {} .{} file(s):", result.file_count(), ext);
    for file in &result.files {
        println!("  {}", file.display());
    }

    Ok(())
}

fn cmd_export(
    file: &PathBuf,
    format: &str,
    output: &PathBuf,
    delimiter: char,
) -> lt_core::Result<()> {
    let table = parse_file(file, delimiter)?;

    let out = File::create(output)?;
    let writer = BufWriter::new(out);

    match format.to_lowercase().as_str() {
        "csv" => export_csv(&table, writer)?,
        "json" => export_json(&table, writer)?,
        _ => {
            eprintln!("Unknown format: {}. Supported formats: csv, json", format);
            std::process::exit(1);
        }
    }

    println!("Exported {} lines to {}", table.line_count(), output.display());

    Ok(())
}
