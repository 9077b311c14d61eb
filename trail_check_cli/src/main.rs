use std::fs::File;

use clap::Parser;
use log::info;
use trail_check::io::{
    read_elements_csv, report_json_string, table_csv_string, write_files, InputLayout,
};
use trail_check::report::render_table;
use trail_check::{analyze, DesignTables, RowFilter};

/// Checks design speeds and element lengths of an alignment listing.
#[derive(Parser)]
#[command(name = "trail_check_cli", version)]
struct Cli {
    /// CSV listing of the alignment elements
    input: String,
    /// Print all elements instead of only the flagged ones
    #[arg(long)]
    all: bool,
    /// Export the printed table to a CSV file
    #[arg(long)]
    csv: Option<String>,
    /// Export the report as JSON
    #[arg(long)]
    json: Option<String>,
    /// JSON file with design tables replacing the built-in ones
    #[arg(long)]
    tables: Option<String>,
    /// Rows before the first element row
    #[arg(long, default_value_t = 3)]
    skip_header: usize,
    /// Rows after the last element row
    #[arg(long, default_value_t = 1)]
    skip_footer: usize,
}

fn init_logging() {
    if let Ok(path) = std::env::var("TRAIL_CHECK_LOG") {
        match File::create(&path) {
            Ok(file) => {
                env_logger::Builder::from_default_env()
                    .target(env_logger::Target::Pipe(Box::new(file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Failed to create log file {}: {}", path, e);
                env_logger::Builder::from_default_env().init();
            }
        }
    } else {
        env_logger::Builder::from_default_env().init();
    }
}

fn run(cli: &Cli) -> trail_check::Result<()> {
    let loaded;
    let tables = match &cli.tables {
        Some(path) => {
            loaded = DesignTables::read_json(path)?;
            info!("using design tables from {}", path);
            &loaded
        }
        None => DesignTables::builtin(),
    };
    let layout = InputLayout {
        skip_header: cli.skip_header,
        skip_footer: cli.skip_footer,
    };
    let elements = read_elements_csv(&cli.input, layout)?;
    let analysis = analyze(elements, tables)?;

    let filter = if cli.all {
        RowFilter::All
    } else {
        RowFilter::Flagged
    };
    let report = analysis.report(filter);
    let table = report.table();

    let mut exports = Vec::new();
    if let Some(path) = &cli.csv {
        exports.push((path, table_csv_string(&table)?));
    }
    if let Some(path) = &cli.json {
        exports.push((path, report_json_string(&report)?));
    }
    write_files(&exports)?;
    for (path, _) in &exports {
        info!("wrote {}", path);
    }

    print!("{}", render_table(&table));
    println!("{}", report.mean_line());
    Ok(())
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error checking {}: {}", cli.input, e);
        std::process::exit(1);
    }
}
