use clap::Parser;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tracing::debug;

use recatconv::cli::{init_logging, Args, CliConfig, Commands};
use recatconv::conversion::{ConversionEngine, RecatData};
use recatconv::error::{ConversionError, ConversionErrorKind};
use recatconv::formatter::JsonFormatter;
use recatconv::lookup::RecatTable;

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    init_logging(args.verbose, args.quiet);

    let outcome = match args.command.clone() {
        Some(Commands::Lookup { icao, input }) => handle_lookup(&icao, input.as_deref()),
        None => CliConfig::from_args(args).and_then(|config| handle_conversion(&config)),
    };

    outcome.map_err(|e| anyhow::anyhow!(e.user_message()))
}

fn handle_conversion(config: &CliConfig) -> Result<(), ConversionError> {
    let source = config.source();
    debug!(
        source = %source.description(),
        output = %config.output_description(),
        "starting conversion"
    );

    let engine = ConversionEngine::new(config.conversion_config.clone());
    let recat_data = engine.convert_from_source(&source)?;

    if config.is_validate_only() {
        report_validation(&recat_data, config.is_quiet());
    } else {
        write_output(&recat_data, config)?;
    }

    // Output statistics if requested
    if config.want_stats() && !config.is_quiet() {
        eprintln!("\n{}", recat_data.statistics);
    }

    Ok(())
}

fn write_output(recat_data: &RecatData, config: &CliConfig) -> Result<(), ConversionError> {
    let formatter = JsonFormatter::from_config(&config.conversion_config);

    if let Some(output_path) = &config.args.output {
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| io_error(e, output_path))?;
        }
        let file = std::fs::File::create(output_path).map_err(|e| io_error(e, output_path))?;
        formatter.write_to(&recat_data.definitions, file)?;

        if !config.is_quiet() {
            println!(
                "✓ Converted {} records to: {}",
                recat_data.len(),
                output_path.display()
            );
        }
    } else {
        let stdout = std::io::stdout();
        formatter.write_to(&recat_data.definitions, stdout.lock())?;
    }

    Ok(())
}

fn report_validation(recat_data: &RecatData, quiet: bool) {
    if quiet {
        return;
    }

    let warnings = recat_data
        .validation
        .as_ref()
        .map_or(0, |report| report.warning_count());
    println!(
        "✓ Valid RECAT table: {} records, {} warnings",
        recat_data.len(),
        warnings
    );
}

fn handle_lookup(icao: &str, input: Option<&Path>) -> Result<(), ConversionError> {
    let table = match input {
        Some(path) => RecatTable::from_json_file(path)?,
        None => RecatTable::from_reader(std::io::stdin().lock())?,
    };
    debug!(definitions = table.len(), icao, "looking up category");

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", table.category_for(icao)).map_err(|e| {
        ConversionError::conversion(ConversionErrorKind::io(
            format!("Failed to write output: {}", e),
            None,
        ))
    })
}

fn io_error(error: std::io::Error, path: &Path) -> ConversionError {
    ConversionError::conversion(ConversionErrorKind::io(
        error.to_string(),
        Some(path.to_path_buf()),
    ))
}
