use clap::Parser;
use std::fs;
use std::io::{self, Read};

use crate::error::AppError;
use crate::models::{BatchOptions, Reading, ReadingRecord, ReadingStatus};

#[derive(Parser, Debug)]
#[command(author, version, about = "PSS-78 salinity from conductivity readings — optional JSON output", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file with readings and optional options; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON array of readings (overrides --input)"
    )]
    readings_json: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for batch options (optional, supplements --readings-json)"
    )]
    options_json: Option<String>,
}

fn parse_inline_readings(
    readings_json: &str,
    options_json: Option<&String>,
) -> Result<(Vec<Reading>, BatchOptions), AppError> {
    let readings: Vec<Reading> = serde_json::from_str(readings_json)
        .map_err(|source| AppError::ParseReadingsJson { source })?;

    let options = match options_json {
        Some(s) => serde_json::from_str::<BatchOptions>(s)
            .map_err(|source| AppError::ParseOptionsJson { source })?,
        None => BatchOptions::default(),
    };

    Ok((readings, options))
}

fn parse_cmd_input_doc(doc: &str) -> Result<(Vec<Reading>, BatchOptions), AppError> {
    let parsed: CmdInput =
        serde_json::from_str(doc).map_err(|source| AppError::ParseCmdInputJson { source })?;
    Ok((parsed.readings, parsed.options.unwrap_or_default()))
}

pub fn parse_inputs(args: &Args) -> Result<(Vec<Reading>, BatchOptions), AppError> {
    match (&args.readings_json, &args.input) {
        (Some(readings_json), _) => parse_inline_readings(readings_json, args.options_json.as_ref()),
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_cmd_input_doc(&s)
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_cmd_input_doc(&s)
        }
        (None, None) => Err(AppError::MissingInputData),
    }
}

#[derive(serde::Deserialize)]
struct CmdInput {
    readings: Vec<Reading>,
    #[serde(default)]
    options: Option<BatchOptions>,
}

pub fn print_output(records: &[ReadingRecord], args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(&records)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else {
        for (i, rec) in records.iter().enumerate() {
            match (rec.status, rec.salinity_psu) {
                (ReadingStatus::Valid, Some(s)) => println!("{}: {:.4}", i + 1, s),
                (ReadingStatus::Invalid, _) => {
                    println!("{}: invalid (conductivity <= 0.2 S/m)", i + 1)
                }
                _ => println!("{}: no data", i + 1),
            }
        }
    }

    Ok(())
}
