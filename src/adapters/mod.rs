pub mod batch;
#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::batch::convert_readings;
    use crate::adapters::cli::{Args, parse_inputs};

    let args = Args::parse();
    let (readings, options) = parse_inputs(&args)?;

    let records = convert_readings(&readings, &options);

    crate::adapters::cli::print_output(&records, &args)?;

    Ok(())
}
