use std::path::{Path, PathBuf};

use clap::Parser;
use csv::Writer;

use bref_html_tables::pages::SCHEDULE_TABLE_ID;
use bref_html_tables::ScrapeSession;
use nba_fixture_parser::parsers::{parse_fixture_table, FixtureTable};

#[derive(Debug, Parser)]
#[command(name = "Fixture Export")]
#[command(about = "Parses a saved schedule page and outputs fixtures to CSV", long_about = None)]
struct Config {
	/// Path to the saved schedule HTML page
	#[arg(short, long, value_name = "FILE")]
	input_file: PathBuf,

	/// Path to the output CSV file
	#[arg(short, long, value_name = "FILE")]
	output_file: PathBuf,
}

fn write_to_csv(table: &FixtureTable, output_path: &Path) -> Result<(), csv::Error> {
	let mut wtr = Writer::from_path(output_path)?;

	wtr.write_record(&table.headings)?;

	for fixture in &table.fixtures {
		wtr.write_record(&[
			fixture.date.clone(),
			fixture.tip_off_time.clone(),
			fixture.away_team.clone(),
			fixture.away_points.to_string(),
			fixture.home_team.clone(),
			fixture.home_points.to_string(),
			fixture.attendance.to_string(),
		])?;
	}

	wtr.flush()?;
	Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	dotenv::dotenv().ok();

	let config = Config::parse();

	// Read the saved schedule page and flatten the fixtures table
	let session = ScrapeSession::from_file(&config.input_file)?;
	let lines = session.table_lines(SCHEDULE_TABLE_ID)?;

	// Parse the table text into fixture records
	let table = parse_fixture_table(&lines)?;

	// Write the parsed fixtures to a CSV file
	write_to_csv(&table, &config.output_file)?;

	println!("CSV file generated successfully!");
	Ok(())
}
