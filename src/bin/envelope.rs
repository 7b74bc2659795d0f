use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use flight_envelope::cli::{ScenarioArgs, init_tracing};
use flight_envelope::envelope::evaluate_scenario;
use flight_envelope::report;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Steady level-flight performance envelope (drag, thrust, rate of climb)"
)]
struct Cli {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Output format for the per-airspeed table
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Print only the summary, not the per-airspeed table
    #[arg(long, default_value_t = false)]
    summary_only: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let scenario = cli.scenario.resolve()?;
    let evaluation = evaluate_scenario(scenario)?;
    let report = evaluation.report();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Json => {
            report::write_json(&mut out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            report::write_csv(&mut out, &evaluation.curve)?;
        }
        OutputFormat::Table => {
            report::write_summary(&mut out, &report)?;
            if !cli.summary_only {
                writeln!(out)?;
                report::write_table(&mut out, &evaluation.curve)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
