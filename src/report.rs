//! Text, CSV and JSON renderings of an evaluated envelope.

use std::io::{self, Write};

use envelope_atmosphere::AtmosphereSample;
use envelope_performance::{AircraftConfig, EnvelopeSummary, PerformanceCurve};
use serde::Serialize;

/// Everything one evaluation produced, in a serializable bundle.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub scenario: &'a str,
    pub aircraft: &'a AircraftConfig,
    pub atmosphere: &'a AtmosphereSample,
    pub summary: Option<&'a EnvelopeSummary>,
    pub curve: &'a PerformanceCurve,
}

/// Write the curve as CSV, one row per airspeed, with a header row.
pub fn write_csv<W: Write>(writer: W, curve: &PerformanceCurve) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in curve.points() {
        wtr.serialize(point)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the full report as pretty-printed JSON.
pub fn write_json<W: Write>(writer: W, report: &Report<'_>) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, report)
}

/// Write the headline numbers in human-readable form.
pub fn write_summary(writer: &mut dyn Write, report: &Report<'_>) -> io::Result<()> {
    let atm = report.atmosphere;
    writeln!(writer, "Scenario: {}", report.scenario)?;
    writeln!(
        writer,
        "Altitude: {:.0} m  density {:.4} kg/m^3  T {:.2} K  p {:.0} Pa",
        atm.altitude_m, atm.density_kg_m3, atm.temperature_k, atm.pressure_pa
    )?;
    writeln!(
        writer,
        "Induced drag factor k: {:.5}",
        report.aircraft.induced_drag_factor()
    )?;
    let Some(summary) = report.summary else {
        return Ok(());
    };
    writeln!(
        writer,
        "Minimum drag: {:.1} N at {:.1} m/s",
        summary.min_drag.value, summary.min_drag.airspeed_m_s
    )?;
    writeln!(
        writer,
        "Best rate of climb: {:.2} m/s at {:.1} m/s",
        summary.best_rate_of_climb.value, summary.best_rate_of_climb.airspeed_m_s
    )?;
    if summary.thrust_crossings_m_s.is_empty() {
        writeln!(writer, "Thrust required never crosses thrust available")?;
    } else {
        let speeds: Vec<String> = summary
            .thrust_crossings_m_s
            .iter()
            .map(|v| format!("{v:.1} m/s"))
            .collect();
        writeln!(writer, "Thrust crossings: {}", speeds.join(", "))?;
    }
    Ok(())
}

/// Write the curve as a fixed-width table.
pub fn write_table(writer: &mut dyn Write, curve: &PerformanceCurve) -> io::Result<()> {
    writeln!(
        writer,
        "{:>8} {:>8} {:>8} {:>10} {:>9} {:>9} {:>9} {:>9} {:>9} {:>8}",
        "V m/s", "CL", "CD", "q Pa", "Lift N", "Dp N", "Di N", "D N", "Ta N", "RoC m/s"
    )?;
    for p in curve.points() {
        writeln!(
            writer,
            "{:>8.2} {:>8.4} {:>8.5} {:>10.1} {:>9.1} {:>9.1} {:>9.1} {:>9.1} {:>9.1} {:>8.3}",
            p.airspeed_m_s,
            p.lift_coefficient,
            p.drag_coefficient,
            p.dynamic_pressure_pa,
            p.lift_n,
            p.parasite_drag_n,
            p.induced_drag_n,
            p.total_drag_n,
            p.thrust_available_n,
            p.rate_of_climb_m_s,
        )?;
    }
    Ok(())
}
