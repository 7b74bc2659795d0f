use std::fs;
use std::path::PathBuf;

use clap::Parser;
use flight_envelope::cli::{ScenarioArgs, init_tracing};
use flight_envelope::envelope::evaluate_scenario;
use plotters::coord::Shift;
use plotters::prelude::*;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render lift, drag, thrust and rate-of-climb curves to a PNG"
)]
struct Cli {
    #[command(flatten)]
    scenario: ScenarioArgs,
    #[arg(long, default_value = "artifacts/envelope.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 1200)]
    width: u32,
    #[arg(long, default_value_t = 1000)]
    height: u32,
}

struct Series<'a> {
    label: &'a str,
    values: &'a [f64],
    color: RGBColor,
}

struct Panel<'a> {
    title: &'a str,
    y_desc: &'a str,
    series: Vec<Series<'a>>,
}

const REFERENCE: RGBColor = RGBColor(200, 30, 30);
const ORANGE: RGBColor = RGBColor(230, 130, 20);
const GREEN_DARK: RGBColor = RGBColor(30, 140, 60);

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let evaluation = evaluate_scenario(cli.scenario.resolve()?)?;
    let curve = &evaluation.curve;

    let weight_line = vec![evaluation.aircraft.weight_n; curve.len()];
    let zero_line = vec![0.0; curve.len()];
    let panels = [
        Panel {
            title: "Lift vs Speed",
            y_desc: "Lift (N)",
            series: vec![
                Series {
                    label: "Lift",
                    values: curve.lift_n(),
                    color: BLUE,
                },
                Series {
                    label: "Weight",
                    values: &weight_line,
                    color: REFERENCE,
                },
            ],
        },
        Panel {
            title: "Drag vs Speed",
            y_desc: "Drag (N)",
            series: vec![
                Series {
                    label: "Parasite Drag",
                    values: curve.parasite_drag_n(),
                    color: BLUE,
                },
                Series {
                    label: "Induced Drag",
                    values: curve.induced_drag_n(),
                    color: ORANGE,
                },
                Series {
                    label: "Total Drag",
                    values: curve.total_drag_n(),
                    color: GREEN_DARK,
                },
            ],
        },
        Panel {
            title: "Thrust Required vs Thrust Available",
            y_desc: "Thrust (N)",
            series: vec![
                Series {
                    label: "Thrust Required",
                    values: curve.thrust_required_n(),
                    color: BLUE,
                },
                Series {
                    label: "Thrust Available",
                    values: curve.thrust_available_n(),
                    color: ORANGE,
                },
            ],
        },
        Panel {
            title: "Rate of Climb vs Speed",
            y_desc: "Rate of Climb (m/s)",
            series: vec![
                Series {
                    label: "Rate of Climb",
                    values: curve.rate_of_climb_m_s(),
                    color: BLUE,
                },
                Series {
                    label: "Level Flight (RoC = 0)",
                    values: &zero_line,
                    color: REFERENCE,
                },
            ],
        },
    ];

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 22.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 15.0, FontStyle::Normal);

    for (area, panel) in root.split_evenly((2, 2)).iter().zip(&panels) {
        draw_panel(area, curve.airspeed_m_s(), panel, &caption_font, &label_font)?;
    }

    root.present()?;
    tracing::info!(output = %cli.output.display(), "wrote envelope plot");
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    airspeeds: &[f64],
    panel: &Panel<'_>,
    caption_font: &FontDesc<'_>,
    label_font: &FontDesc<'_>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (x_min, x_max) = padded_range(airspeeds.iter().copied(), 0.0);
    let (y_min, y_max) = padded_range(
        panel.series.iter().flat_map(|s| s.values.iter().copied()),
        0.05,
    );

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .caption(panel.title, caption_font.clone())
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Speed (m/s)")
        .y_desc(panel.y_desc)
        .label_style(label_font.clone())
        .axis_desc_style(label_font.clone())
        .draw()?;

    for series in &panel.series {
        let color = series.color;
        chart
            .draw_series(LineSeries::new(
                airspeeds.iter().copied().zip(series.values.iter().copied()),
                color.stroke_width(2),
            ))?
            .label(series.label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(label_font.clone())
        .draw()?;
    Ok(())
}

/// Min/max of finite values, widened by `pad` of the span. Degenerate spans get a unit margin.
fn padded_range(values: impl Iterator<Item = f64>, pad: f64) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let span = max - min;
    if span.abs() < f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }
    (min - pad * span, max + pad * span)
}
