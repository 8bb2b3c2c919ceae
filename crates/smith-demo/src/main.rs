// File: crates/smith-demo/src/main.rs
// Summary: Loads impedance samples from CSV and renders them on a Smith chart PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use smith_core::{ComplexPoint, Dataset, SmithChart, SmithOptions};
use smith_render_skia::{render_to_png, RenderOptions};

/// Plot normalized impedances on a Smith chart.
#[derive(Parser, Debug)]
#[command(name = "smith-demo", version)]
struct Args {
    /// CSV file with real/imag columns (header row required).
    input: PathBuf,
    /// TOML file with chart options.
    #[arg(long)]
    options: Option<PathBuf>,
    /// Output PNG; defaults to target/out/smith_<stem>.png.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Square image size in pixels.
    #[arg(long, default_value_t = 600)]
    size: i32,
    /// Dataset label shown in tooltips.
    #[arg(long, default_value = "S11")]
    label: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("smith_demo=info".parse()?)
                .add_directive("smith_render_skia=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let options = match &args.options {
        Some(p) => load_options(p)?,
        None => SmithOptions::default(),
    };
    let samples = load_impedance_csv(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    info!(rows = samples.len(), input = %args.input.display(), "loaded samples");
    if samples.is_empty() {
        anyhow::bail!("no samples loaded, check headers/delimiter");
    }

    let mut chart = SmithChart::new(options);
    chart.add_dataset(Dataset::new(args.label.as_str(), samples));

    let mut opts = RenderOptions::default();
    opts.width = args.size;
    opts.height = args.size;

    let out = args.out.clone().unwrap_or_else(|| out_name_for(&args.input));
    render_to_png(&mut chart, &opts, &out)?;

    let skipped = chart.point_models(0).map(|m| m.iter().filter(|p| p.skip).count()).unwrap_or(0);
    if skipped > 0 {
        warn!(skipped, "samples outside the chart domain were not plotted");
    }
    info!(out = %out.display(), "wrote chart");
    Ok(())
}

fn load_options(path: &Path) -> Result<SmithOptions> {
    let src = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&src).with_context(|| format!("parsing options {}", path.display()))
}

/// target/out/smith_<stem>.png
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("smith_{stem}.png"))
}

/// Read `real,imag` rows. Columns are matched by header name and both must
/// be present; rows that do not parse are dropped with a warning.
fn load_impedance_csv(path: &Path) -> Result<Vec<ComplexPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_real = idx(&["real", "re", "r", "resistance"])
        .with_context(|| format!("no real/resistance column in headers {headers:?}"))?;
    let i_imag = idx(&["imag", "im", "x", "reactance"])
        .with_context(|| format!("no imag/reactance column in headers {headers:?}"))?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        match (parse(i_real), parse(i_imag)) {
            (Some(real), Some(imag)) => out.push(ComplexPoint::new(real, imag)),
            _ => warn!(row, "skipping malformed row"),
        }
    }
    Ok(out)
}
