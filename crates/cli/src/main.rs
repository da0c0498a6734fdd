mod input;
mod provenance;
mod render;

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use xsection::api::{
    outline_geometry, section_properties_with, Inertia, OutlineCfg, Report, SectionCfg,
    SectionProperties,
};

use crate::provenance::{write_sidecar, Payload};
use crate::render::ImageKind;

#[derive(Parser)]
#[command(name = "xsection-cli")]
#[command(about = "Cross-sectional properties of planar polygons")]
struct Cmd {
    /// Relative degeneracy tolerance: |A| <= eps * extent² is rejected
    #[arg(long, global = true, default_value_t = SectionCfg::default().eps_area,
          value_parser = non_negative)]
    eps_area: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute area, centroid, inertia and principal axes of one polygon
    Props {
        /// Polygon file (.csv/.parquet with x,y columns, or .json)
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Write the result here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Also report moments about the centroid
        #[arg(long)]
        centroidal: bool,
    },
    /// Draw the outline with centroid and principal axes (SVG or PNG)
    Outline {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Image format; taken from the `--out` extension when omitted
        #[arg(long, value_enum)]
        format: Option<ImageKind>,
        /// Figure width in inches
        #[arg(long, default_value_t = 8.0)]
        width: f64,
        /// Figure height in inches
        #[arg(long, default_value_t = 8.0)]
        height: f64,
        /// Pixels per inch
        #[arg(long, default_value_t = 100)]
        dpi: u32,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = SectionCfg {
        eps_area: cmd.eps_area,
    };
    match cmd.action {
        Action::Props {
            input,
            format,
            out,
            centroidal,
        } => props(&input, format, out.as_deref(), centroidal, cfg),
        Action::Outline {
            input,
            out,
            format,
            width,
            height,
            dpi,
        } => {
            let kind = format.unwrap_or_else(|| ImageKind::from_path(&out));
            let size = pixel_size(width, height, dpi)?;
            outline(&input, &out, kind, size, cfg)
        }
        Action::Report => report(),
    }
}

fn non_negative(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(format!("must be >= 0, got {v}"))
    }
}

/// Figure size in inches at `dpi` to whole pixels.
fn pixel_size(width: f64, height: f64, dpi: u32) -> Result<(u32, u32)> {
    let w = (width * dpi as f64).round();
    let h = (height * dpi as f64).round();
    ensure!(
        w >= 1.0 && h >= 1.0 && w <= u32::MAX as f64 && h <= u32::MAX as f64,
        "figure {width}x{height} in at {dpi} dpi is not a usable pixel size"
    );
    Ok((w as u32, h as u32))
}

fn compute(input: &Path, cfg: SectionCfg) -> Result<SectionProperties> {
    let pts = input::load_polygon(input)?;
    section_properties_with(&pts, cfg)
        .with_context(|| format!("computing section properties of {}", input.display()))
}

fn props(
    input: &Path,
    format: Format,
    out: Option<&Path>,
    centroidal: bool,
    cfg: SectionCfg,
) -> Result<()> {
    tracing::info!(input = %input.display(), ?format, out = ?out, centroidal, "props");
    let p = compute(input, cfg)?;
    tracing::info!(
        area = p.area,
        cx = p.centroid.x,
        cy = p.centroid.y,
        theta = p.principal.theta,
        "section"
    );
    let body = match format {
        Format::Text => Report::new(&p).with_centroidal(centroidal).to_string() + "\n",
        Format::Json => serde_json::to_string_pretty(&props_json(&p, centroidal))? + "\n",
    };
    match out {
        None => print!("{body}"),
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
            let payload = Payload::new(json!({
                "command": "props",
                "format": format!("{format:?}").to_lowercase(),
                "centroidal": centroidal,
                "eps_area": cfg.eps_area
            }))
            .with_input(input);
            write_sidecar(path, payload)?;
        }
    }
    Ok(())
}

fn inertia_json(i: &Inertia) -> Value {
    json!({ "ixx": i.ixx, "iyy": i.iyy, "ixy": i.ixy })
}

fn props_json(p: &SectionProperties, centroidal: bool) -> Value {
    let mut v = json!({
        "area": p.area,
        "centroid": { "x": p.centroid.x, "y": p.centroid.y },
        "inertia": inertia_json(&p.inertia),
        "principal": {
            "i1": p.principal.i1,
            "i2": p.principal.i2,
            "theta": p.principal.theta,
            "theta_deg": p.principal.theta.to_degrees()
        }
    });
    if centroidal {
        v["centroidal_inertia"] = inertia_json(&p.centroidal_inertia());
    }
    v
}

fn outline(
    input: &Path,
    out: &Path,
    kind: ImageKind,
    size: (u32, u32),
    cfg: SectionCfg,
) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), ?kind, ?size, "outline");
    let pts = input::load_polygon(input)?;
    let ocfg = OutlineCfg {
        size,
        ..OutlineCfg::default()
    };
    let geometry = outline_geometry(&pts, &ocfg, cfg)
        .with_context(|| format!("building outline of {}", input.display()))?;
    render::write_outline(out, &geometry, kind)?;
    let payload = Payload::new(json!({
        "command": "outline",
        "format": format!("{kind:?}").to_lowercase(),
        "size": [size.0, size.1],
        "border_frac": ocfg.border_frac,
        "axis_frac": ocfg.axis_frac,
        "eps_area": cfg.eps_area
    }))
    .with_input(input);
    write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let mut obj = provenance::header();
    obj["params"] = json!({});
    obj["outputs"] = json!([]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
