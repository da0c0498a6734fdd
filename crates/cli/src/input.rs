//! Polygon loaders for the CLI.
//!
//! - `.csv` / `.parquet`: tabular vertices, columns `x` and `y` (else the first two).
//! - `.json`: `[[x, y], ...]`, `[{"x":..,"y":..}, ...]` or `{"points": <either>}`.

use anyhow::{bail, ensure, Context, Result};
use nalgebra::Vector2;
use polars::prelude::*;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPoint {
    Pair([f64; 2]),
    Named { x: f64, y: f64 },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPolygon {
    Bare(Vec<JsonPoint>),
    Wrapped { points: Vec<JsonPoint> },
}

/// Load polygon vertices from `path`, dispatching on the file extension.
pub fn load_polygon(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let pts = match ext.as_deref() {
        Some("json") => load_json(path)?,
        Some("csv") => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("scanning {}", path.display()))?;
            load_frame(lf, path)?
        }
        Some("parquet") => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("scanning {}", path.display()))?;
            load_frame(lf, path)?
        }
        _ => bail!(
            "unsupported polygon file {} (expected .csv, .parquet or .json)",
            path.display()
        ),
    };
    tracing::debug!(path = %path.display(), vertices = pts.len(), "polygon_loaded");
    Ok(pts)
}

fn load_json(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let poly: JsonPolygon = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing polygon JSON {}", path.display()))?;
    let points = match poly {
        JsonPolygon::Bare(p) | JsonPolygon::Wrapped { points: p } => p,
    };
    Ok(points
        .into_iter()
        .map(|p| match p {
            JsonPoint::Pair([x, y]) => Vector2::new(x, y),
            JsonPoint::Named { x, y } => Vector2::new(x, y),
        })
        .collect())
}

fn load_frame(lf: LazyFrame, path: &Path) -> Result<Vec<Vector2<f64>>> {
    let df = lf
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    ensure!(
        df.width() >= 2,
        "{} needs two coordinate columns, found {}",
        path.display(),
        df.width()
    );
    let (xs, ys) = match (df.column("x"), df.column("y")) {
        (Ok(x), Ok(y)) => (x.clone(), y.clone()),
        _ => {
            let cols = df.get_columns();
            (cols[0].clone(), cols[1].clone())
        }
    };
    let xs = coordinates(&xs)?;
    let ys = coordinates(&ys)?;
    Ok(xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Vector2::new(x, y))
        .collect())
}

fn coordinates(s: &Series) -> Result<Vec<f64>> {
    let cast = s
        .cast(&DataType::Float64)
        .with_context(|| format!("column {} is not numeric", s.name()))?;
    let ca = cast.f64()?;
    ca.into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("column {} has a null at row {row}", s.name())))
        .collect()
}
