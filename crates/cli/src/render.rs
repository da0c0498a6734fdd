//! SVG and PNG rendering of a section outline.
//!
//! All geometry comes precomputed in `xsection::api::Outline`; this module only maps
//! it to pixels and builds a fresh `svg::Document` or `RgbImage` per call.
//! Axis colors are colorblind-safe: major axis blue, minor axis vermillion.

use anyhow::{Context, Result};
use clap::ValueEnum;
use image::{ImageBuffer, Rgb, RgbImage};
use nalgebra::Vector2;
use std::path::Path;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Line, Path as SvgPath, Rectangle};
use svg::Document;
use xsection::api::{Outline, Segment};

const MAJOR_AXIS: &str = "#0072B2";
const MINOR_AXIS: &str = "#D55E00";
const MAJOR_RGB: Rgb<u8> = Rgb([0x00, 0x72, 0xB2]);
const MINOR_RGB: Rgb<u8> = Rgb([0xD5, 0x5E, 0x00]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Output image format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ImageKind {
    Svg,
    Png,
}

impl ImageKind {
    /// `png` for a `.png` extension (any case), otherwise `svg`.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(e) if e.eq_ignore_ascii_case("png") => Self::Png,
            _ => Self::Svg,
        }
    }
}

/// Build the SVG document for `outline`.
pub fn outline_svg(outline: &Outline) -> Document {
    let (w, h) = outline.size;
    let px = |p: Vector2<f64>| {
        let q = outline.project(p);
        (q.x as f32, q.y as f32)
    };

    let mut data = Data::new();
    for (i, p) in outline.ring.iter().enumerate() {
        data = if i == 0 {
            data.move_to(px(*p))
        } else {
            data.line_to(px(*p))
        };
    }
    let boundary = SvgPath::new()
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 2)
        .set("stroke-linejoin", "round")
        .set("d", data);

    let mut doc = Document::new()
        .set("width", w)
        .set("height", h)
        .set("viewBox", (0, 0, w, h))
        .add(
            Rectangle::new()
                .set("width", w)
                .set("height", h)
                .set("fill", "white"),
        )
        .add(boundary);
    // closing vertex repeats the first one
    for p in &outline.ring[..outline.ring.len().saturating_sub(1)] {
        let (x, y) = px(*p);
        doc = doc.add(
            Circle::new()
                .set("cx", x)
                .set("cy", y)
                .set("r", 3)
                .set("fill", "black"),
        );
    }
    let (cx, cy) = px(outline.props.centroid);
    doc.add(axis_line(&outline.major, MAJOR_AXIS, 2, &px))
        .add(axis_line(&outline.minor, MINOR_AXIS, 1, &px))
        .add(
            Circle::new()
                .set("cx", cx)
                .set("cy", cy)
                .set("r", 5)
                .set("fill", "black")
                .set("stroke", "black"),
        )
}

fn axis_line(
    seg: &Segment,
    color: &str,
    width: u32,
    px: &impl Fn(Vector2<f64>) -> (f32, f32),
) -> Line {
    let (x1, y1) = px(seg.a);
    let (x2, y2) = px(seg.b);
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", color)
        .set("stroke-width", width)
}

/// Rasterize `outline` with the same layers and colors as `outline_svg`.
pub fn outline_png(outline: &Outline) -> RgbImage {
    let (w, h) = outline.size;
    let mut img: RgbImage = ImageBuffer::from_pixel(w, h, WHITE);
    let px = |p: Vector2<f64>| {
        let q = outline.project(p);
        (q.x as f32, q.y as f32)
    };
    for pair in outline.ring.windows(2) {
        stroke(&mut img, px(pair[0]), px(pair[1]), 2.0, BLACK);
    }
    for p in &outline.ring[..outline.ring.len().saturating_sub(1)] {
        disc(&mut img, px(*p), 3.0, BLACK);
    }
    stroke(&mut img, px(outline.major.a), px(outline.major.b), 2.0, MAJOR_RGB);
    stroke(&mut img, px(outline.minor.a), px(outline.minor.b), 1.0, MINOR_RGB);
    disc(&mut img, px(outline.props.centroid), 5.0, BLACK);
    img
}

/// Fill every pixel whose center lies within `r` of `c`, plus the pixel containing `c`.
fn disc(img: &mut RgbImage, c: (f32, f32), r: f32, color: Rgb<u8>) {
    let (w, h) = img.dimensions();
    if !(c.0.is_finite() && c.1.is_finite()) {
        return;
    }
    let x0 = (c.0 - r).floor().max(0.0) as u32;
    let y0 = (c.1 - r).floor().max(0.0) as u32;
    let x1 = ((c.0 + r).ceil().max(0.0) as u32).min(w.saturating_sub(1));
    let y1 = ((c.1 + r).ceil().max(0.0) as u32).min(h.saturating_sub(1));
    let (hx, hy) = (c.0.floor(), c.1.floor());
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - c.0;
            let dy = y as f32 + 0.5 - c.1;
            if dx * dx + dy * dy <= r * r || (x as f32 == hx && y as f32 == hy) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Line of the given pixel `width`, stamped as discs every half pixel.
fn stroke(img: &mut RgbImage, a: (f32, f32), b: (f32, f32), width: f32, color: Rgb<u8>) {
    let len = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
    if !len.is_finite() {
        return;
    }
    let steps = (len * 2.0).ceil().max(1.0) as u32;
    for k in 0..=steps {
        let t = k as f32 / steps as f32;
        let p = (a.0 + t * (b.0 - a.0), a.1 + t * (b.1 - a.1));
        disc(img, p, width / 2.0, color);
    }
}

/// Render `outline` as `kind` and save it to `path`, creating parent directories.
pub fn write_outline(path: &Path, outline: &Outline, kind: ImageKind) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    match kind {
        ImageKind::Svg => svg::save(path, &outline_svg(outline))
            .with_context(|| format!("writing {}", path.display())),
        ImageKind::Png => outline_png(outline)
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("writing {}", path.display())),
    }
}
