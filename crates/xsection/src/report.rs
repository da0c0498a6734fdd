//! Plain-text summary of a `SectionProperties` result.
//!
//! Numbers print in the shortest round-trip form with a mandatory decimal point
//! (`1.0`, `0.25`), switching to exponent notation below `1e-4` or from `1e16` up
//! (`1e-05`, `2.5e+16`). The angle label is `θ` followed by U+FE0E (text presentation).

use std::fmt;

use crate::geom2::SectionProperties;

/// Multi-line text report; optionally appends the centroidal moments.
#[derive(Clone, Copy, Debug)]
pub struct Report<'a> {
    props: &'a SectionProperties,
    centroidal: bool,
}

impl<'a> Report<'a> {
    pub fn new(props: &'a SectionProperties) -> Self {
        Self {
            props,
            centroidal: false,
        }
    }

    /// Also print moments about the centroid (parallel-axis shifted).
    pub fn with_centroidal(mut self, on: bool) -> Self {
        self.centroidal = on;
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.props;
        writeln!(f, "Area")?;
        writeln!(f, "  A = {}", Num(p.area))?;
        writeln!(f, "Centroid")?;
        writeln!(f, "  cx = {}", Num(p.centroid.x))?;
        writeln!(f, "  cy = {}", Num(p.centroid.y))?;
        writeln!(f, "Moments and product of inertia")?;
        writeln!(f, "  Ixx = {}", Num(p.inertia.ixx))?;
        writeln!(f, "  Iyy = {}", Num(p.inertia.iyy))?;
        writeln!(f, "  Ixy = {}", Num(p.inertia.ixy))?;
        writeln!(f, "Principal moments of inertia and direction")?;
        writeln!(f, "  I1 = {}", Num(p.principal.i1))?;
        writeln!(f, "  I2 = {}", Num(p.principal.i2))?;
        write!(f, "  {THETA} = {}°", Num(p.principal.theta.to_degrees()))?;
        if self.centroidal {
            let c = p.centroidal_inertia();
            writeln!(f)?;
            writeln!(f, "Moments and product of inertia about the centroid")?;
            writeln!(f, "  Ixx = {}", Num(c.ixx))?;
            writeln!(f, "  Iyy = {}", Num(c.iyy))?;
            write!(f, "  Ixy = {}", Num(c.ixy))?;
        }
        Ok(())
    }
}

const THETA: &str = "\u{3b8}\u{fe0e}";

/// Report number: shortest round-trip digits, always with a `.` or an exponent.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_nan() {
            return f.write_str("nan");
        }
        if x.is_infinite() {
            return f.write_str(if x > 0.0 { "inf" } else { "-inf" });
        }
        let sci = format!("{x:e}");
        let (mantissa, exp) = match sci.split_once('e') {
            Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
            None => (sci.as_str(), 0),
        };
        if (-4..16).contains(&exp) {
            let fixed = x.to_string();
            if fixed.contains('.') {
                f.write_str(&fixed)
            } else {
                write!(f, "{fixed}.0")
            }
        } else {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{mantissa}e{sign}{:02}", exp.abs())
        }
    }
}

/// Text summary in the default layout (no trailing newline).
pub fn summary(props: &SectionProperties) -> String {
    Report::new(props).to_string()
}
