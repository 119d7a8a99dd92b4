use super::error::RenderError;
use crate::core::models::path::Path;
use crate::core::models::web::Web;
use crate::core::translate::{Notation, translate};
use nalgebra::DVector;
use std::io::Write;

/// Horizontal gap left at each end of an energy level.
pub const DEFAULT_SPREAD: f64 = 0.1;

/// The polyline of one path in an energy diagram.
///
/// Every point of the path (the implicit zero plus one point per reaction)
/// becomes a horizontal level: two consecutive entries of `xs` with the same
/// entry repeated in `ys`. Consecutive levels are joined by the sloped segment
/// between them.
#[derive(Debug, Clone, PartialEq)]
pub struct PathLine {
    pub label: String,
    pub xs: DVector<f64>,
    pub ys: DVector<f64>,
}

impl PathLine {
    /// Lays out `path` with levels `1 - 2 * spread` wide.
    ///
    /// A path's step offsets shift every later level along x; a negative step
    /// draws its level right to left, so the connecting segment runs backward.
    /// The label is the path name, typeset in `notation` when one is given.
    pub fn new(path: &Path, spread: f64, notation: Option<Notation>) -> Result<Self, RenderError> {
        let points = path.len() + 1;
        let steps = path.steps();
        let mut xs = DVector::zeros(2 * points);
        let mut offset = 0.0;
        for k in 0..points {
            if k > 0 {
                offset += steps[k - 1];
            }
            let center = k as f64;
            xs[2 * k] = center - 0.5 + spread + offset;
            xs[2 * k + 1] = center + 0.5 - spread + offset;
        }
        for (j, _) in steps.iter().enumerate().filter(|(_, s)| **s < 0.0) {
            xs.swap_rows(2 * j + 2, 2 * j + 3);
        }

        let relative = path.relative_energies();
        let ys = DVector::from_fn(2 * points, |i, _| relative[i / 2]);

        let label = match notation {
            Some(notation) => translate(path.name(), notation)?,
            None => path.name().to_string(),
        };

        Ok(Self { label, xs, ys })
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// One polyline per path of `web`, in order.
pub fn web_lines(
    web: &Web,
    spread: f64,
    notation: Option<Notation>,
) -> Result<Vec<PathLine>, RenderError> {
    web.iter()
        .map(|path| PathLine::new(path, spread, notation))
        .collect()
}

/// Writes polylines as CSV with columns `path,x,y`, one row per point.
pub fn write_csv<W: Write>(lines: &[PathLine], writer: W) -> Result<(), RenderError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["path", "x", "y"])?;
    for line in lines {
        for (x, y) in line.points() {
            writer.write_record([line.label.clone(), x.to_string(), y.to_string()])?;
        }
    }
    writer.flush()?;
    Ok(())
}
