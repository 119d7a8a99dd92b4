use super::error::RenderError;
use crate::core::models::enumeration::{Axis, Enumeration};
use crate::core::models::path::Path;
use crate::core::models::web::Web;
use nalgebra::DMatrix;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// A labelled matrix of values, one heatmap panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub title: Option<String>,
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    pub values: DMatrix<f64>,
}

impl Grid {
    /// Smallest and largest value, or `None` for an empty grid.
    pub fn range(&self) -> Option<(f64, f64)> {
        value_range(self.values.iter().copied())
    }

    /// Writes the grid as CSV: a header of column labels (led by the title, if
    /// any) and one row per row label.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), RenderError> {
        let mut writer = csv::Writer::from_writer(writer);
        let corner = self.title.clone().unwrap_or_default();
        writer.write_record(std::iter::once(corner).chain(self.column_labels.iter().cloned()))?;
        for (i, label) in self.row_labels.iter().enumerate() {
            let row = self.values.row(i);
            writer.write_record(
                std::iter::once(label.clone()).chain(row.iter().map(|v| v.to_string())),
            )?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn value_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |range, v| match range {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// The scalar a heatmap cell shows for one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMetric {
    /// Highest relative energy.
    Max,
    /// Lowest relative energy.
    Min,
    /// Energy of one reaction.
    Energy(usize),
    /// Relative energy at one point, 0 being the start of the path.
    RelativeEnergy(usize),
}

impl PathMetric {
    pub fn evaluate(&self, path: &Path) -> Result<f64, RenderError> {
        match *self {
            PathMetric::Max => Ok(path.max().1),
            PathMetric::Min => Ok(path.min().1),
            PathMetric::Energy(step) => pick(path, path.energies().as_slice(), step),
            PathMetric::RelativeEnergy(step) => {
                pick(path, path.relative_energies().as_slice(), step)
            }
        }
    }
}

fn pick(path: &Path, values: &[f64], step: usize) -> Result<f64, RenderError> {
    values
        .get(step)
        .copied()
        .ok_or_else(|| RenderError::StepOutOfRange {
            path: path.name().to_string(),
            step,
            len: values.len(),
        })
}

impl FromStr for PathMetric {
    type Err = RenderError;

    /// Parses `max`, `min`, `energy:N` or `relative:N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RenderError::InvalidMetric(s.to_string());
        match s.split_once(':') {
            None => match s {
                "max" => Ok(PathMetric::Max),
                "min" => Ok(PathMetric::Min),
                _ => Err(invalid()),
            },
            Some((kind, step)) => {
                let step: usize = step.trim().parse().map_err(|_| invalid())?;
                match kind {
                    "energy" => Ok(PathMetric::Energy(step)),
                    "relative" => Ok(PathMetric::RelativeEnergy(step)),
                    _ => Err(invalid()),
                }
            }
        }
    }
}

impl fmt::Display for PathMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathMetric::Max => f.write_str("max"),
            PathMetric::Min => f.write_str("min"),
            PathMetric::Energy(step) => write!(f, "energy:{}", step),
            PathMetric::RelativeEnergy(step) => write!(f, "relative:{}", step),
        }
    }
}

fn indices(n: usize) -> Vec<String> {
    (0..n).map(|i| i.to_string()).collect()
}

/// Reaction energies of every path in `web`, one row per path.
///
/// # Errors
///
/// Returns [`RenderError::InconsistentPathLengths`] unless every path has as
/// many reactions as the first.
pub fn web_grid(web: &Web) -> Result<Grid, RenderError> {
    let width = web.paths().first().map_or(0, Path::len);
    if let Some(path) = web.iter().find(|p| p.len() != width) {
        return Err(RenderError::InconsistentPathLengths {
            path: path.name().to_string(),
            expected: width,
            found: path.len(),
        });
    }
    let energies: Vec<_> = web.iter().map(Path::energies).collect();
    let values = DMatrix::from_fn(web.len(), width, |i, j| energies[i][j]);
    Ok(Grid {
        title: Some(web.name().to_string()),
        row_labels: web.iter().map(|p| p.name().to_string()).collect(),
        column_labels: indices(width),
        values,
    })
}

/// One metric per path: a row per web, a column per path.
///
/// # Errors
///
/// Returns [`RenderError::InconsistentWebLengths`] unless every web holds as
/// many paths as the first, or any error of [`PathMetric::evaluate`].
pub fn webs_grid(webs: &[Web], metric: PathMetric) -> Result<Grid, RenderError> {
    let width = webs.first().map_or(0, Web::len);
    if let Some(web) = webs.iter().find(|w| w.len() != width) {
        return Err(RenderError::InconsistentWebLengths {
            web: web.name().to_string(),
            expected: width,
            found: web.len(),
        });
    }
    let cells = webs
        .iter()
        .flat_map(|web| web.iter())
        .map(|path| metric.evaluate(path))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Grid {
        title: Some(metric.to_string()),
        row_labels: webs.iter().map(|w| w.name().to_string()).collect(),
        column_labels: indices(width),
        values: DMatrix::from_row_slice(webs.len(), width, &cells),
    })
}

/// Heatmap panels covering an enumeration, sharing one colour range.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumerationHeatmap {
    pub grids: Vec<Grid>,
    /// `(vmin, vmax)` over every panel; `None` when the enumeration is empty.
    pub range: Option<(f64, f64)>,
}

/// Evaluates `metric` on every path of `enm` and arranges the values in panels.
///
/// A 1-D enumeration gives a single `m x 1` panel. With more axes, the last two
/// span each `m x n` panel and every combination of the leading axes, in
/// row-major order, gets its own panel titled by its labels.
pub fn enumeration_grids(enm: &Enumeration, metric: PathMetric) -> Result<EnumerationHeatmap, RenderError> {
    let cells = enm
        .paths()
        .iter()
        .map(|path| metric.evaluate(path))
        .collect::<Result<Vec<_>, _>>()?;
    let range = value_range(cells.iter().copied());
    let axes = enm.axes();

    if let [axis] = axes {
        let grid = Grid {
            title: None,
            row_labels: axis.labels().to_vec(),
            column_labels: vec![metric.to_string()],
            values: DMatrix::from_column_slice(axis.len(), 1, &cells),
        };
        return Ok(EnumerationHeatmap {
            grids: vec![grid],
            range,
        });
    }

    let (leading, panel) = axes.split_at(axes.len() - 2);
    let (rows, columns) = (&panel[0], &panel[1]);
    let block = rows.len() * columns.len();
    let grids = panel_titles(leading)
        .into_iter()
        .enumerate()
        .map(|(n, title)| Grid {
            title,
            row_labels: rows.labels().to_vec(),
            column_labels: columns.labels().to_vec(),
            values: DMatrix::from_row_slice(
                rows.len(),
                columns.len(),
                &cells[n * block..(n + 1) * block],
            ),
        })
        .collect();
    Ok(EnumerationHeatmap { grids, range })
}

/// Titles such as `r1: H, r2: B` for every combination of `leading`, row-major.
/// No leading axes yields a single untitled panel.
fn panel_titles(leading: &[Axis]) -> Vec<Option<String>> {
    if leading.is_empty() {
        return vec![None];
    }
    let mut titles = vec![String::new()];
    for axis in leading {
        titles = titles
            .iter()
            .flat_map(|prefix| {
                axis.labels().iter().map(move |label| {
                    if prefix.is_empty() {
                        format!("{}: {}", axis.name(), label)
                    } else {
                        format!("{}, {}: {}", prefix, axis.name(), label)
                    }
                })
            })
            .collect();
    }
    titles.into_iter().map(Some).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::molecule::Molecule;
    use crate::core::models::path::tests::{path1, path2};
    use crate::core::models::reaction::Reaction;

    /// A two-reaction path whose relative energies are `[0, a, b]`.
    fn ramp(name: &str, a: f64, b: f64) -> Path {
        let start = Molecule::new("s", 0.0);
        let mid = Molecule::new("m", a);
        let end = Molecule::new("e", b);
        Path::new(
            vec![
                Reaction::new([start], [mid.clone()]).unwrap(),
                Reaction::new([mid], [end]).unwrap(),
            ],
            name,
        )
    }

    #[test]
    fn metric_parses_and_displays() {
        for text in ["max", "min", "energy:2", "relative:0"] {
            assert_eq!(text.parse::<PathMetric>().unwrap().to_string(), text);
        }
        assert_eq!("energy:3".parse::<PathMetric>().unwrap(), PathMetric::Energy(3));
        assert!(matches!(
            "median".parse::<PathMetric>(),
            Err(RenderError::InvalidMetric(_))
        ));
        assert!(matches!(
            "energy:x".parse::<PathMetric>(),
            Err(RenderError::InvalidMetric(_))
        ));
    }

    #[test]
    fn metric_evaluates_path_quantities() {
        let p = path1();
        assert_eq!(PathMetric::Max.evaluate(&p).unwrap(), 1.0);
        assert_eq!(PathMetric::Min.evaluate(&p).unwrap(), -6.5);
        assert_eq!(PathMetric::Energy(3).evaluate(&p).unwrap(), -7.5);
        assert_eq!(PathMetric::RelativeEnergy(4).evaluate(&p).unwrap(), -6.5);
    }

    #[test]
    fn metric_step_out_of_range_is_an_error() {
        let result = PathMetric::Energy(4).evaluate(&path1());
        assert!(matches!(
            result,
            Err(RenderError::StepOutOfRange { step: 4, len: 4, .. })
        ));
        assert!(PathMetric::RelativeEnergy(4).evaluate(&path1()).is_ok());
    }

    #[test]
    fn web_grid_has_one_row_per_path() {
        let web = Web::new(vec![ramp("a", 1.0, 3.0), ramp("b", -1.0, 0.0)], "w");
        let grid = web_grid(&web).unwrap();
        assert_eq!(grid.values, DMatrix::from_row_slice(2, 2, &[1.0, 2.0, -1.0, 1.0]));
        assert_eq!(grid.row_labels, ["a", "b"]);
        assert_eq!(grid.column_labels, ["0", "1"]);
        assert_eq!(grid.range(), Some((-1.0, 2.0)));
    }

    #[test]
    fn web_grid_rejects_uneven_paths() {
        let web = Web::new(vec![path1(), path2()], "w");
        assert!(matches!(
            web_grid(&web),
            Err(RenderError::InconsistentPathLengths { expected: 4, found: 3, .. })
        ));
    }

    #[test]
    fn webs_grid_evaluates_metric_per_path() {
        let webs = [
            Web::new(vec![ramp("a", 1.0, 3.0), ramp("b", -1.0, 0.0)], "first"),
            Web::new(vec![ramp("c", 2.0, -2.0), ramp("d", 0.5, 0.25)], "second"),
        ];
        let grid = webs_grid(&webs, PathMetric::Max).unwrap();
        assert_eq!(grid.values, DMatrix::from_row_slice(2, 2, &[3.0, 0.0, 2.0, 0.5]));
        assert_eq!(grid.row_labels, ["first", "second"]);

        let grid = webs_grid(&webs, PathMetric::RelativeEnergy(1)).unwrap();
        assert_eq!(grid.values, DMatrix::from_row_slice(2, 2, &[1.0, -1.0, 2.0, 0.5]));
    }

    #[test]
    fn webs_grid_rejects_uneven_webs() {
        let webs = [
            Web::new(vec![path1(), path2()], "two"),
            Web::new(vec![path1()], "one"),
        ];
        assert!(matches!(
            webs_grid(&webs, PathMetric::Min),
            Err(RenderError::InconsistentWebLengths { expected: 2, found: 1, .. })
        ));
    }

    fn enumeration(axes: Vec<Axis>) -> Enumeration {
        let total: usize = axes.iter().map(Axis::len).product();
        let paths = (0..total)
            .map(|i| ramp(&i.to_string(), i as f64, 0.0))
            .collect();
        Enumeration::new(paths, axes).unwrap()
    }

    #[test]
    fn one_dimensional_enumeration_gives_column_grid() {
        let enm = enumeration(vec![Axis::new("r1", ["F", "Cl", "Br"])]);
        let heatmap = enumeration_grids(&enm, PathMetric::Max).unwrap();
        assert_eq!(heatmap.grids.len(), 1);
        let grid = &heatmap.grids[0];
        assert_eq!(grid.values.shape(), (3, 1));
        assert_eq!(grid.values.as_slice(), &[0.0, 1.0, 2.0]);
        assert_eq!(grid.row_labels, ["F", "Cl", "Br"]);
        assert_eq!(heatmap.range, Some((0.0, 2.0)));
    }

    #[test]
    fn two_dimensional_enumeration_gives_single_panel() {
        let enm = enumeration(vec![Axis::new("r1", ["C", "H"]), Axis::new("r2", ["B", "H", "I"])]);
        let heatmap = enumeration_grids(&enm, PathMetric::Energy(0)).unwrap();
        assert_eq!(heatmap.grids.len(), 1);
        let grid = &heatmap.grids[0];
        assert_eq!(grid.title, None);
        assert_eq!(grid.values, DMatrix::from_row_slice(2, 3, &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]));
        assert_eq!(grid.row_labels, ["C", "H"]);
        assert_eq!(grid.column_labels, ["B", "H", "I"]);
    }

    #[test]
    fn higher_dimensions_give_one_panel_per_leading_combination() {
        let enm = enumeration(vec![
            Axis::new("r1", ["A", "B"]),
            Axis::new("r2", ["C", "D", "E"]),
            Axis::new("r3", ["F", "G"]),
            Axis::new("r4", ["H", "I"]),
        ]);
        let heatmap = enumeration_grids(&enm, PathMetric::Energy(0)).unwrap();
        assert_eq!(heatmap.grids.len(), 6);
        assert_eq!(heatmap.grids[0].title.as_deref(), Some("r1: A, r2: C"));
        assert_eq!(heatmap.grids[5].title.as_deref(), Some("r1: B, r2: E"));
        assert_eq!(
            heatmap.grids[5].values,
            DMatrix::from_row_slice(2, 2, &[20.0, 21.0, 22.0, 23.0])
        );
        assert_eq!(heatmap.range, Some((0.0, 23.0)));
    }

    #[test]
    fn grid_csv_has_labels_and_values() {
        let grid = Grid {
            title: Some("max".to_string()),
            row_labels: vec!["C".to_string(), "H".to_string()],
            column_labels: vec!["B".to_string(), "I".to_string()],
            values: DMatrix::from_row_slice(2, 2, &[1.0, 2.5, -3.0, 0.0]),
        };
        let mut out = Vec::new();
        grid.write_csv(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "max,B,I\nC,1,2.5\nH,-3,0\n"
        );
    }
}
