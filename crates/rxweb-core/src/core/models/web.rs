use super::error::LookupError;
use super::path::Path;
use std::fmt;
use std::ops::Index;

/// A collection of alternative reaction paths, kept in insertion order.
#[derive(Clone, PartialEq)]
pub struct Web {
    paths: Vec<Path>,
    name: String,
}

impl Web {
    pub fn new(paths: impl Into<Vec<Path>>, name: impl Into<String>) -> Self {
        Self {
            paths: paths.into(),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Count of paths in the web.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    /// Returns the path at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Path, LookupError> {
        self.paths.get(index).ok_or(LookupError::IndexOutOfRange {
            index,
            len: self.paths.len(),
        })
    }

    /// Lowest point over all paths as `((path_index, step_index), value)`.
    ///
    /// Compares each path's own [`Path::min`]; the first path reaching the
    /// lowest value wins. Returns `None` for an empty web.
    pub fn min(&self) -> Option<((usize, usize), f64)> {
        self.extremum(Path::min, |candidate, best| candidate < best)
    }

    /// Highest point over all paths as `((path_index, step_index), value)`.
    ///
    /// Compares each path's own [`Path::max`]; the first path reaching the
    /// highest value wins. Returns `None` for an empty web.
    pub fn max(&self) -> Option<((usize, usize), f64)> {
        self.extremum(Path::max, |candidate, best| candidate > best)
    }

    fn extremum(
        &self,
        per_path: impl Fn(&Path) -> (usize, f64),
        better: impl Fn(f64, f64) -> bool,
    ) -> Option<((usize, usize), f64)> {
        let mut best: Option<((usize, usize), f64)> = None;
        for (i, path) in self.paths.iter().enumerate() {
            let (j, value) = per_path(path);
            match best {
                Some((_, best_value)) if !better(value, best_value) => {}
                _ => best = Some(((i, j), value)),
            }
        }
        best
    }
}

impl Index<usize> for Web {
    type Output = Path;

    fn index(&self, index: usize) -> &Self::Output {
        &self.paths[index]
    }
}

impl<'a> IntoIterator for &'a Web {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Web {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "# {}", self.name)?;
        for (i, path) in self.paths.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "\n{}:\n{}", path.name(), path)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Web {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.paths.iter().map(Path::name).collect();
        write!(f, "<Web \"{}\" [{}]>", self.name, names.join(", "))
    }
}
