use super::error::{LookupError, ModelError};
use super::path::Path;
use super::web::Web;
use crate::core::utils::labels;
use std::collections::HashSet;
use std::fmt;

/// A named categorical dimension of an enumeration, e.g. one R-group position
/// and the substituents tried there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    name: String,
    labels: Vec<String>,
}

impl Axis {
    pub fn new<S: Into<String>>(name: impl Into<String>, labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Position of the first occurrence of `label` along this axis.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

/// Selects one position along the leading axis, by integer or by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'s> {
    Position(usize),
    Label(&'s str),
}

impl From<usize> for Selector<'_> {
    fn from(position: usize) -> Self {
        Selector::Position(position)
    }
}

impl<'s> From<&'s str> for Selector<'s> {
    fn from(label: &'s str) -> Self {
        Selector::Label(label)
    }
}

impl<'s> From<&'s String> for Selector<'s> {
    fn from(label: &'s String) -> Self {
        Selector::Label(label)
    }
}

/// An N-dimensional, axis-labelled grid of paths from a combinatorial sweep.
///
/// Paths are stored flat in row-major order: the last axis varies fastest.
/// Indexing peels one axis at a time. While more than one axis remains the
/// result is a sub-enumeration (an [`EnumerationView`] borrowing this storage),
/// and once a single axis is left the result is the [`Path`] itself.
#[derive(Clone, PartialEq)]
pub struct Enumeration {
    paths: Vec<Path>,
    axes: Vec<Axis>,
}

impl Enumeration {
    /// Creates an enumeration from row-major `paths` and the axes describing them.
    ///
    /// # Errors
    ///
    /// - [`ModelError::NoAxes`] if `axes` is empty.
    /// - [`ModelError::DuplicateAxis`] if two axes share a name.
    /// - [`ModelError::CellCountMismatch`] if `paths.len()` is not the product of
    ///   the axis lengths.
    pub fn new(paths: Vec<Path>, axes: Vec<Axis>) -> Result<Self, ModelError> {
        if axes.is_empty() {
            return Err(ModelError::NoAxes);
        }
        let mut seen = HashSet::new();
        for axis in &axes {
            if !seen.insert(axis.name()) {
                return Err(ModelError::DuplicateAxis(axis.name().to_string()));
            }
        }
        let expected: usize = axes.iter().map(Axis::len).product();
        if expected != paths.len() {
            return Err(ModelError::CellCountMismatch {
                expected,
                found: paths.len(),
            });
        }
        Ok(Self { paths, axes })
    }

    /// Like [`Enumeration::new`], additionally checking an explicit `shape`
    /// against the axis lengths dimension by dimension.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ShapeMismatch`] on disagreement, otherwise the
    /// errors of [`Enumeration::new`].
    pub fn with_shape(
        shape: &[usize],
        paths: Vec<Path>,
        axes: Vec<Axis>,
    ) -> Result<Self, ModelError> {
        let label_shape: Vec<usize> = axes.iter().map(Axis::len).collect();
        if shape != label_shape.as_slice() {
            return Err(ModelError::ShapeMismatch {
                shape: shape.to_vec(),
                labels: label_shape,
            });
        }
        Self::new(paths, axes)
    }

    /// Borrowed view over the whole enumeration.
    pub fn view(&self) -> EnumerationView<'_> {
        EnumerationView {
            paths: &self.paths,
            axes: &self.axes,
        }
    }

    pub fn shape(&self) -> Vec<usize> {
        self.view().shape()
    }

    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    /// Length of the leading axis.
    pub fn len(&self) -> usize {
        self.view().len()
    }

    pub fn is_empty(&self) -> bool {
        self.view().is_empty()
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// All paths in row-major order.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Selects along the leading axis. See [`EnumerationView::get`].
    pub fn get<'s>(&self, selector: impl Into<Selector<'s>>) -> Result<Entry<'_>, LookupError> {
        self.view().get(selector)
    }

    pub fn iter(&self) -> Entries<'_> {
        self.view().iter()
    }

    /// Flattens every path, in row-major order, into a single web.
    pub fn to_web(&self, name: impl Into<String>) -> Web {
        self.view().to_web(name)
    }
}

impl<'a> IntoIterator for &'a Enumeration {
    type Item = Entry<'a>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}

impl fmt::Debug for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.view(), f)
    }
}

/// A borrowed sub-enumeration: a contiguous block of the row-major storage and
/// the axes that remain after peeling the leading ones.
///
/// Views are `Copy`; peeling an axis is a slice operation and never copies paths
/// or labels.
#[derive(Clone, Copy)]
pub struct EnumerationView<'a> {
    paths: &'a [Path],
    axes: &'a [Axis],
}

impl<'a> EnumerationView<'a> {
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(Axis::len).collect()
    }

    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    /// Length of the leading axis.
    pub fn len(&self) -> usize {
        self.axes[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn axes(&self) -> &'a [Axis] {
        self.axes
    }

    /// Axis names paired with their labels, in axis order.
    pub fn path_names(&self) -> impl Iterator<Item = (&'a str, &'a [String])> + 'a {
        self.axes.iter().map(|axis| (axis.name(), axis.labels()))
    }

    /// All paths of this view in row-major order.
    pub fn paths(&self) -> &'a [Path] {
        self.paths
    }

    /// Selects a position along the leading axis, by integer or by label.
    ///
    /// With more than one axis the result is the sub-enumeration over the
    /// remaining axes; with a single axis it is the path at that position.
    ///
    /// # Errors
    ///
    /// - [`LookupError::IndexOutOfRange`] for a position past the axis length.
    /// - [`LookupError::UnknownLabel`] for a label the leading axis does not hold.
    pub fn get<'s>(&self, selector: impl Into<Selector<'s>>) -> Result<Entry<'a>, LookupError> {
        let axis = &self.axes[0];
        let position = match selector.into() {
            Selector::Position(position) => {
                if position >= axis.len() {
                    return Err(LookupError::IndexOutOfRange {
                        index: position,
                        len: axis.len(),
                    });
                }
                position
            }
            Selector::Label(label) => {
                axis.position(label)
                    .ok_or_else(|| LookupError::UnknownLabel {
                        axis: axis.name().to_string(),
                        label: label.to_string(),
                    })?
            }
        };
        Ok(self.entry(position))
    }

    fn entry(&self, position: usize) -> Entry<'a> {
        let tail = &self.axes[1..];
        if tail.is_empty() {
            return Entry::Path(&self.paths[position]);
        }
        let stride: usize = tail.iter().map(Axis::len).product();
        Entry::Enumeration(EnumerationView {
            paths: &self.paths[position * stride..(position + 1) * stride],
            axes: tail,
        })
    }

    /// Iterates the leading axis: paths for a single-axis view, sub-enumerations
    /// otherwise. Each call starts from the beginning.
    pub fn iter(&self) -> Entries<'a> {
        Entries {
            view: *self,
            front: 0,
            back: self.len(),
        }
    }

    /// Copies this view into an owned enumeration.
    pub fn to_enumeration(&self) -> Enumeration {
        Enumeration {
            paths: self.paths.to_vec(),
            axes: self.axes.to_vec(),
        }
    }

    /// Flattens every path, in row-major order, into a single web.
    pub fn to_web(&self, name: impl Into<String>) -> Web {
        Web::new(self.paths.to_vec(), name)
    }

    fn header(&self) -> String {
        let entries: Vec<String> = self
            .axes
            .iter()
            .map(|axis| format!("{}: {}", labels::quote(axis.name()), labels::label_tuple(axis.labels())))
            .collect();
        format!("Enumeration {{{}}}", entries.join(", "))
    }

    fn render(&self) -> String {
        let mut out = format!("{}\n", self.header());
        if self.ndim() == 1 {
            let lines: Vec<String> = self.paths.iter().map(|path| format!("{:?}", path)).collect();
            out.push_str(&lines.join("\n"));
            return out;
        }

        let axis = &self.axes[0];
        for (entry, label) in self.iter().zip(axis.labels()) {
            if let Entry::Enumeration(sub) = entry {
                let indented = sub
                    .render()
                    .replace('\n', "\n    ")
                    .replace("\n    \n", "\n\n");
                out.push_str(&format!("\n{}: {}\n{}\n", axis.name(), label, indented));
            }
        }
        out.trim().to_string()
    }
}

impl fmt::Display for EnumerationView<'_> {
    /// Recursive listing: the axis header, then for one axis each path, and for
    /// more axes one indented block per label of the leading axis.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for EnumerationView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.axes.iter().map(|a| labels::quote(a.name())).collect();
        write!(
            f,
            "<Enumeration {} {}>",
            labels::tuple(names),
            labels::shape_tuple(&self.shape())
        )
    }
}

impl PartialEq for EnumerationView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.axes == other.axes && self.paths == other.paths
    }
}

impl<'a> IntoIterator for EnumerationView<'a> {
    type Item = Entry<'a>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Result of indexing or iterating an enumeration: a path once the last axis
/// is consumed, a sub-enumeration otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry<'a> {
    Path(&'a Path),
    Enumeration(EnumerationView<'a>),
}

impl<'a> Entry<'a> {
    pub fn as_path(&self) -> Option<&'a Path> {
        match self {
            Entry::Path(path) => Some(path),
            Entry::Enumeration(_) => None,
        }
    }

    pub fn as_enumeration(&self) -> Option<EnumerationView<'a>> {
        match self {
            Entry::Path(_) => None,
            Entry::Enumeration(view) => Some(*view),
        }
    }

    pub fn is_path(&self) -> bool {
        matches!(self, Entry::Path(_))
    }

    /// Indexes further into a sub-enumeration, allowing chained selection such
    /// as `enm.get("H")?.get("B")?`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NoAxesLeft`] when this entry is already a path,
    /// otherwise the errors of [`EnumerationView::get`].
    pub fn get<'s>(&self, selector: impl Into<Selector<'s>>) -> Result<Entry<'a>, LookupError> {
        match self {
            Entry::Path(_) => Err(LookupError::NoAxesLeft),
            Entry::Enumeration(view) => view.get(selector),
        }
    }

    /// Every path beneath this entry, in row-major order.
    pub fn paths(&self) -> &'a [Path] {
        match self {
            Entry::Path(path) => std::slice::from_ref(*path),
            Entry::Enumeration(view) => view.paths(),
        }
    }
}

/// Iterator over the leading axis of an enumeration.
#[derive(Clone)]
pub struct Entries<'a> {
    view: EnumerationView<'a>,
    front: usize,
    back: usize,
}

impl<'a> Iterator for Entries<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let entry = self.view.entry(self.front);
        self.front += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.view.entry(self.back))
    }
}

impl ExactSizeIterator for Entries<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{molecule::Molecule, reaction::Reaction};

    fn labelled_path(tags: &[&str]) -> Path {
        let molecules: Vec<Molecule> = "ABCD"
            .chars()
            .enumerate()
            .map(|(i, c)| Molecule::new(c.to_string(), i as f64))
            .collect();
        let reactions: Vec<Reaction> = molecules
            .windows(2)
            .map(|pair| Reaction::new([pair[0].clone()], [pair[1].clone()]).unwrap())
            .collect();
        Path::new(reactions, labels::label_tuple(tags))
    }

    fn grid(axes: Vec<Axis>) -> Enumeration {
        let mut combos: Vec<Vec<&str>> = vec![Vec::new()];
        for axis in &axes {
            combos = combos
                .into_iter()
                .flat_map(|prefix| {
                    axis.labels().iter().map(move |label| {
                        let mut next = prefix.clone();
                        next.push(label.as_str());
                        next
                    })
                })
                .collect();
        }
        let paths = combos.iter().map(|c| labelled_path(c)).collect();
        Enumeration::new(paths, axes.clone()).unwrap()
    }

    fn enm_2_3() -> Enumeration {
        grid(vec![Axis::new("r1", ["C", "H"]), Axis::new("r2", ["B", "H", "I"])])
    }

    fn enm_2_2_2() -> Enumeration {
        grid(vec![
            Axis::new("r1", ["B", "H"]),
            Axis::new("r2", ["C", "H"]),
            Axis::new("r3", ["H", "I"]),
        ])
    }

    #[test]
    fn shape_matches_axis_lengths() {
        let enm = enm_2_3();
        assert_eq!(enm.shape(), vec![2, 3]);
        assert_eq!(enm.ndim(), 2);
        assert_eq!(enm.len(), 2);
        let label_lengths: Vec<usize> = enm.view().path_names().map(|(_, l)| l.len()).collect();
        assert_eq!(enm.shape(), label_lengths);
    }

    #[test]
    fn debug_shows_axis_names_and_shape() {
        assert_eq!(format!("{:?}", enm_2_3()), "<Enumeration ('r1', 'r2') (2, 3)>");
        let sub = enm_2_3().get("C").unwrap().as_enumeration().unwrap().to_enumeration();
        assert_eq!(format!("{:?}", sub), "<Enumeration ('r2',) (3,)>");
    }

    #[test]
    fn display_renders_two_dimensions() {
        let expected = "\
Enumeration {'r1': ('C', 'H'), 'r2': ('B', 'H', 'I')}

r1: C
Enumeration {'r2': ('B', 'H', 'I')}
    <Path ('C', 'B')>
    <Path ('C', 'H')>
    <Path ('C', 'I')>

r1: H
Enumeration {'r2': ('B', 'H', 'I')}
    <Path ('H', 'B')>
    <Path ('H', 'H')>
    <Path ('H', 'I')>";
        assert_eq!(enm_2_3().to_string(), expected);
    }

    #[test]
    fn display_renders_three_dimensions_with_nested_indentation() {
        let expected = "\
Enumeration {'r1': ('B', 'H'), 'r2': ('C', 'H'), 'r3': ('H', 'I')}

r1: B
Enumeration {'r2': ('C', 'H'), 'r3': ('H', 'I')}

    r2: C
    Enumeration {'r3': ('H', 'I')}
        <Path ('B', 'C', 'H')>
        <Path ('B', 'C', 'I')>

    r2: H
    Enumeration {'r3': ('H', 'I')}
        <Path ('B', 'H', 'H')>
        <Path ('B', 'H', 'I')>

r1: H
Enumeration {'r2': ('C', 'H'), 'r3': ('H', 'I')}

    r2: C
    Enumeration {'r3': ('H', 'I')}
        <Path ('H', 'C', 'H')>
        <Path ('H', 'C', 'I')>

    r2: H
    Enumeration {'r3': ('H', 'I')}
        <Path ('H', 'H', 'H')>
        <Path ('H', 'H', 'I')>";
        assert_eq!(enm_2_2_2().to_string(), expected);
    }

    #[test]
    fn get_by_label_drills_down_to_paths() {
        let enm = enm_2_3();
        assert!(!enm.get("H").unwrap().is_path());
        assert!(!enm.get("C").unwrap().is_path());
        for a in ["H", "C"] {
            for b in ["H", "B", "I"] {
                let path = enm.get(a).unwrap().get(b).unwrap().as_path().unwrap();
                assert_eq!(path.len(), 3);
                assert_eq!(path.name(), format!("('{}', '{}')", a, b));
            }
        }
    }

    #[test]
    fn get_by_label_equals_get_by_position() {
        let enm = enm_2_2_2();
        for (i, label) in ["B", "H"].iter().enumerate() {
            assert_eq!(enm.get(*label).unwrap(), enm.get(i).unwrap());
        }
        let by_label = enm.get("H").unwrap().get("C").unwrap().get("I").unwrap();
        let by_index = enm.get(1).unwrap().get(0).unwrap().get(1).unwrap();
        assert_eq!(by_label, by_index);
        assert_eq!(by_label.as_path().unwrap().name(), "('H', 'C', 'I')");
    }

    #[test]
    fn unknown_label_and_out_of_range_are_distinct_errors() {
        let enm = enm_2_3();
        assert_eq!(
            enm.get("B"),
            Err(LookupError::UnknownLabel {
                axis: "r1".to_string(),
                label: "B".to_string()
            })
        );
        assert_eq!(
            enm.get(2),
            Err(LookupError::IndexOutOfRange { index: 2, len: 2 })
        );
        let path = enm.get(0).unwrap().get(0).unwrap();
        assert_eq!(path.get(0), Err(LookupError::NoAxesLeft));
    }

    #[test]
    fn iteration_yields_sub_enumerations_then_paths() {
        let enm = enm_2_3();
        for sub in &enm {
            let view = sub.as_enumeration().unwrap();
            assert_eq!(view.ndim(), 1);
            for entry in view {
                let path = entry.as_path().unwrap();
                for (reaction, names) in path.iter().zip([("A", "B"), ("B", "C"), ("C", "D")]) {
                    let (reactants, products) = reaction.parts();
                    assert_eq!(reactants[0].name(), names.0);
                    assert_eq!(products[0].name(), names.1);
                }
            }
        }
        assert_eq!(enm.iter().len(), 2);
    }

    #[test]
    fn iteration_is_restartable_and_reversible() {
        let enm = enm_2_2_2();
        let forward: Vec<Entry> = enm.iter().collect();
        let again: Vec<Entry> = enm.iter().collect();
        assert_eq!(forward, again);
        let mut backward: Vec<Entry> = enm.iter().rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn one_dimensional_enumeration_yields_paths() {
        let enm = grid(vec![Axis::new("r1", ["F", "Cl", "Br"])]);
        let names: Vec<&str> = enm.iter().map(|e| e.as_path().unwrap().name()).collect();
        assert_eq!(names, ["('F',)", "('Cl',)", "('Br',)"]);
        assert_eq!(
            enm.to_string(),
            "Enumeration {'r1': ('F', 'Cl', 'Br')}\n<Path ('F',)>\n<Path ('Cl',)>\n<Path ('Br',)>"
        );
    }

    #[test]
    fn sub_enumeration_paths_are_contiguous_blocks() {
        let enm = enm_2_2_2();
        let h = enm.get("H").unwrap();
        let names: Vec<&str> = h.paths().iter().map(Path::name).collect();
        assert_eq!(
            names,
            [
                "('H', 'C', 'H')",
                "('H', 'C', 'I')",
                "('H', 'H', 'H')",
                "('H', 'H', 'I')"
            ]
        );
        assert_eq!(enm.paths().len(), 8);
    }

    #[test]
    fn five_dimensional_grid_collapses_to_every_path() {
        let enm = grid(vec![
            Axis::new("r1", ["A", "B"]),
            Axis::new("r2", ["C", "D", "E"]),
            Axis::new("r3", ["F", "G"]),
            Axis::new("r4", ["H", "I", "J"]),
            Axis::new("r5", ["K", "L", "M", "N"]),
        ]);
        assert_eq!(enm.shape(), vec![2, 3, 2, 3, 4]);

        let mut count = 0;
        for e1 in &enm {
            for e2 in e1.as_enumeration().unwrap() {
                for e3 in e2.as_enumeration().unwrap() {
                    for e4 in e3.as_enumeration().unwrap() {
                        for e5 in e4.as_enumeration().unwrap() {
                            assert_eq!(e5.as_path().unwrap().len(), 3);
                            count += 1;
                        }
                    }
                }
            }
        }
        assert_eq!(count, 144);

        let path = enm
            .get("B").unwrap()
            .get("E").unwrap()
            .get("G").unwrap()
            .get("J").unwrap()
            .get("N").unwrap();
        assert_eq!(path.as_path().unwrap().name(), "('B', 'E', 'G', 'J', 'N')");
        assert_eq!(path, Entry::Path(&enm.paths()[143]));
    }

    #[test]
    fn construction_rejects_inconsistent_shapes() {
        let axes = vec![Axis::new("r1", ["C", "H"]), Axis::new("r2", ["B", "H", "I"])];
        let paths: Vec<Path> = (0..5).map(|i| labelled_path(&[&i.to_string()])).collect();
        assert_eq!(
            Enumeration::new(paths.clone(), axes.clone()),
            Err(ModelError::CellCountMismatch {
                expected: 6,
                found: 5
            })
        );
        assert_eq!(
            Enumeration::with_shape(&[3, 2], paths, axes),
            Err(ModelError::ShapeMismatch {
                shape: vec![3, 2],
                labels: vec![2, 3]
            })
        );
        assert_eq!(Enumeration::new(Vec::new(), Vec::new()), Err(ModelError::NoAxes));
        assert_eq!(
            Enumeration::new(
                Vec::new(),
                vec![Axis::new("r1", Vec::<String>::new()), Axis::new("r1", ["A"])]
            ),
            Err(ModelError::DuplicateAxis("r1".to_string()))
        );
    }

    #[test]
    fn empty_axis_produces_empty_iteration() {
        let enm = Enumeration::new(
            Vec::new(),
            vec![Axis::new("r1", ["A", "B"]), Axis::new("r2", Vec::<String>::new())],
        )
        .unwrap();
        assert_eq!(enm.shape(), vec![2, 0]);
        let subs: Vec<Entry> = enm.iter().collect();
        assert_eq!(subs.len(), 2);
        assert!(subs.iter().all(|s| s.as_enumeration().unwrap().is_empty()));
    }

    #[test]
    fn to_web_flattens_in_row_major_order() {
        let web = enm_2_3().to_web("sweep");
        assert_eq!(web.len(), 6);
        assert_eq!(web.name(), "sweep");
        assert_eq!(web[0].name(), "('C', 'B')");
        assert_eq!(web[5].name(), "('H', 'I')");
    }
}
