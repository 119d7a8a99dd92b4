//! Text forms for axis labels and shapes.
//!
//! Paths assembled from an R-group sweep are named by the tuple of labels that
//! selected them, e.g. `('H', 'B')`. These helpers produce that tuple notation
//! consistently for names, headers and shape summaries.

/// Quotes a label with single quotes, or double quotes if it contains a single quote.
pub fn quote(label: &str) -> String {
    if label.contains('\'') && !label.contains('"') {
        format!("\"{}\"", label)
    } else {
        format!("'{}'", label.replace('\'', "\\'"))
    }
}

/// Joins already-formatted items into tuple notation.
///
/// A single item keeps its trailing comma (`('H',)`), an empty tuple is `()`.
pub fn tuple<I>(items: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let items: Vec<String> = items.into_iter().collect();
    match items.len() {
        1 => format!("({},)", items[0]),
        _ => format!("({})", items.join(", ")),
    }
}

/// Tuple of quoted labels, e.g. `('H', 'B')`.
pub fn label_tuple<S: AsRef<str>>(labels: &[S]) -> String {
    tuple(labels.iter().map(|label| quote(label.as_ref())))
}

/// Tuple of axis sizes, e.g. `(2, 3)`.
pub fn shape_tuple(shape: &[usize]) -> String {
    tuple(shape.iter().map(|size| size.to_string()))
}
