use std::cmp::Ordering;

/// Compares two strings in natural order, treating runs of ASCII digits as numbers.
///
/// `"r2"` sorts before `"r10"`, and `"a"` before `"b"`. Digit runs are compared by
/// numeric value without parsing, so arbitrarily long runs are handled; leading
/// zeros only break ties (`"r02"` sorts after `"r2"`).
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut lhs = a;
    let mut rhs = b;

    loop {
        match (lhs.is_empty(), rhs.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        let (l_chunk, l_rest, l_digits) = split_chunk(lhs);
        let (r_chunk, r_rest, r_digits) = split_chunk(rhs);

        let ordering = match (l_digits, r_digits) {
            (true, true) => cmp_digit_runs(l_chunk, r_chunk),
            _ => l_chunk.cmp(r_chunk),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }

        lhs = l_rest;
        rhs = r_rest;
    }
}

fn split_chunk(s: &str) -> (&str, &str, bool) {
    let digits = s.starts_with(|c: char| c.is_ascii_digit());
    let end = s
        .find(|c: char| c.is_ascii_digit() != digits)
        .unwrap_or(s.len());
    (&s[..end], &s[end..], digits)
}

fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');
    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
        .then_with(|| a.len().cmp(&b.len()))
}

/// Whether a column name follows the `r<digits>` R-group convention (`r1`, `r12`).
pub fn is_r_group(name: &str) -> bool {
    name.strip_prefix('r')
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}
