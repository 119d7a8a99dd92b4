//! Typesetting of chemical formulae.
//!
//! Formulae such as `2H2O -> H3O+ + OH-` are rewritten with subscripted counts,
//! superscripted charges and a centre dot after stoichiometric coefficients,
//! either as LaTeX math fragments or as plain Unicode text.

use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static SUBSCRIPTS: Map<char, char> = phf_map! {
    '0' => '₀', '1' => '₁', '2' => '₂', '3' => '₃', '4' => '₄',
    '5' => '₅', '6' => '₆', '7' => '₇', '8' => '₈', '9' => '₉',
};

static SUPERSCRIPTS: Map<char, char> = phf_map! {
    '0' => '⁰', '1' => '¹', '2' => '²', '3' => '³', '4' => '⁴',
    '5' => '⁵', '6' => '⁶', '7' => '⁷', '8' => '⁸', '9' => '⁹',
};

// Unicode has no superscript dot; radicals use the middle dot.
static CHARGES_AND_RADICALS: Map<char, char> = phf_map! {
    '+' => '⁺',
    '-' => '⁻',
    '.' => '·',
};

const OPERATORS: [&str; 6] = ["+", "=", ";", "->", "<-", "<>"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("'{0}' is not a supported notation (expected 'latex' or 'unicode')")]
    UnsupportedNotation(String),
    #[error("Malformed charge in '{formula}': expected one of '+', '-', '.' after '^'")]
    MalformedCharge { formula: String },
}

/// Target notation of a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    #[default]
    Latex,
    Unicode,
}

impl FromStr for Notation {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latex" => Ok(Notation::Latex),
            "unicode" => Ok(Notation::Unicode),
            other => Err(TranslateError::UnsupportedNotation(other.to_string())),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Latex => f.write_str("latex"),
            Notation::Unicode => f.write_str("unicode"),
        }
    }
}

/// Translates a whole formula or reaction into `notation`.
pub fn translate(formula: &str, notation: Notation) -> Result<String, TranslateError> {
    match notation {
        Notation::Latex => Latex::convert(formula),
        Notation::Unicode => Unicode::convert(formula),
    }
}

/// The leading run of ASCII digits of `s`.
pub fn leading_number(s: &str) -> &str {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    &s[..end]
}

/// A target notation for formula typesetting.
///
/// Implementors supply the three primitive renderings; splitting a reaction into
/// species and walking each species is shared.
pub trait Convertor {
    fn subscript(number: &str) -> String;

    /// Superscript of an optional `number` followed by a charge or radical
    /// marker (`+`, `-` or `.`).
    fn superscript(number: &str, charge: char) -> String;

    fn cdot() -> &'static str;

    fn finalize(formula: String) -> String {
        formula
    }

    /// Converts a reaction string: whitespace or `;` separated chunks, with
    /// operators and single characters passed through unchanged.
    fn convert(formula: &str) -> Result<String, TranslateError> {
        let mut out = Vec::new();
        for chunk in formula.split_whitespace().flat_map(|c| c.split(';')) {
            if chunk.is_empty() {
                continue;
            }
            if OPERATORS.contains(&chunk) || chunk.chars().count() == 1 {
                out.push(chunk.to_string());
            } else {
                out.push(Self::molecule(chunk)?);
            }
        }
        Ok(out.join(" "))
    }

    /// Converts a single species, e.g. `2(NH4)(PO4)^2-`.
    fn molecule(species: &str) -> Result<String, TranslateError> {
        let mut out = String::new();
        let mut rest = species;

        let count = leading_number(rest);
        if !count.is_empty() {
            out.push_str(count);
            out.push_str(Self::cdot());
            rest = &rest[count.len()..];
        }

        while let Some(c) = rest.chars().next() {
            if c.is_ascii_digit() {
                let number = leading_number(rest);
                out.push_str(&Self::subscript(number));
                rest = &rest[number.len()..];
            } else if c == '^' {
                let number = leading_number(&rest[1..]);
                let charge = rest[1 + number.len()..]
                    .chars()
                    .next()
                    .filter(|c| CHARGES_AND_RADICALS.contains_key(c))
                    .ok_or_else(|| TranslateError::MalformedCharge {
                        formula: species.to_string(),
                    })?;
                out.push_str(&Self::superscript(number, charge));
                rest = &rest[2 + number.len()..];
            } else if CHARGES_AND_RADICALS.contains_key(&c) {
                out.push_str(&Self::superscript("", c));
                rest = &rest[1..];
            } else {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }

        Ok(Self::finalize(out))
    }
}

/// LaTeX math fragments, e.g. `H$_2$O`.
pub struct Latex;

impl Convertor for Latex {
    fn subscript(number: &str) -> String {
        format!("$_{}$", number)
    }

    fn superscript(number: &str, charge: char) -> String {
        let charge = match charge {
            '.' => "\\cdot".to_string(),
            other => other.to_string(),
        };
        if number.is_empty() {
            format!("$^{}$", charge)
        } else {
            format!("$^{{{}{}}}$", number, charge)
        }
    }

    fn cdot() -> &'static str {
        "$\\cdot$"
    }

    /// Merges adjacent math fragments.
    fn finalize(formula: String) -> String {
        formula.replace("$$", "")
    }
}

/// Unicode sub- and superscript characters, e.g. `H₂O`.
pub struct Unicode;

impl Convertor for Unicode {
    fn subscript(number: &str) -> String {
        map_chars(number, &SUBSCRIPTS)
    }

    fn superscript(number: &str, charge: char) -> String {
        let mut out = map_chars(number, &SUPERSCRIPTS);
        out.push(CHARGES_AND_RADICALS.get(&charge).copied().unwrap_or(charge));
        out
    }

    fn cdot() -> &'static str {
        "·"
    }
}

fn map_chars(s: &str, table: &Map<char, char>) -> String {
    s.chars().map(|c| table.get(&c).copied().unwrap_or(c)).collect()
}
