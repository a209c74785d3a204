//! Splitting of one side of a reaction equation into (coefficient, species) tokens.
//!
//! Terms are separated by '+'. Inside a term everything before the first character that may
//! start a species name (uppercase latin letter, '(' or '[') is the coefficient text, so
//! "2B", "2 B" and "0.5O2" give ("2", "B"), ("2", "B") and ("0.5", "O2"), while "xA" gives
//! ("x", "A") and is rejected later when the coefficient is parsed.
//! Exponent notation in a coefficient needs a lowercase 'e': "1e2A" is 100 x A, while in
//! "1E2A" the uppercase 'E' already starts the species name, giving 1 x E2A.
//! An empty term between two '+' signs is handed on with an empty species name.
//! Charged species written with a '+' sign are not supported by this tokenizer.
use regex::Regex;
use std::sync::LazyLock;

static TERM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<coef>[^A-Z\(\[]*?)\s*(?P<name>[A-Z\(\[].*)$")
        .expect("term pattern is a valid regex")
});

/// one token of an equation side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawTerm<'a> {
    /// the whole term as written, trimmed
    pub term: &'a str,
    /// text before the species name, empty when no coefficient was written
    pub coefficient: &'a str,
    /// empty when the term contains no species name at all
    pub species: &'a str,
}

pub trait TermTokenizer {
    /// Produces the tokens of `side` lazily. Every call starts over from the beginning of `side`.
    /// Tokens borrow from `side` only, never from the tokenizer.
    fn tokenize<'s>(&self, side: &'s str) -> Box<dyn Iterator<Item = RawTerm<'s>> + 's>;
}

/// default tokenizer for equations like "2H2 + O2 = 2H2O"
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexTokenizer;

impl RegexTokenizer {
    pub fn new() -> Self {
        RegexTokenizer
    }
}

fn split_term(term: &str) -> RawTerm<'_> {
    match TERM_PATTERN.captures(term) {
        Some(cap) => RawTerm {
            term,
            coefficient: cap.name("coef").map_or("", |m| m.as_str().trim()),
            species: cap.name("name").map_or("", |m| m.as_str().trim()),
        },
        None => RawTerm {
            term,
            coefficient: term,
            species: "",
        },
    }
}

impl TermTokenizer for RegexTokenizer {
    fn tokenize<'s>(&self, side: &'s str) -> Box<dyn Iterator<Item = RawTerm<'s>> + 's> {
        // a side with nothing written on it has no terms at all
        if side.trim().is_empty() {
            return Box::new(std::iter::empty());
        }
        Box::new(side.split('+').map(str::trim).map(split_term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(side: &str) -> Vec<(String, String)> {
        RegexTokenizer::new()
            .tokenize(side)
            .map(|t| (t.coefficient.to_string(), t.species.to_string()))
            .collect()
    }

    #[test]
    fn test_coefficients_and_names() {
        assert_eq!(
            pairs("A + 2B"),
            vec![
                ("".to_string(), "A".to_string()),
                ("2".to_string(), "B".to_string())
            ]
        );
        assert_eq!(
            pairs(" 0.5O2+ 2 H2O "),
            vec![
                ("0.5".to_string(), "O2".to_string()),
                ("2".to_string(), "H2O".to_string())
            ]
        );
        assert_eq!(
            pairs("3(CH3)2O + [Fe]"),
            vec![
                ("3".to_string(), "(CH3)2O".to_string()),
                ("".to_string(), "[Fe]".to_string())
            ]
        );
    }

    #[test]
    fn test_non_numeric_prefix_is_kept_as_coefficient_text() {
        assert_eq!(pairs("xA"), vec![("x".to_string(), "A".to_string())]);
    }

    #[test]
    fn test_term_without_species() {
        let tokens: Vec<RawTerm> = RegexTokenizer::new().tokenize("A + 2").collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].coefficient, "2");
        assert_eq!(tokens[1].species, "");
        assert_eq!(tokens[1].term, "2");
    }

    #[test]
    fn test_empty_term_between_plus_signs() {
        let tokens: Vec<RawTerm> = RegexTokenizer::new().tokenize("A + + B").collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].term, "");
        assert_eq!(tokens[1].species, "");
        let trailing: Vec<RawTerm> = RegexTokenizer::new().tokenize("A +").collect();
        assert_eq!(trailing[1].species, "");
    }

    #[test]
    fn test_exponent_needs_lowercase_e() {
        assert_eq!(pairs("1e2A"), vec![("1e2".to_string(), "A".to_string())]);
        assert_eq!(pairs("1E2A"), vec![("1".to_string(), "E2A".to_string())]);
    }

    #[test]
    fn test_empty_side_and_restart() {
        let tokenizer = RegexTokenizer::new();
        assert_eq!(tokenizer.tokenize("   ").count(), 0);
        let side = "A + B + C";
        assert_eq!(tokenizer.tokenize(side).count(), 3);
        // a second pass starts from the beginning again
        let first = tokenizer.tokenize(side).next().unwrap();
        assert_eq!(first.species, "A");
    }

    #[test]
    fn test_tokens_are_produced_lazily() {
        let tokenizer = RegexTokenizer::new();
        let mut iter = tokenizer.tokenize("A + B");
        assert_eq!(iter.next().map(|t| t.species), Some("A"));
        assert_eq!(iter.next().map(|t| t.species), Some("B"));
        assert_eq!(iter.next(), None);
    }
}
