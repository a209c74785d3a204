use super::rxn_errors::RxnError;
use super::species_registry::{SpeciesHandle, SpeciesRegistry};
use super::term_tokenizer::{RawTerm, TermTokenizer};
use log::debug;

/// signed stoichiometric coefficient of one species in one equation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub species: SpeciesHandle,
}

/// Turns equation sides into signed terms and keeps the list of species in order of first
/// appearance.
pub struct TermParser<'p, T: TermTokenizer + ?Sized, R: SpeciesRegistry + ?Sized> {
    tokenizer: &'p T,
    registry: &'p mut R,
    species: Vec<SpeciesHandle>,
}

impl<'p, T: TermTokenizer + ?Sized, R: SpeciesRegistry + ?Sized> TermParser<'p, T, R> {
    pub fn new(tokenizer: &'p T, registry: &'p mut R) -> Self {
        Self {
            tokenizer,
            registry,
            species: Vec::new(),
        }
    }

    /// species seen so far, first-seen order
    pub fn species(&self) -> &[SpeciesHandle] {
        &self.species
    }

    pub fn into_species(self) -> Vec<SpeciesHandle> {
        self.species
    }

    /// Parses one side of `equation` and appends its terms to `terms`.
    /// `is_reactant` = true gives negative coefficients, false positive ones.
    pub fn parse_side(
        &mut self,
        equation: &str,
        side: &str,
        is_reactant: bool,
        terms: &mut Vec<Term>,
    ) -> Result<(), RxnError> {
        let sign = if is_reactant { -1.0 } else { 1.0 };
        for raw in self.tokenizer.tokenize(side) {
            let magnitude = parse_coefficient(equation, &raw)?;
            if raw.species.is_empty() {
                return Err(RxnError::MissingSpecies {
                    equation: equation.to_string(),
                    term: raw.term.to_string(),
                });
            }
            let handle = self.registry.resolve(raw.species)?;
            if !self.species.contains(&handle) {
                self.species.push(handle);
            }
            debug!("term '{}' -> {} x {}", raw.term, sign * magnitude, raw.species);
            terms.push(Term {
                coefficient: sign * magnitude,
                species: handle,
            });
        }
        Ok(())
    }
}

/// Magnitude of a coefficient: 1 when nothing was written, otherwise a finite non-negative number.
fn parse_coefficient(equation: &str, raw: &RawTerm) -> Result<f64, RxnError> {
    if raw.coefficient.is_empty() {
        return Ok(1.0);
    }
    let invalid = || RxnError::InvalidCoefficient {
        equation: equation.to_string(),
        term: raw.term.to_string(),
        token: raw.coefficient.to_string(),
    };
    let value: f64 = raw.coefficient.parse().map_err(|_| invalid())?;
    // the sign comes from the side of the equation only
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok(value)
}
