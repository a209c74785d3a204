use super::equation_splitter::{split_equation, strip_dup_marker};
use super::rxn_errors::RxnError;
use super::species_registry::{SpeciesHandle, SpeciesRegistry};
use super::stoich_matrix::assemble_matrix;
use super::term_parser::{Term, TermParser};
use super::term_tokenizer::{RegexTokenizer, TermTokenizer};
use crate::settings::ParserConfig;
use log::{info, warn};
use nalgebra::{DMatrix, DVector};
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

/// One or several reaction equations parsed into a common species list and a stoichiometric
/// matrix.
///
/// Rows of the matrix follow `species()` (order of first appearance: earlier equations first,
/// reactants before products, terms as written). Column j holds the coefficients of equation j,
/// reactants negative and products positive; the last column is the sum of the other columns
/// of its row. The set is read-only once built.
#[derive(Debug, Clone)]
pub struct ReactionSet {
    equations: Vec<String>,
    comment: String,
    species: Vec<SpeciesHandle>,
    matrix: DMatrix<f64>,
}

/// serializable view of a reaction set with species names resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionSetSummary {
    pub comment: String,
    pub equations: Vec<String>,
    pub species: Vec<String>,
    /// one row per species, last entry of a row is the sum
    pub matrix: Vec<Vec<f64>>,
}

impl ReactionSet {
    pub fn new<R: SpeciesRegistry + ?Sized>(equation: &str, registry: &mut R) -> Result<Self, RxnError> {
        Self::from_equations_with_comment(&[equation], "", registry)
    }

    pub fn with_comment<R: SpeciesRegistry + ?Sized>(
        equation: &str,
        comment: &str,
        registry: &mut R,
    ) -> Result<Self, RxnError> {
        Self::from_equations_with_comment(&[equation], comment, registry)
    }

    pub fn from_equations<S: AsRef<str>, R: SpeciesRegistry + ?Sized>(
        equations: &[S],
        registry: &mut R,
    ) -> Result<Self, RxnError> {
        Self::from_equations_with_comment(equations, "", registry)
    }

    pub fn from_equations_with_comment<S: AsRef<str>, R: SpeciesRegistry + ?Sized>(
        equations: &[S],
        comment: &str,
        registry: &mut R,
    ) -> Result<Self, RxnError> {
        Self::build(
            equations,
            comment,
            registry,
            &RegexTokenizer::new(),
            &ParserConfig::default(),
        )
    }

    /// Parses all equations and assembles the matrix. The first equation that fails stops the
    /// construction, the equations after it are not looked at.
    pub fn build<S, R, T>(
        equations: &[S],
        comment: &str,
        registry: &mut R,
        tokenizer: &T,
        config: &ParserConfig,
    ) -> Result<Self, RxnError>
    where
        S: AsRef<str>,
        R: SpeciesRegistry + ?Sized,
        T: TermTokenizer + ?Sized,
    {
        if equations.is_empty() {
            warn!("reaction set '{}' is built from an empty list of equations", comment);
        }
        let mut parser = TermParser::new(tokenizer, registry);
        let mut cleaned = Vec::with_capacity(equations.len());
        let mut terms_per_equation: Vec<Vec<Term>> = Vec::with_capacity(equations.len());
        for equation in equations {
            let mut equation = equation.as_ref().trim();
            if config.strip_dup_marker {
                equation = strip_dup_marker(equation);
            }
            let (reactants, products) = split_equation(equation, &config.separator)?;
            let mut terms = Vec::new();
            parser.parse_side(equation, reactants, true, &mut terms)?;
            parser.parse_side(equation, products, false, &mut terms)?;
            terms_per_equation.push(terms);
            cleaned.push(equation.to_string());
        }
        let species = parser.into_species();
        let matrix = assemble_matrix(&species, &terms_per_equation);
        info!(
            "parsed {} equation(s) with {} species",
            cleaned.len(),
            species.len()
        );
        Ok(Self {
            equations: cleaned,
            comment: comment.to_string(),
            species,
            matrix,
        })
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn equations(&self) -> &[String] {
        &self.equations
    }

    pub fn species(&self) -> &[SpeciesHandle] {
        &self.species
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn number_of_equations(&self) -> usize {
        self.equations.len()
    }

    pub fn number_of_species(&self) -> usize {
        self.species.len()
    }

    /// last column of the matrix: net coefficient of every species over all equations
    pub fn sum_column(&self) -> DVector<f64> {
        self.matrix.column(self.equations.len()).into_owned()
    }

    /// coefficient of `species` in equation `equation`; None if the species or the equation
    /// is not part of this set
    pub fn coefficient(&self, species: SpeciesHandle, equation: usize) -> Option<f64> {
        if equation >= self.equations.len() {
            return None;
        }
        let row = self.species.iter().position(|s| *s == species)?;
        Some(self.matrix[(row, equation)])
    }

    /// Species names in row order. Handles the registry does not know are shown as "#index".
    pub fn species_names<R: SpeciesRegistry + ?Sized>(&self, registry: &R) -> Vec<String> {
        self.species
            .iter()
            .map(|handle| {
                registry
                    .name(*handle)
                    .map_or_else(|| handle.to_string(), |name| name.to_string())
            })
            .collect()
    }

    pub fn to_summary<R: SpeciesRegistry + ?Sized>(&self, registry: &R) -> ReactionSetSummary {
        let matrix = self
            .matrix
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect();
        ReactionSetSummary {
            comment: self.comment.clone(),
            equations: self.equations.clone(),
            species: self.species_names(registry),
            matrix,
        }
    }

    pub fn to_json<R: SpeciesRegistry + ?Sized>(&self, registry: &R) -> Result<String, RxnError> {
        Ok(serde_json::to_string_pretty(&self.to_summary(registry))?)
    }

    /// table with one row per species, columns eq_0 .. eq_n and sum
    pub fn to_table<R: SpeciesRegistry + ?Sized>(&self, registry: &R) -> Table {
        let mut table = Table::new();
        let mut header = vec![Cell::new("species")];
        for j in 0..self.equations.len() {
            header.push(Cell::new(&format!("eq_{}", j)));
        }
        header.push(Cell::new("sum"));
        table.add_row(Row::new(header));
        for (i, name) in self.species_names(registry).iter().enumerate() {
            let mut row = vec![Cell::new(name)];
            for value in self.matrix.row(i).iter() {
                row.push(Cell::new(&value.to_string()));
            }
            table.add_row(Row::new(row));
        }
        table
    }

    pub fn pretty_print<R: SpeciesRegistry + ?Sized>(&self, registry: &R) {
        if !self.comment.is_empty() {
            println!("{}", self.comment);
        }
        for (j, equation) in self.equations.iter().enumerate() {
            println!("eq_{}: {}", j, equation);
        }
        self.to_table(registry).printstd();
    }
}
