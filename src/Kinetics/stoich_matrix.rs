use super::species_registry::SpeciesHandle;
use super::term_parser::Term;
use log::{debug, warn};
use nalgebra::DMatrix;
use std::collections::HashMap;

/// Builds the stoichiometric matrix: one row per species (in the order of `species`), one column
/// per equation and a last column with the row sums.
///
/// Terms of the same species in one equation are added up, so "A + A = B" gives -2 for A.
/// Every species referenced by `terms_per_equation` has to be present in `species`; a term whose
/// species is missing there is left out of the matrix and reported with a warning.
pub fn assemble_matrix(species: &[SpeciesHandle], terms_per_equation: &[Vec<Term>]) -> DMatrix<f64> {
    let num_rows = species.len();
    let num_eqs = terms_per_equation.len();
    let row_of: HashMap<SpeciesHandle, usize> = species
        .iter()
        .enumerate()
        .map(|(i, handle)| (*handle, i))
        .collect();
    let mut matrix = DMatrix::zeros(num_rows, num_eqs + 1);
    for (j, terms) in terms_per_equation.iter().enumerate() {
        for term in terms {
            match row_of.get(&term.species) {
                Some(&i) => matrix[(i, j)] += term.coefficient,
                None => warn!(
                    "species {} of equation {} is not in the species list, term {} skipped",
                    term.species, j, term.coefficient
                ),
            }
        }
    }
    for i in 0..num_rows {
        let mut sum = 0.0;
        for j in 0..num_eqs {
            sum += matrix[(i, j)];
        }
        matrix[(i, num_eqs)] = sum;
    }
    debug!("stoichiometric matrix {}x{} assembled", num_rows, num_eqs + 1);
    matrix
}
