/// eng
/// Equation -> stoichiometric matrix pipeline.
/// The module takes as input a vector of reaction equations specified as Strings and produces:
/// 1) the vector of species handles in order of first appearance
/// 2) the stoichiometric matrix (species x equations) with one extra column holding the row sums
///
/// Reactant coefficients are negative, product coefficients positive. A missing coefficient means 1.
/// A trailing '_dup' or '_DUP' (duplicate reaction mark of mechanism databases) is removed as a parsing artifact.
/// ----------------------------------------------------------------
/// # Examples
/// ```
/// use RxnMatrix::Kinetics::reaction_set::ReactionSet;
/// use RxnMatrix::Kinetics::species_registry::SpeciesBase;
/// let mut base = SpeciesBase::new();
/// let set = ReactionSet::from_equations(&["A = B", "B = C"], &mut base).unwrap();
/// println!("species: {:?}", set.species_names(&base));
/// println!("{}", set.matrix());
/// ```
pub mod reaction_set;
/// typed errors of the pipeline
pub mod rxn_errors;
/// registry of species names: name -> stable handle
pub mod species_registry;
/// splitting of equation sides into (coefficient, species) tokens
pub mod term_tokenizer;
/// splitting of an equation into reactant and product sides
pub mod equation_splitter;
/// signed terms of one equation side
pub mod term_parser;
/// assembly of the stoichiometric matrix
pub mod stoich_matrix;
