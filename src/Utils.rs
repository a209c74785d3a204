/// Reading of equation lists from text files
///
///  # Examples
/// ```no_run
/// use RxnMatrix::Utils::load_from_file::load_equations_from_file;
/// let loaded = load_equations_from_file("mechanism.txt").unwrap();
/// println!("{} equations, comment: {}", loaded.equations.len(), loaded.comment);
/// ```
pub mod load_from_file;
