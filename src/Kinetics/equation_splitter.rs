use super::rxn_errors::RxnError;
use log::debug;

/// Removes the "_DUP"/"_dup" marker that mechanism databases append to duplicated reactions.
pub fn strip_dup_marker(equation: &str) -> &str {
    let trimmed = equation.trim_end();
    trimmed
        .strip_suffix("_DUP")
        .or_else(|| trimmed.strip_suffix("_dup"))
        .unwrap_or(trimmed)
}

/// Splits an equation into (reactants, products) at `separator`.
/// The separator must occur exactly once; both sides are returned trimmed.
pub fn split_equation<'a>(equation: &'a str, separator: &str) -> Result<(&'a str, &'a str), RxnError> {
    let mut parts = equation.splitn(2, separator);
    let reactants = parts.next().unwrap_or_default();
    let products = match parts.next() {
        Some(products) => products,
        None => {
            return Err(RxnError::malformed(
                equation,
                &format!("no separator '{}' found", separator),
            ));
        }
    };
    if products.contains(separator) {
        return Err(RxnError::malformed(
            equation,
            &format!("separator '{}' occurs more than once", separator),
        ));
    }
    debug!("equation '{}' split into '{}' and '{}'", equation, reactants, products);
    Ok((reactants.trim(), products.trim()))
}
