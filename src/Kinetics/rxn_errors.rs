//! Error types of the equation -> stoichiometric matrix pipeline.
use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by a species registry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    /// the registry is closed and does not know this name
    #[error("Unknown species: '{0}'")]
    UnknownSpecies(String),
    #[error("Species name is empty")]
    EmptyName,
}

/// Errors of reaction set construction and of the file/config layer around it.
#[derive(Debug, Error)]
pub enum RxnError {
    /// separator missing or repeated
    #[error("Malformed equation '{equation}': {reason}")]
    MalformedEquation { equation: String, reason: String },
    /// coefficient token that does not parse as a real number
    #[error("Invalid coefficient '{token}' in term '{term}' of equation '{equation}'")]
    InvalidCoefficient {
        equation: String,
        term: String,
        token: String,
    },
    #[error("Term '{term}' of equation '{equation}' has no species name")]
    MissingSpecies { equation: String, term: String },
    #[error("Species registry error: {0}")]
    Registry(#[from] RegistryError),
    #[error("I/O error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("No 'REACTIONS' section found in '{0}'")]
    NoReactionsSection(PathBuf),
}

impl RxnError {
    pub fn malformed(equation: &str, reason: &str) -> Self {
        RxnError::MalformedEquation {
            equation: equation.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_failing_input() {
        let err = RxnError::malformed("A + B", "no separator '=' found");
        assert_eq!(
            err.to_string(),
            "Malformed equation 'A + B': no separator '=' found"
        );
        let err = RxnError::InvalidCoefficient {
            equation: "xA = B".to_string(),
            term: "xA".to_string(),
            token: "x".to_string(),
        };
        assert!(err.to_string().contains("'x'"));
        assert!(err.to_string().contains("xA = B"));
    }

    #[test]
    fn test_registry_error_converts() {
        let err: RxnError = RegistryError::UnknownSpecies("Xe".to_string()).into();
        match err {
            RxnError::Registry(RegistryError::UnknownSpecies(name)) => assert_eq!(name, "Xe"),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
