use super::rxn_errors::RegistryError;
use log::debug;
use std::collections::HashMap;
use std::fmt;

/// Opaque handle of a species inside a registry. Two handles are equal only if they
/// point to the same registry entry; the name string is never compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpeciesHandle(usize);

impl SpeciesHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SpeciesHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Maps species names to stable handles. The same name must always give the same handle.
pub trait SpeciesRegistry {
    fn resolve(&mut self, name: &str) -> Result<SpeciesHandle, RegistryError>;
    /// reverse lookup, None for handles this registry never issued
    fn name(&self, handle: SpeciesHandle) -> Option<&str>;
}

/// Interning table of species names.
///
/// An open base hands out a new handle for every unseen name. A closed base only knows the
/// names it was created with and reports anything else as `UnknownSpecies`.
#[derive(Debug, Clone, Default)]
pub struct SpeciesBase {
    handles: HashMap<String, SpeciesHandle>,
    names: Vec<String>,
    closed: bool,
}

impl SpeciesBase {
    pub fn new() -> Self {
        Self::default()
    }
    /// registry that accepts only the given names
    pub fn closed(names: Vec<&str>) -> Self {
        let mut base = Self::new();
        for name in names {
            base.intern(name.trim());
        }
        base.closed = true;
        base
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn intern(&mut self, name: &str) -> SpeciesHandle {
        if let Some(handle) = self.handles.get(name) {
            return *handle;
        }
        let handle = SpeciesHandle(self.names.len());
        self.names.push(name.to_string());
        self.handles.insert(name.to_string(), handle);
        debug!("new species '{}' registered as {}", name, handle);
        handle
    }
}

impl SpeciesRegistry for SpeciesBase {
    fn resolve(&mut self, name: &str) -> Result<SpeciesHandle, RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        match self.handles.get(name) {
            Some(handle) => Ok(*handle),
            None if self.closed => Err(RegistryError::UnknownSpecies(name.to_string())),
            None => Ok(self.intern(name)),
        }
    }

    fn name(&self, handle: SpeciesHandle) -> Option<&str> {
        self.names.get(handle.0).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_same_handle() {
        let mut base = SpeciesBase::new();
        let h2o = base.resolve("H2O").unwrap();
        let o2 = base.resolve("O2").unwrap();
        assert_ne!(h2o, o2);
        assert_eq!(base.resolve("H2O").unwrap(), h2o);
        assert_eq!(base.resolve(" H2O ").unwrap(), h2o);
        assert_eq!(base.len(), 2);
        assert_eq!(base.name(o2), Some("O2"));
    }

    #[test]
    fn test_closed_base_rejects_unknown_names() {
        let mut base = SpeciesBase::closed(vec!["CO", "O2", "CO2"]);
        assert!(base.is_closed());
        assert!(base.resolve("CO2").is_ok());
        assert_eq!(
            base.resolve("NO"),
            Err(RegistryError::UnknownSpecies("NO".to_string()))
        );
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn test_empty_name() {
        let mut base = SpeciesBase::new();
        assert_eq!(base.resolve("  "), Err(RegistryError::EmptyName));
        assert!(base.is_empty());
        assert_eq!(base.name(SpeciesHandle(7)), None);
    }
}
