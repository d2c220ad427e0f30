use crate::species::label::Species;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read class list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: unknown species {name:?}")]
    UnknownSpecies { line: usize, name: String },
    #[error("line {line}: species {name:?} listed more than once")]
    Duplicate { line: usize, name: String },
    #[error("class list is missing {missing:?}")]
    Missing { missing: Vec<String> },
}

/// Maps the model's output index to a species. The order is part of the
/// exported model, so it is checked against the closed species set instead
/// of being trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCatalog {
    classes: Vec<Species>,
}

impl Default for ClassCatalog {
    fn default() -> Self {
        Self {
            classes: Species::ALL.to_vec(),
        }
    }
}

impl ClassCatalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// One species name per line. Blank lines and `#` comments are skipped.
    pub fn parse(contents: &str) -> Result<Self, CatalogError> {
        let mut classes: Vec<Species> = Vec::with_capacity(Species::ALL.len());

        for (index, raw) in contents.lines().enumerate() {
            let name = raw.trim();
            if name.is_empty() || name.starts_with('#') {
                continue;
            }

            let line = index + 1;
            let species = Species::from_name(name).ok_or_else(|| CatalogError::UnknownSpecies {
                line,
                name: name.to_string(),
            })?;

            if classes.contains(&species) {
                return Err(CatalogError::Duplicate {
                    line,
                    name: name.to_string(),
                });
            }
            classes.push(species);
        }

        let missing: Vec<String> = Species::ALL
            .iter()
            .filter(|species| !classes.contains(*species))
            .map(|species| species.name().to_string())
            .collect();
        if !missing.is_empty() {
            return Err(CatalogError::Missing { missing });
        }

        Ok(Self { classes })
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn species_at(&self, index: usize) -> Option<Species> {
        self.classes.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Species> + '_ {
        self.classes.iter().copied()
    }
}
