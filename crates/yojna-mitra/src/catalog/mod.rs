//! The static program catalog: bilingual content plus eligibility rule data.
//!
//! The catalog is loaded once at startup, validated, and shared read-only
//! across sessions. Three providers exist: the bundled default set, a JSON
//! file, and a CSV importer for spreadsheet-maintained catalogs.

mod builtin;
pub mod domain;
mod import;

pub use domain::{
    EligibilityRule, IncomeBracket, LocalizedList, LocalizedText, Program, ProgramId, ProgramKind,
};
pub use import::CsvCatalogImporter;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::localization::Locale;

/// Validation and load errors for catalog sources.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog source: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("duplicate program id '{0}'")]
    DuplicateProgram(String),
    #[error("program '{program}' has an empty '{section}' list for locale '{locale}'")]
    EmptySection {
        program: String,
        section: &'static str,
        locale: Locale,
    },
    #[error("program '{program}' carries score {score}, expected 0-100")]
    ScoreOutOfRange { program: String, score: u8 },
    #[error("program '{program}' is invalid: {detail}")]
    InvalidProgram { program: String, detail: String },
    #[error("cannot tell the catalog format of '{path}'; expected a .json or .csv file")]
    UnsupportedSource { path: String },
}

/// Immutable, validated set of published programs.
///
/// Insertion order is preserved and is the tie-break order during ranking.
#[derive(Debug, Clone)]
pub struct Catalog {
    programs: Vec<Program>,
}

impl Catalog {
    /// Validate and wrap a set of programs.
    pub fn from_programs(programs: Vec<Program>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for program in &programs {
            if !seen.insert(program.id.0.clone()) {
                return Err(CatalogError::DuplicateProgram(program.id.0.clone()));
            }
            if program.base_score > 100 {
                return Err(CatalogError::ScoreOutOfRange {
                    program: program.id.0.clone(),
                    score: program.base_score,
                });
            }
            for (section, list) in [
                ("criteria", &program.criteria),
                ("benefits", &program.benefits),
                ("documents", &program.documents),
                ("steps", &program.steps),
            ] {
                for locale in [Locale::En, Locale::Hi] {
                    if list.get(locale).is_empty() {
                        return Err(CatalogError::EmptySection {
                            program: program.id.0.clone(),
                            section,
                            locale,
                        });
                    }
                }
            }
        }

        Ok(Self { programs })
    }

    /// The catalog shipped with the binary.
    pub fn bundled() -> Self {
        Self::from_programs(builtin::bundled_programs()).expect("bundled catalog validates")
    }

    /// Load and validate a JSON catalog file.
    pub fn from_json_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&raw)?;
        Self::from_programs(file.programs)
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn get(&self, id: &ProgramId) -> Option<&Program> {
        self.programs.iter().find(|program| &program.id == id)
    }

    /// Case-insensitive keyword search over names and descriptions in both
    /// languages, preserving catalog order.
    pub fn search(&self, keyword: &str) -> Vec<&Program> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.programs
            .iter()
            .filter(|program| {
                [
                    &program.name.en,
                    &program.name.hi,
                    &program.description.en,
                    &program.description.hi,
                ]
                .iter()
                .any(|text| text.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    programs: Vec<Program>,
}

/// Seam for the presentation layer to obtain a catalog without caring about
/// the backing format.
pub trait CatalogProvider: Send + Sync {
    fn load_catalog(&self) -> Result<Catalog, CatalogError>;
}

/// Provider returning the bundled program set.
#[derive(Debug, Default, Clone)]
pub struct BundledCatalog;

impl CatalogProvider for BundledCatalog {
    fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        Ok(Catalog::bundled())
    }
}

/// Provider backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CatalogProvider for JsonCatalog {
    fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        Catalog::from_json_path(&self.path)
    }
}
