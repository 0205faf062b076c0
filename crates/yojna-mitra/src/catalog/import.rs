use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{
    EligibilityRule, IncomeBracket, LocalizedList, LocalizedText, Program, ProgramId, ProgramKind,
};
use super::{Catalog, CatalogError};

/// Importer for spreadsheet-maintained catalogs exported as CSV.
///
/// List cells use `;` as the item separator. Every row becomes one program
/// and the resulting set passes through the same validation as the JSON and
/// bundled sources.
pub struct CsvCatalogImporter;

impl CsvCatalogImporter {
    pub fn from_path(path: &Path) -> Result<Catalog, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut programs = Vec::new();
        for record in csv_reader.deserialize::<CatalogRow>() {
            let row = record?;
            programs.push(row.into_program()?);
        }

        Catalog::from_programs(programs)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Program ID")]
    id: String,
    #[serde(rename = "Name (en)")]
    name_en: String,
    #[serde(rename = "Name (hi)")]
    name_hi: String,
    #[serde(rename = "Description (en)")]
    description_en: String,
    #[serde(rename = "Description (hi)")]
    description_hi: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Score")]
    score: u8,
    #[serde(rename = "Min Age", default, deserialize_with = "empty_string_as_none")]
    min_age: Option<String>,
    #[serde(rename = "Max Age", default, deserialize_with = "empty_string_as_none")]
    max_age: Option<String>,
    #[serde(rename = "Max Income", default, deserialize_with = "empty_string_as_none")]
    max_income: Option<String>,
    #[serde(rename = "Categories", default)]
    categories: String,
    #[serde(rename = "Occupations", default)]
    occupations: String,
    #[serde(rename = "States", default)]
    states: String,
    #[serde(rename = "Criteria (en)")]
    criteria_en: String,
    #[serde(rename = "Criteria (hi)")]
    criteria_hi: String,
    #[serde(rename = "Benefits (en)")]
    benefits_en: String,
    #[serde(rename = "Benefits (hi)")]
    benefits_hi: String,
    #[serde(rename = "Documents (en)")]
    documents_en: String,
    #[serde(rename = "Documents (hi)")]
    documents_hi: String,
    #[serde(rename = "Steps (en)")]
    steps_en: String,
    #[serde(rename = "Steps (hi)")]
    steps_hi: String,
    #[serde(rename = "Link")]
    link: String,
}

impl CatalogRow {
    fn into_program(self) -> Result<Program, CatalogError> {
        let kind = match self.kind.to_ascii_lowercase().as_str() {
            "central" => ProgramKind::Central,
            "state" => ProgramKind::State,
            other => {
                return Err(CatalogError::InvalidProgram {
                    program: self.id.clone(),
                    detail: format!("unknown program type '{other}'"),
                })
            }
        };

        let min_age = parse_optional_age(&self.id, self.min_age.as_deref())?;
        let max_age = parse_optional_age(&self.id, self.max_age.as_deref())?;

        let max_income = match self.max_income.as_deref() {
            None => None,
            Some(raw) => Some(IncomeBracket::from_key(raw).ok_or_else(|| {
                CatalogError::InvalidProgram {
                    program: self.id.clone(),
                    detail: format!("unknown income bracket key '{raw}'"),
                }
            })?),
        };

        Ok(Program {
            eligibility: EligibilityRule {
                min_age,
                max_age,
                max_income,
                categories: split_items(&self.categories),
                occupations: split_items(&self.occupations),
                states: split_items(&self.states),
            },
            id: ProgramId(self.id),
            name: LocalizedText {
                en: self.name_en,
                hi: self.name_hi,
            },
            description: LocalizedText {
                en: self.description_en,
                hi: self.description_hi,
            },
            kind,
            base_score: self.score,
            criteria: LocalizedList {
                en: split_items(&self.criteria_en),
                hi: split_items(&self.criteria_hi),
            },
            benefits: LocalizedList {
                en: split_items(&self.benefits_en),
                hi: split_items(&self.benefits_hi),
            },
            documents: LocalizedList {
                en: split_items(&self.documents_en),
                hi: split_items(&self.documents_hi),
            },
            steps: LocalizedList {
                en: split_items(&self.steps_en),
                hi: split_items(&self.steps_hi),
            },
            application_link: self.link,
        })
    }
}

fn split_items(cell: &str) -> Vec<String> {
    cell.split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_optional_age(program: &str, raw: Option<&str>) -> Result<Option<u16>, CatalogError> {
    raw.map(|value| {
        value
            .parse::<u16>()
            .map_err(|_| CatalogError::InvalidProgram {
                program: program.to_owned(),
                detail: format!("invalid age bound '{value}'"),
            })
    })
    .transpose()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
