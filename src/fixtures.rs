//! Fixtures
//!
//! Named sets of plays, invoices and provinces stored as YAML under a base
//! directory (`./fixtures` by default):
//!
//! ```text
//! fixtures/plays/<set>.yml
//! fixtures/invoices/<set>.yml
//! fixtures/provinces/<set>.yml
//! ```

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    invoices::Invoice,
    market::{province::Province, snapshot::ProvinceData},
    plays::{Play, PlayCatalog},
    statement::{Statement, StatementError},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invoice index out of range
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(usize),

    /// Province not found
    #[error("Province not found: {0}")]
    ProvinceNotFound(String),

    /// Statement could not be produced for a loaded invoice
    #[error(transparent)]
    Statement(#[from] StatementError),
}

#[derive(Debug, Deserialize)]
struct PlaysFixture {
    plays: FxHashMap<String, Play>,
}

#[derive(Debug, Deserialize)]
struct InvoicesFixture {
    invoices: Vec<Invoice>,
}

#[derive(Debug, Deserialize)]
struct ProvincesFixture {
    provinces: FxHashMap<String, ProvinceData>,
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Plays loaded so far, keyed by play ID
    catalog: PlayCatalog,

    /// Invoices in file order
    invoices: Vec<Invoice>,

    /// Province snapshots keyed by fixture key
    provinces: FxHashMap<String, ProvinceData>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: PlayCatalog::new(),
            invoices: Vec::new(),
            provinces: FxHashMap::default(),
        }
    }

    fn read(&self, category: &str, name: &str) -> Result<String, FixtureError> {
        let file_path = self.base_path.join(category).join(format!("{name}.yml"));

        debug!(path = %file_path.display(), "loading fixture");

        Ok(fs::read_to_string(&file_path)?)
    }

    /// Load plays from a YAML fixture file, adding them to the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_plays(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: PlaysFixture = serde_norway::from_str(&self.read("plays", name)?)?;

        for (play_id, play) in fixture.plays {
            self.catalog.insert(play_id, play);
        }

        Ok(self)
    }

    /// Load invoices from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_invoices(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: InvoicesFixture = serde_norway::from_str(&self.read("invoices", name)?)?;

        self.invoices.extend(fixture.invoices);

        Ok(self)
    }

    /// Load province snapshots from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_provinces(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ProvincesFixture = serde_norway::from_str(&self.read("provinces", name)?)?;

        self.provinces.extend(fixture.provinces);

        Ok(self)
    }

    /// Load a complete fixture set (plays, invoices and provinces with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_plays(name)?
            .load_invoices(name)?
            .load_provinces(name)?;

        Ok(fixture)
    }

    /// Get the play catalog
    pub fn catalog(&self) -> &PlayCatalog {
        &self.catalog
    }

    /// Get all invoices
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Get an invoice by its position in the fixture
    ///
    /// # Errors
    ///
    /// Returns an error if there is no invoice at that position.
    pub fn invoice(&self, index: usize) -> Result<&Invoice, FixtureError> {
        self.invoices
            .get(index)
            .ok_or(FixtureError::InvoiceNotFound(index))
    }

    /// Build the statement for an invoice against the loaded catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the invoice doesn't exist or can't be charged.
    pub fn statement(&self, index: usize) -> Result<Statement, FixtureError> {
        Ok(Statement::new(self.invoice(index)?, &self.catalog)?)
    }

    /// Get a province snapshot by its key
    ///
    /// # Errors
    ///
    /// Returns an error if the province is not found.
    pub fn province_data(&self, key: &str) -> Result<&ProvinceData, FixtureError> {
        self.provinces
            .get(key)
            .ok_or_else(|| FixtureError::ProvinceNotFound(key.to_string()))
    }

    /// Keys of all loaded province snapshots
    pub fn province_keys(&self) -> impl Iterator<Item = &str> {
        self.provinces.keys().map(String::as_str)
    }

    /// Build a fresh province from the snapshot with the given key
    ///
    /// # Errors
    ///
    /// Returns an error if the province is not found.
    pub fn province(&self, key: &str) -> Result<Province, FixtureError> {
        Ok(Province::new(self.province_data(key)?.clone()))
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use testresult::TestResult;

    use super::*;

    fn write_fixture(base: &Path, category: &str, name: &str, contents: &str) -> TestResult {
        let dir = base.join(category);

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    #[test]
    fn sample_set_loads_plays_invoices_and_provinces() -> TestResult {
        let fixture = Fixture::from_set("sample")?;

        assert_eq!(fixture.catalog().len(), 3);
        assert_eq!(fixture.invoices().len(), 1);
        assert_eq!(fixture.invoice(0)?.customer, "BigCo");
        assert_eq!(fixture.province_data("asia")?, &ProvinceData::sample());

        Ok(())
    }

    #[test]
    fn loads_from_custom_base_path() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(
            dir.path(),
            "plays",
            "tiny",
            "plays:\n  lear:\n    name: King Lear\n    type: tragedy\n",
        )?;

        write_fixture(
            dir.path(),
            "invoices",
            "tiny",
            "invoices:\n  - customer: Tiny\n    performances:\n      - playID: lear\n        audience: 31\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());

        fixture.load_plays("tiny")?.load_invoices("tiny")?;

        assert_eq!(fixture.statement(0)?.total_amount(), 41_000);

        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        let mut fixture = Fixture::with_base_path("./does-not-exist");

        assert!(matches!(
            fixture.load_plays("sample"),
            Err(FixtureError::Io(_))
        ));
    }

    #[test]
    fn malformed_yaml_is_yaml_error() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(dir.path(), "provinces", "bad", "provinces: [1, 2")?;

        let mut fixture = Fixture::with_base_path(dir.path());

        assert!(matches!(
            fixture.load_provinces("bad"),
            Err(FixtureError::Yaml(_))
        ));

        Ok(())
    }

    #[test]
    fn unknown_lookups_are_reported() -> TestResult {
        let fixture = Fixture::from_set("sample")?;

        assert!(matches!(
            fixture.invoice(5),
            Err(FixtureError::InvoiceNotFound(5))
        ));
        assert!(matches!(
            fixture.province("europe"),
            Err(FixtureError::ProvinceNotFound(key)) if key == "europe"
        ));

        Ok(())
    }
}
