//! `HolidayCatalog` — the loaded set of public holidays, keyed by
//! jurisdiction.
//!
//! The catalog reads its [`HolidaySource`] at most once.  The first call that
//! needs the data parses the document under a lock and publishes the result
//! through a `OnceLock`; every later call (from any thread) reads the cached
//! snapshot without touching the source again.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use bt_core::errors::{Error, Result};
use bt_core::fail;
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::holiday::HolidayRecord;
use crate::jurisdiction::Jurisdiction;

/// Where the holiday document comes from.
pub trait HolidaySource: std::fmt::Debug + Send + Sync {
    /// Return the raw JSON text of the holiday document.
    fn read_document(&self) -> Result<String>;

    /// Short description used in log lines and error messages.
    fn describe(&self) -> String;
}

/// A holiday document stored on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Read the document at `path` on first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HolidaySource for FileSource {
    fn read_document(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .map_err(|e| Error::HolidaySource(format!("{}: {e}", self.path.display())))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A holiday document held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    json: String,
}

impl StaticSource {
    /// Wrap an in-memory JSON document.
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl HolidaySource for StaticSource {
    fn read_document(&self) -> Result<String> {
        Ok(self.json.clone())
    }

    fn describe(&self) -> String {
        "<static>".to_owned()
    }
}

#[derive(Debug)]
struct LoadedCatalog {
    records: Vec<HolidayRecord>,
    dates: HashMap<Jurisdiction, BTreeSet<NaiveDate>>,
}

impl LoadedCatalog {
    fn from_records(records: Vec<HolidayRecord>) -> Self {
        let dates = Jurisdiction::ALL
            .iter()
            .map(|&j| {
                let set = records
                    .iter()
                    .filter(|r| j.matches_tag(r.jurisdiction()))
                    .map(HolidayRecord::date)
                    .collect();
                (j, set)
            })
            .collect();
        Self { records, dates }
    }
}

/// Process-local cache of public holidays.
///
/// Owned by the service that created it; wrap it in an `Arc` to share one
/// snapshot between calculators or threads.
#[derive(Debug)]
pub struct HolidayCatalog {
    source: Box<dyn HolidaySource>,
    cache: OnceLock<LoadedCatalog>,
    load_lock: Mutex<()>,
}

impl HolidayCatalog {
    /// Create a catalog that lazily loads `source`.
    pub fn new(source: impl HolidaySource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: OnceLock::new(),
            load_lock: Mutex::new(()),
        }
    }

    /// Create a catalog backed by a JSON file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(FileSource::new(path))
    }

    /// Create a catalog backed by an in-memory JSON document.
    pub fn from_json_str(json: impl Into<String>) -> Self {
        Self::new(StaticSource::new(json))
    }

    /// Create an already-loaded catalog from records built elsewhere.
    pub fn from_records(records: Vec<HolidayRecord>) -> Self {
        let catalog = Self::new(StaticSource::new("[]"));
        // Freshly created, so the cell is empty and `set` cannot fail.
        let _ = catalog.cache.set(LoadedCatalog::from_records(records));
        catalog
    }

    /// Return `true` once the source has been read and parsed.
    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Force the one-time load now instead of on first lookup.
    pub fn preload(&self) -> Result<()> {
        self.loaded().map(|_| ())
    }

    /// All holidays in document order.
    ///
    /// The first call reads the source; later calls return the same cached
    /// slice.
    pub fn fetch_holidays(&self) -> Result<&[HolidayRecord]> {
        Ok(&self.loaded()?.records)
    }

    /// Ordered holiday dates that apply to `jurisdiction`.
    pub fn dates(&self, jurisdiction: Jurisdiction) -> Result<&BTreeSet<NaiveDate>> {
        let loaded = self.loaded()?;
        // Built for every member of `Jurisdiction::ALL` at load time.
        match loaded.dates.get(&jurisdiction) {
            Some(dates) => Ok(dates),
            None => fail!("no holiday set for {jurisdiction}"),
        }
    }

    /// Holiday dates for a raw jurisdiction code.
    ///
    /// An empty or unknown code yields an empty set rather than an error;
    /// callers that need the error must go through
    /// [`Jurisdiction::validate`] first.
    pub fn holiday_dates_for(&self, code: &str) -> Result<BTreeSet<NaiveDate>> {
        match Jurisdiction::validate(code) {
            Ok(j) => Ok(self.dates(j)?.clone()),
            Err(_) => {
                debug!(code, "holiday lookup for unsupported jurisdiction");
                Ok(BTreeSet::new())
            }
        }
    }

    fn loaded(&self) -> Result<&LoadedCatalog> {
        if let Some(loaded) = self.cache.get() {
            return Ok(loaded);
        }
        let _guard = match self.load_lock.lock() {
            Ok(guard) => guard,
            Err(_) => fail!("holiday catalog load lock poisoned"),
        };
        if let Some(loaded) = self.cache.get() {
            return Ok(loaded);
        }
        let records = self.read_records()?;
        Ok(self.cache.get_or_init(|| LoadedCatalog::from_records(records)))
    }

    fn read_records(&self) -> Result<Vec<HolidayRecord>> {
        let source = self.source.describe();
        let text = self.source.read_document()?;
        let document: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| Error::HolidaySource(format!("{source}: {e}")))?;
        let entries = document.as_array().ok_or_else(|| {
            Error::HolidaySource(format!("{source}: expected a JSON array of holidays"))
        })?;

        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match HolidayRecord::from_json(entry) {
                Some(record) => records.push(record),
                None => debug!(index, %entry, "dropping holiday entry without a usable date"),
            }
        }
        info!(
            source = %source,
            loaded = records.len(),
            dropped = entries.len() - records.len(),
            "holiday catalog loaded"
        );
        Ok(records)
    }
}
