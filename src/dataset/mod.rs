//! CEP range dataset
//!
//! Numeric CEP ranges per state, embedded at compile time and parsed once on
//! first use. The table is immutable afterwards and shared by every caller.

use std::sync::OnceLock;

use rand::Rng;
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::{DocumentError, Result};
use crate::{CEP_DATASET_VERSION, CEP_MAX};

// Embed the dataset at compile time
const CEP_RANGES_CSV: &str = include_str!("cep_ranges.csv");

/// One contiguous block of CEPs assigned to a state
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CepRange {
    /// Two-letter state code (UF)
    pub uf: String,
    /// Human readable area name
    pub locality: String,
    /// Lowest CEP in the block, inclusive
    pub low: u32,
    /// Highest CEP in the block, inclusive
    pub high: u32,
}

impl CepRange {
    /// Check whether a numeric CEP falls inside this block
    pub fn contains(&self, value: u32) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Draw a uniform value from `[low, high]`, or `low` for a degenerate block
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        if self.low >= self.high {
            return self.low;
        }
        rng.random_range(self.low..=self.high)
    }
}

/// Parsed CEP range table. Never empty.
#[derive(Debug, Clone)]
pub struct CepRangeTable {
    records: Vec<CepRange>,
}

impl CepRangeTable {
    /// Parse a table from CSV with the header `uf,locality,low,high`
    pub fn load(csv_data: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let mut record: CepRange = row?;
            record.uf = record.uf.to_ascii_uppercase();
            validate_record(&record)?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(DocumentError::DatasetError(
                "CEP range table is empty".to_string(),
            ));
        }

        Ok(Self { records })
    }

    /// A single nationwide block, used when the embedded data is unusable
    pub fn fallback() -> Self {
        Self {
            records: vec![CepRange {
                uf: "BR".to_string(),
                locality: "Brasil".to_string(),
                low: 0,
                high: CEP_MAX,
            }],
        }
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Never true for a table built by `load` or `fallback`
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All blocks in file order
    pub fn records(&self) -> &[CepRange] {
        &self.records
    }

    /// Pick a uniformly random block
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &CepRange {
        // Non-empty by construction
        &self.records[rng.random_range(0..self.records.len())]
    }

    /// Blocks belonging to a state (case-insensitive)
    pub fn for_state(&self, uf: &str) -> Vec<&CepRange> {
        self.records
            .iter()
            .filter(|r| r.uf.eq_ignore_ascii_case(uf.trim()))
            .collect()
    }

    /// Block containing a numeric CEP
    pub fn find(&self, value: u32) -> Option<&CepRange> {
        self.records.iter().find(|r| r.contains(value))
    }

    /// Distinct state codes in file order
    pub fn states(&self) -> Vec<&str> {
        let mut states: Vec<&str> = Vec::new();
        for record in &self.records {
            if !states.contains(&record.uf.as_str()) {
                states.push(&record.uf);
            }
        }
        states
    }
}

fn validate_record(record: &CepRange) -> Result<()> {
    if record.uf.len() != 2 || !record.uf.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(DocumentError::DatasetError(format!(
            "invalid state code '{}'",
            record.uf
        )));
    }
    if record.low > record.high {
        return Err(DocumentError::DatasetError(format!(
            "range {}..{} for {} is inverted",
            record.low, record.high, record.uf
        )));
    }
    if record.high > CEP_MAX {
        return Err(DocumentError::DatasetError(format!(
            "range end {} for {} exceeds 8 digits",
            record.high, record.uf
        )));
    }
    Ok(())
}

static CEP_RANGES: OnceLock<CepRangeTable> = OnceLock::new();

/// The embedded CEP range table, parsed on first call
pub fn cep_ranges() -> &'static CepRangeTable {
    CEP_RANGES.get_or_init(|| match CepRangeTable::load(CEP_RANGES_CSV) {
        Ok(table) => {
            debug!(
                version = CEP_DATASET_VERSION,
                records = table.len(),
                "loaded CEP range table"
            );
            table
        }
        Err(e) => {
            error!(error = %e, "embedded CEP range table is invalid, using nationwide range");
            CepRangeTable::fallback()
        }
    })
}
