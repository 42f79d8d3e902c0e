//! Knapsack instances: loading, generation and end-to-end runs.
//!
//! A [`Scenario`] owns the items of one instance and its weight limit. It
//! can be read from CSV, written back out, or generated synthetically, and
//! [`Scenario::run`] solves it with the greedy baseline followed by the GA.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::KnapsackError;
use crate::ga::{GaConfig, GaResult, GaRunner};
use crate::greedy;
use crate::model::{Item, Knapsack, Strategy};
use crate::observer::Observer;

/// Fraction of the total item value used as the weight limit when loading.
pub const WEIGHT_LIMIT_RATIO: f64 = 0.4;

const HEADER: [&str; 3] = ["index", "value", "weight"];

/// One CSV record. Fields are read by position, so the header only has to
/// name the columns, in any letter case.
#[derive(Debug, Serialize, Deserialize)]
struct Row {
    index: usize,
    value: f64,
    weight: f64,
}

/// Items plus the capacity they are packed against.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    items: Vec<Item>,
    weight_limit: f64,
}

/// Outcome of [`Scenario::run`].
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub greedy: Strategy,
    pub ga: GaResult,
}

/// Parameters for [`Scenario::generate`]. Ranges are inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub num_items: usize,
    pub min_value: u32,
    pub max_value: u32,
    pub min_weight: u32,
    pub max_weight: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_items: 1000,
            min_value: 10,
            max_value: 1000,
            min_weight: 5,
            max_weight: 200,
        }
    }
}

impl GeneratorConfig {
    pub fn with_num_items(mut self, n: usize) -> Self {
        self.num_items = n;
        self
    }

    fn validate(&self) -> Result<(), KnapsackError> {
        if self.num_items == 0 {
            return Err(KnapsackError::EmptyInstance);
        }
        if self.min_value > self.max_value || self.min_weight > self.max_weight {
            return Err(KnapsackError::InvalidConfig(
                "generator ranges must satisfy min <= max".into(),
            ));
        }
        Ok(())
    }
}

impl Scenario {
    /// Creates a scenario from items and an explicit weight limit.
    pub fn new(items: Vec<Item>, weight_limit: f64) -> Result<Self, KnapsackError> {
        if items.is_empty() {
            return Err(KnapsackError::EmptyInstance);
        }
        if !weight_limit.is_finite() || weight_limit <= 0.0 {
            return Err(KnapsackError::InvalidWeightLimit(weight_limit));
        }
        Ok(Self {
            items,
            weight_limit,
        })
    }

    /// Creates a scenario whose weight limit is derived from the items:
    /// `ceil(total_value * WEIGHT_LIMIT_RATIO)`.
    pub fn with_derived_limit(items: Vec<Item>) -> Result<Self, KnapsackError> {
        let limit = derive_weight_limit(&items);
        Self::new(items, limit)
    }

    /// Parses CSV with an `index,value,weight` header.
    ///
    /// Fields may be quoted and padded with whitespace; blank lines are
    /// skipped. The weight limit is derived from the total value.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, KnapsackError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers().map_err(csv_error)?;
        if headers.is_empty() {
            return Err(KnapsackError::EmptyInstance);
        }
        if !headers.iter().map(str::to_lowercase).eq(HEADER) {
            return Err(KnapsackError::Parse {
                line: record_line(headers),
                message: format!("expected header `{}`", HEADER.join(",")),
            });
        }

        let mut items = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(csv_error)?;
            let line = record_line(&record);
            let row: Row = record.deserialize(None).map_err(|err| KnapsackError::Parse {
                line,
                message: err.to_string(),
            })?;
            check_quantity(row.value, "value", line)?;
            check_quantity(row.weight, "weight", line)?;
            items.push(Item::new(row.index, row.value, row.weight));
        }

        let scenario = Self::with_derived_limit(items)?;
        tracing::debug!(
            items = scenario.items.len(),
            weight_limit = scenario.weight_limit,
            "scenario loaded"
        );
        Ok(scenario)
    }

    /// Reads a scenario from a file. See [`from_reader`](Self::from_reader).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, KnapsackError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Generates a random instance with integer values and weights drawn
    /// uniformly from the configured ranges. Indices start at 1.
    pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Self, KnapsackError> {
        config.validate()?;

        let items = (1..=config.num_items)
            .map(|index| {
                let value = rng.random_range(config.min_value..=config.max_value);
                let weight = rng.random_range(config.min_weight..=config.max_weight);
                Item::new(index, value as f64, weight as f64)
            })
            .collect();

        Self::with_derived_limit(items)
    }

    /// Writes the items in the format read by [`from_reader`](Self::from_reader).
    pub fn to_csv<W: Write>(&self, writer: W) -> Result<(), KnapsackError> {
        let mut wtr = csv::Writer::from_writer(writer);
        for item in &self.items {
            wtr.serialize(Row {
                index: item.index,
                value: item.value,
                weight: item.weight,
            })?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn weight_limit(&self) -> f64 {
        self.weight_limit
    }

    /// Borrows the scenario as a solver input.
    pub fn knapsack(&self) -> Knapsack<'_> {
        Knapsack::new(&self.items, self.weight_limit)
    }

    /// Runs the greedy baseline, then the GA, reporting both to `observer`.
    pub fn run<O: Observer>(
        &self,
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<ScenarioReport, KnapsackError> {
        let problem = self.knapsack();
        let greedy = greedy::solve_observed(&problem, &mut *observer);
        let ga = GaRunner::run(&problem, config, observer)?;
        Ok(ScenarioReport { greedy, ga })
    }
}

/// `ceil(total_value * WEIGHT_LIMIT_RATIO)`.
pub fn derive_weight_limit(items: &[Item]) -> f64 {
    let total: f64 = items.iter().map(|item| item.value).sum();
    (total * WEIGHT_LIMIT_RATIO).ceil()
}

fn record_line(record: &csv::StringRecord) -> usize {
    record.position().map_or(1, |pos| pos.line() as usize)
}

/// Errors tied to a position in the input become [`KnapsackError::Parse`].
fn csv_error(err: csv::Error) -> KnapsackError {
    match err.position() {
        Some(pos) => KnapsackError::Parse {
            line: pos.line() as usize,
            message: err.to_string(),
        },
        None => KnapsackError::Csv(err),
    }
}

fn check_quantity(v: f64, name: &str, line: usize) -> Result<(), KnapsackError> {
    if !v.is_finite() || v < 0.0 {
        return Err(KnapsackError::Parse {
            line,
            message: format!("{name} must be a non-negative number, got `{v}`"),
        });
    }
    Ok(())
}
