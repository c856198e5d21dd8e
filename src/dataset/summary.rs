use super::EnrichedRecord;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

/// Per-model means over all of that model's records.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModelStats {
    pub record_count: usize,
    pub mean_price: f64,
    pub mean_performance_score: f64,
    pub mean_price_performance_ratio: f64,
    pub mean_benchmark_score: f64,
}

/// Structured summary of an assembled dataset, for reporting consumers.
///
/// Ordered collections only, so serializing the same dataset twice yields
/// identical bytes.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub record_count: usize,
    pub contributing_columns: usize,
    pub models: BTreeSet<String>,
    /// Distinct capacities, smallest first.
    pub capacities: Vec<String>,
    pub per_model: BTreeMap<String, ModelStats>,
    pub analysis_year: Option<i32>,
}

#[derive(Default)]
struct Accumulator {
    count: usize,
    price: f64,
    performance: f64,
    ratio: f64,
    benchmark: f64,
}

impl Accumulator {
    fn add(&mut self, record: &EnrichedRecord) {
        self.count += 1;
        self.price += record.price;
        self.performance += record.features.performance_score;
        self.ratio += record.features.price_performance_ratio;
        self.benchmark += record.profile.benchmark_score;
    }

    fn finish(self) -> ModelStats {
        let n = self.count.max(1) as f64;
        ModelStats {
            record_count: self.count,
            mean_price: self.price / n,
            mean_performance_score: self.performance / n,
            mean_price_performance_ratio: self.ratio / n,
            mean_benchmark_score: self.benchmark / n,
        }
    }
}

impl DatasetSummary {
    pub fn from_records(records: &[EnrichedRecord], analysis_year: Option<i32>) -> Self {
        let mut models = BTreeSet::new();
        let mut columns = BTreeSet::new();
        let mut capacities = Vec::new();
        let mut accumulators: BTreeMap<String, Accumulator> = BTreeMap::new();

        for record in records {
            models.insert(record.model.clone());
            columns.insert(record.column);
            capacities.push(record.capacity);
            accumulators
                .entry(record.model.clone())
                .or_default()
                .add(record);
        }

        capacities.sort_by_key(|c| (c.in_gb(), *c));
        capacities.dedup();

        Self {
            record_count: records.len(),
            contributing_columns: columns.len(),
            models,
            capacities: capacities.iter().map(|c| c.to_string()).collect(),
            per_model: accumulators
                .into_iter()
                .map(|(model, acc)| (model, acc.finish()))
                .collect(),
            analysis_year,
        }
    }

    pub fn distinct_models(&self) -> usize {
        self.models.len()
    }

    pub fn distinct_capacities(&self) -> usize {
        self.capacities.len()
    }

    pub fn log(&self) {
        info!(
            "Dataset has {} records from {} columns",
            self.record_count, self.contributing_columns
        );
        info!(
            "Models ({}): {}",
            self.distinct_models(),
            self.models.iter().cloned().collect::<Vec<_>>().join(", ")
        );
        info!(
            "Capacities ({}): {}",
            self.distinct_capacities(),
            self.capacities.join(", ")
        );
        for (model, stats) in &self.per_model {
            info!(
                "  {}: performance {:.1}, price/performance {:.1}, benchmark {:.0} ({} records)",
                model,
                stats.mean_performance_score,
                stats.mean_price_performance_ratio,
                stats.mean_benchmark_score,
                stats.record_count
            );
        }
    }
}
