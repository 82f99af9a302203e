use crate::core::{CampaignArchive, Pipeline};
use crate::utils::error::Result;
use std::time::Instant;

pub struct CampaignEngine<P: Pipeline> {
    pipeline: P,
}

/// What a run produced, for callers that report on it.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub input_rows: usize,
    pub duplicates_removed: usize,
    pub output_rows: usize,
}

impl<P: Pipeline> CampaignEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self, input: &[u8]) -> Result<CampaignArchive> {
        self.run_with_summary(input).map(|(archive, _)| archive)
    }

    /// Runs extract, transform and load to completion; nothing partial is returned.
    pub fn run_with_summary(&self, input: &[u8]) -> Result<(CampaignArchive, RunSummary)> {
        let started = Instant::now();
        tracing::info!("🚀 Starting campaign generation");

        let table = self.pipeline.extract(input)?;
        tracing::info!("Extracted {} records", table.len());

        let result = self.pipeline.transform(table)?;
        let summary = RunSummary {
            input_rows: result.input_rows,
            duplicates_removed: result.duplicates_removed,
            output_rows: result.output.len(),
        };
        tracing::info!(
            "Transformed {} records ({} duplicates removed)",
            summary.output_rows,
            summary.duplicates_removed
        );

        let archive = self.pipeline.load(result)?;
        tracing::info!("✅ Campaign generated in {:?}", started.elapsed());

        Ok((archive, summary))
    }
}
