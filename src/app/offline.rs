use crate::core::engine::{CampaignEngine, RunSummary};
use crate::core::pipeline::CampaignPipeline;
use crate::core::{Clock, Storage};
use crate::utils::error::{GeneratorError, Result};

/// Runs the campaign pipeline on an in-memory table and stores the archive.
///
/// Returns the stored location together with the run counts.
pub async fn generate_to_storage<C, S>(clock: C, input: &[u8], storage: &S) -> Result<(String, RunSummary)>
where
    C: Clock,
    S: Storage,
{
    let engine = CampaignEngine::new(CampaignPipeline::new(clock));
    let (archive, summary) = engine.run_with_summary(input)?;

    tracing::debug!("Writing {} ({} bytes) to storage", archive.filename, archive.bytes.len());
    let location = storage.write_file(archive.filename, &archive.bytes).await?;

    Ok((location, summary))
}

/// 讀取離線輸入檔；找不到或無權限屬於呼叫端錯誤
pub async fn read_input(path: &str) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .map_err(|e| GeneratorError::InputFileError {
            path: path.to_string(),
            message: e.to_string(),
        })
}
