use crate::domain::model::{CampaignArchive, Table, TransformResult};
use crate::utils::error::Result;

/// Synchronous extract → transform → load over one uploaded table.
pub trait Pipeline: Send + Sync {
    fn extract(&self, input: &[u8]) -> Result<Table>;
    fn transform(&self, table: Table) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<CampaignArchive>;
}

/// Source of the current calendar month (1 = January).
pub trait Clock: Send + Sync {
    fn current_month(&self) -> u32;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}
