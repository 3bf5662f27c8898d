use crate::loader::SourceTable;
use crate::model::FetchError;

#[async_trait::async_trait]
pub trait TableSource: Send + Sync {
    async fn fetch(&self, table: SourceTable) -> Result<String, FetchError>;
}
