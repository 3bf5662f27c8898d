use crate::config::AppConfig;
use crate::loader::{SourceTable, TableSource};
use crate::model::FetchError;
use reqwest::Client;
use std::time::Duration;

pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible) OlistPulse/0.1")
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: config.dataset_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn build_url(&self, table: SourceTable) -> String {
        format!("{}/{}", self.base_url, table.file_name())
    }
}

#[async_trait::async_trait]
impl TableSource for HttpFetcher {
    async fn fetch(&self, table: SourceTable) -> Result<String, FetchError> {
        let url = self.build_url(table);

        let response = self.client.get(&url).send().await.map_err(|e| FetchError::Http {
            table: table.name(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                table: table.name(),
                status,
            });
        }

        response.text().await.map_err(|e| FetchError::Http {
            table: table.name(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_raw_csv_urls_without_double_slashes() {
        let config = AppConfig {
            dataset_base_url: "https://example.com/data/".to_string(),
            ..AppConfig::default()
        };
        let fetcher = HttpFetcher::new(&config);
        assert_eq!(
            fetcher.build_url(SourceTable::Orders),
            "https://example.com/data/orders_dataset.csv"
        );
        assert_eq!(
            fetcher.build_url(SourceTable::CategoryTranslations),
            "https://example.com/data/product_category_name_translation.csv"
        );
    }
}
