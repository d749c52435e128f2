//! Application state wiring the generation clients and the record store.
//!
//! Built once at startup. Pipelines borrow from it through
//! [`AppState::services`]; nothing is reconnected per request.

use std::path::PathBuf;

use dineai_core::feature::PipelineServices;
use dineai_core::llm::{CompletionClient, ImageClient};
use dineai_core::prompt::PromptBuilder;
use dineai_infra::config::validate_config;
use dineai_infra::filesystem::ensure_data_dir;
use dineai_infra::llm::GeminiProvider;
use dineai_infra::secret::resolve_api_key;
use dineai_infra::sqlite::{DatabasePool, SqliteRecordStore, database_url_for};
use dineai_types::config::AppConfig;
use dineai_types::error::ConfigError;

/// Pipeline dependencies pinned to the concrete infra implementations.
pub type AppServices<'a> = PipelineServices<'a, GeminiProvider, GeminiProvider, SqliteRecordStore>;

pub struct AppState {
    pub data_dir: PathBuf,
    pub config: AppConfig,
    pub prompts: PromptBuilder,
    pub completion: CompletionClient<GeminiProvider>,
    pub images: ImageClient<GeminiProvider>,
    pub records: SqliteRecordStore,
}

impl AppState {
    /// Resolve the credential, open the store, and build the clients.
    ///
    /// Every failure here is fatal: a missing API key, an invalid config
    /// value, or a store that cannot be opened or migrated.
    pub async fn init(data_dir: PathBuf, config: AppConfig) -> Result<Self, ConfigError> {
        validate_config(&config)?;
        let api_key = resolve_api_key()?;

        let provider = GeminiProvider::from_config(api_key, &config.model)?;

        ensure_data_dir(&data_dir).await.map_err(|e| {
            ConfigError::StoreUnavailable(format!(
                "cannot create data directory {}: {e}",
                data_dir.display()
            ))
        })?;
        let database_url = config
            .store
            .database_url
            .clone()
            .unwrap_or_else(|| database_url_for(&data_dir));
        let pool = DatabasePool::new(&database_url)
            .await
            .map_err(|e| ConfigError::StoreUnavailable(e.to_string()))?;

        let prompts =
            PromptBuilder::builtin().map_err(|e| ConfigError::InvalidConfig(e.to_string()))?;

        let completion =
            CompletionClient::from_config(provider.clone(), &config.model, &config.completion);
        let images = ImageClient::new(provider, config.model.image_model.clone());

        tracing::debug!(
            data_dir = %data_dir.display(),
            text_model = %config.model.text_model,
            image_model = %config.model.image_model,
            "Application state initialized"
        );

        Ok(Self {
            data_dir,
            config,
            prompts,
            completion,
            images,
            records: SqliteRecordStore::new(pool),
        })
    }

    pub fn services(&self) -> AppServices<'_> {
        PipelineServices {
            prompts: &self.prompts,
            completion: &self.completion,
            images: &self.images,
            records: &self.records,
        }
    }

    /// Default folder for generated menu images.
    pub fn images_dir(&self) -> PathBuf {
        self.data_dir.join("images")
    }
}
