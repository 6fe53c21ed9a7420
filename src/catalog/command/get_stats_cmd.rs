use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::CatalogStatsDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetStatsCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetStatsCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct GetStatsCommandRequest {}

#[derive(Debug, Serialize)]
pub(crate) struct GetStatsCommandResponse {
    pub stats: CatalogStatsDto,
}

impl GetStatsCommandResponse {
    pub fn new(stats: CatalogStatsDto) -> Self {
        Self {
            stats,
        }
    }
}

#[async_trait]
impl Command<GetStatsCommandRequest, GetStatsCommandResponse> for GetStatsCommand {
    async fn execute(&self, _req: GetStatsCommandRequest) -> Result<GetStatsCommandResponse, CommandError> {
        self.catalog_service.stats()
            .await.map_err(CommandError::from).map(GetStatsCommandResponse::new)
    }
}
