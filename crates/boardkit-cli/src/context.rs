use std::sync::Arc;

use boardkit_core::{AppConfig, BoardResult};
use boardkit_domain::UserId;
use boardkit_server::BoardService;
use boardkit_store::JsonFileStore;
use uuid::Uuid;

/// Everything a command handler needs: the service over the opened data
/// file and the acting user.
pub struct CliContext {
    pub service: BoardService,
    pub user: UserId,
}

impl CliContext {
    /// Open the data file and resolve the acting user. Flag beats env
    /// beats config file; a missing user id is minted and reported so
    /// follow-up invocations can reuse it.
    pub async fn load(file: Option<String>, user: Option<Uuid>) -> BoardResult<Self> {
        let config = AppConfig::load();
        let path = file
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| config.effective_data_file());

        let store = JsonFileStore::open(&path).await?;
        tracing::debug!("opened data file {}", store.path().display());

        let user = match user.or(config.user_id) {
            Some(user) => user,
            None => {
                let minted = Uuid::new_v4();
                tracing::warn!(
                    "no user id given; acting as {} (pass --user to keep one identity)",
                    minted
                );
                minted
            }
        };

        Ok(Self {
            service: BoardService::new(Arc::new(store)),
            user,
        })
    }
}
