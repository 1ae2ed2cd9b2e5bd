use mongodb::Database;

use crate::utils::bot_filter::BotFilter;

/// Shared per-worker state. `db` is None when the store is unconfigured; the
/// handlers then degrade to no-op results instead of erroring.
pub struct AppState {
    pub db: Option<Database>,
    pub bot_filter: BotFilter,
    pub logs_password: Option<String>,
}
