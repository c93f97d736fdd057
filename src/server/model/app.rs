use sea_orm::DatabaseConnection;

/// State shared by every handler.
///
/// Handlers pass the connection explicitly into each repository and service call.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
