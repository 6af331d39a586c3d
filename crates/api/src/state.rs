/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (the store handle is reference counted).
#[derive(Clone)]
pub struct AppState {
    /// Key-value store handle shared by every repository.
    pub store: learnpath_db::Store,
}
