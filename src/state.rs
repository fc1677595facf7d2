use crate::database::store::GameStore;

#[derive(Clone, Default)]
pub struct AppState {
    pub store: GameStore,
}

impl AppState {
    pub fn new(store: GameStore) -> Self {
        AppState { store }
    }
}
