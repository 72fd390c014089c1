mod store_service;
mod tracker_store;

pub use store_service::StoreService;
pub use tracker_store::TrackerStore;
