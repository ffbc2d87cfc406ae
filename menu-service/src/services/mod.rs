pub mod metrics;
pub mod store;

pub use metrics::{get_metrics, init_metrics, record_menu_items_created, record_seed};
pub use store::{DocumentStore, MockDocumentStore, MongoStore};
