pub mod diagnostics;
pub mod health;
pub mod menu;
pub mod root;

pub use diagnostics::test_database;
pub use health::{health_check, metrics_endpoint};
pub use menu::{create_menu_item, list_menu, seed_menu};
pub use root::{hello, read_root};
