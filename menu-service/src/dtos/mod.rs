pub mod diagnostics;
pub mod menu;

pub use diagnostics::DiagnosticsResponse;
pub use menu::{
    CreateMenuItemRequest, CreateMenuItemResponse, MenuListParams, MessageResponse, SeedResponse,
    SeedStatus,
};
