//! Core non-UI logic split into modular submodules.

pub mod catalog;
pub mod detail;
pub mod format;
pub mod text;

// Re-export public APIs to keep short import paths (crate::logic::...)
pub use catalog::{
    apply_catalog_result, cycle_region_filter, derive_display_list, move_selection,
    refresh_display_list, selected_code, set_region_filter, set_search_text,
};
pub use detail::{
    DetailFields, apply_border_response, apply_detail_response, back_to_home,
    move_border_selection, native_name, open_detail, selected_border_code,
};
