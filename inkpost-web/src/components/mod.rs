pub mod field_input;
pub mod field_textarea;
pub mod footer;
pub mod header;
pub mod theme_toggle;
