pub mod announcements;
pub mod chat_area;
pub mod input_bar;
pub mod overview;
pub mod sidebar;
