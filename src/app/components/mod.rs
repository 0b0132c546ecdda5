pub mod gallery_grid;
pub mod notifications;
pub mod upload_panel;
