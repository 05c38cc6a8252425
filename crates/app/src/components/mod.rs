pub mod confirm_bar;
pub mod sheet_mode;

pub use confirm_bar::ConfirmBar;
pub use sheet_mode::SheetMode;
