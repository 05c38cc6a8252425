pub mod form_sheet;
pub mod list;

pub use list::UserListScreen;
