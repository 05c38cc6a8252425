pub mod detail;
pub mod form_sheet;
pub mod list;

pub use detail::ProjectDetailScreen;
pub use list::ProjectListScreen;
