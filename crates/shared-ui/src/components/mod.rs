pub mod alert;
pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod input;
pub mod navbar;
pub mod page_header;
pub mod pagination;
pub mod search_bar;
pub mod sheet;
pub mod skeleton;
pub mod stat_card;
pub mod textarea;

pub use alert::*;
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form_select::*;
pub use input::*;
pub use navbar::*;
pub use page_header::*;
pub use pagination::*;
pub use search_bar::*;
pub use sheet::*;
pub use skeleton::*;
pub use stat_card::*;
pub use textarea::*;
