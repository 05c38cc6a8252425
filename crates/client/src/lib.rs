pub mod api;
pub mod config;
pub mod http;
pub mod screen;
pub mod session;
pub mod storage;

pub use config::{load_config, parse_config};
pub use http::{should_force_logout, ApiClient};
pub use screen::{DetailState, ListState, Phase, ScreenState, Ticket};
pub use session::{Session, SESSION_KEYS};
pub use storage::{KeyValueStore, MemoryStore, SharedStore};
