mod chat_mode;
mod content;
mod history;
mod session;

pub use chat_mode::ChatMode;
pub use content::{ContentKind, DocumentContent};
pub use history::{ChatHistory, HistoryEntry};
pub use session::{Session, SessionStatus};
