mod settings;

pub use settings::{ChatSettings, LlmSettings, ServerSettings, Settings, UploadSettings};
