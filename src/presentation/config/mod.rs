mod settings;

pub use settings::{
    GoogleSettings, OpenAiSettings, ServerSettings, Settings, SettingsError, require_credentials,
};
