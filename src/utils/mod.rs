pub mod environment;
pub mod logging;
pub mod paths;
pub mod terminal;

pub use environment::{AssistantConfig, get_log_dir, get_log_filter};
pub use logging::init_logging;
pub use paths::{
    APP_DIR_NAME, default_profile_path, format_path_with_tilde, resolve_profile_path,
    validate_file_size,
};
pub use terminal::sanitize_for_terminal;
