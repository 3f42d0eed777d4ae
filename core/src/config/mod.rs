mod load;
mod types;

pub use load::{get_convey_data_dir, load_default, load_path};
pub use types::{AppConfig, LoggingConfig, SinkConfig, StageConfig};
