// Public modules so the CLI and the hosting app can use them
pub mod config;
pub mod services;

pub use config::AdminConfig;
pub use services::catalog;
pub use services::customization;
pub use services::settings::{title_case, AllowList};
