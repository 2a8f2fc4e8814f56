pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpBackend;
pub use app::loaders::{ArticleDetailLoader, ArticleListLoader};
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    endpoints::Endpoints, engine::PageEngine, ArticleListPage, ArticlePage, Backend,
    ConfigProvider, PageData, PageLoader, PageRequest,
};
pub use utils::error::{LoaderError, Result};
