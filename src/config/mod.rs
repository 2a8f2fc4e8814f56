pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::endpoints::{DEFAULT_BACKEND_URL, DEFAULT_RELATED_LIMIT};
#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, PageRequest};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_provider, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "article-loaders")]
#[command(about = "Load article page data from the backend and print it as JSON")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    #[arg(long, help = "Fetch the digest alongside the article list")]
    pub include_digest: bool,

    #[arg(long, help = "Fetch related articles on the article page")]
    pub include_related: bool,

    #[arg(long, default_value_t = DEFAULT_RELATED_LIMIT)]
    pub related_limit: usize,

    #[arg(long)]
    pub article_skip: Option<usize>,

    #[arg(long)]
    pub article_limit: Option<usize>,

    #[arg(long, help = "Render the page of this article instead of the list")]
    pub article: Option<String>,

    #[arg(short, long, help = "Read settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn page_request(&self) -> PageRequest {
        match &self.article {
            Some(id) => PageRequest::Article { id: id.clone() },
            None => PageRequest::ArticleList,
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn backend_url(&self) -> &str {
        &self.backend_url
    }

    fn include_digest(&self) -> bool {
        self.include_digest
    }

    fn include_related(&self) -> bool {
        self.include_related
    }

    fn related_limit(&self) -> usize {
        self.related_limit
    }

    fn article_skip(&self) -> Option<usize> {
        self.article_skip
    }

    fn article_limit(&self) -> Option<usize> {
        self.article_limit
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
