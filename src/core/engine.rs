use crate::app::loaders::{ArticleDetailLoader, ArticleListLoader};
use crate::core::{Backend, ConfigProvider, PageData, PageLoader, PageRequest};
use crate::utils::error::Result;

/// 依照頁面請求分派到對應的 loader
pub struct PageEngine<B: Backend + Clone> {
    list_loader: ArticleListLoader<B>,
    detail_loader: ArticleDetailLoader<B>,
}

impl<B: Backend + Clone> PageEngine<B> {
    pub fn new(list_loader: ArticleListLoader<B>, detail_loader: ArticleDetailLoader<B>) -> Self {
        Self {
            list_loader,
            detail_loader,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(backend: B, config: &C) -> Result<Self> {
        let list_loader = ArticleListLoader::from_config(backend.clone(), config)?;
        let detail_loader = ArticleDetailLoader::from_config(backend, config)?;
        Ok(Self::new(list_loader, detail_loader))
    }

    pub async fn render(&self, request: &PageRequest) -> PageData {
        tracing::info!("📄 Loading page: {:?}", request);

        let page = match request {
            PageRequest::ArticleList => PageData::ArticleList(self.list_loader.load(&()).await),
            PageRequest::Article { id } => PageData::Article(self.detail_loader.load(id).await),
        };

        if let Some(error) = page.error() {
            tracing::warn!("⚠️ Page rendered with error: {}", error);
        }
        page
    }
}
