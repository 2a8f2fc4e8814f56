pub mod endpoints;
pub mod engine;

pub use crate::domain::model::{
    Article, ArticleListPage, ArticlePage, BackendResponse, Digest, PageData, PageRequest,
};
pub use crate::domain::ports::{Backend, ConfigProvider, PageLoader};
pub use crate::utils::error::Result;
