use crate::domain::model::BackendResponse;
use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

/// 後端存取的抽象；loader 只透過這個 trait 發出請求
#[async_trait]
pub trait Backend: Send + Sync {
    /// 發出 GET 請求。只要收到回應就回傳 `Ok`，不論狀態碼
    async fn get(&self, url: &Url) -> Result<BackendResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn backend_url(&self) -> &str;
    fn include_digest(&self) -> bool;
    fn include_related(&self) -> bool;
    fn related_limit(&self) -> usize;
    fn article_skip(&self) -> Option<usize>;
    fn article_limit(&self) -> Option<usize>;
}

#[async_trait]
pub trait PageLoader: Send + Sync {
    type Params: ?Sized + Sync;
    type Output;

    /// 載入頁面資料。所有後端失敗都會轉成輸出裡的 `error`，不會往外拋
    async fn load(&self, params: &Self::Params) -> Self::Output;
}
