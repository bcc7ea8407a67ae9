use fin_portal_common::{
    chart::{KpiData, SpendData},
    error::ErrorDetail,
    insight::BusinessInsight,
    loan::Loan,
    product::Product,
    session::{Credentials, Session},
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Thin client over the portal backend. One method per endpoint, no auth
/// headers; the backend infers identity from query parameters.
#[derive(Clone, Copy)]
pub struct PortalApi {
    url: &'static str,
}

impl PortalApi {
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let url = format!("{}/login", self.url);
        let response = Request::post(&url).json(credentials)?.send().await?;
        if !response.ok() {
            return Err(rejection(response).await);
        }
        let body = response.json::<serde_json::Value>().await?;
        Ok(Session::from_login(&credentials.username, body)?)
    }

    pub async fn recommended(&self, cid: i64) -> Result<Vec<Product>> {
        self.fetch(format!("{}/recommend?cid={cid}", self.url)).await
    }

    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>> {
        self.fetch(format!("{}/search_products?query={query}", self.url))
            .await
    }

    pub async fn business_kpi(&self, bid: i64) -> Result<KpiData> {
        self.fetch(format!("{}/business_chart?bid={bid}", self.url))
            .await
    }

    pub async fn business_insight(&self, bid: i64) -> Result<BusinessInsight> {
        self.fetch(format!("{}/business_insight?bid={bid}", self.url))
            .await
    }

    pub async fn customer_spends(&self, cid: i64) -> Result<SpendData> {
        self.fetch(format!("{}/customer_chart?cid={cid}", self.url))
            .await
    }

    pub async fn loan_recommendations(&self, cid: i64) -> Result<Vec<Loan>> {
        self.fetch(format!("{}/loan_recommend?cid={cid}", self.url))
            .await
    }

    async fn fetch<T>(&self, url: String) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(rejection(response).await);
        }
        Ok(response.json().await?)
    }
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] gloo_net::Error),
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Session(#[from] fin_portal_common::error::FpError),
}

/// Extracts the backend's `detail` message from a rejected response, falling
/// back to the raw body text
async fn rejection(response: Response) -> Error {
    let Ok(text) = response.text().await else {
        return Error::Rejected(response.status_text());
    };
    match serde_json::from_str::<ErrorDetail>(&text) {
        Ok(body) => Error::Rejected(body.detail),
        Err(_) => Error::Rejected(text),
    }
}
