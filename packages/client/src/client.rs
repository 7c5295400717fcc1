use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::requests::{Message, NewReport, ReportUpdate};
use folio_editor::ReportStore;
use folio_model::{Element, ElementKind, Report, SampleRecord};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Async client for the reports backend
#[derive(Debug, Clone)]
pub struct ReportsClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ReportsClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// `GET /reports`
    pub async fn list_reports(&self) -> Result<Vec<Report>, ClientError> {
        self.send(self.http.get(self.url("/reports"))).await
    }

    /// `GET /reports/{id}`
    pub async fn get_report(&self, report_id: &str) -> Result<Report, ClientError> {
        self.send(self.http.get(self.report_url(report_id))).await
    }

    /// `POST /reports`
    pub async fn create_report(&self, report: &NewReport) -> Result<Report, ClientError> {
        self.send(self.http.post(self.url("/reports")).json(report))
            .await
    }

    /// `PUT /reports/{id}`
    pub async fn update_report(
        &self,
        report_id: &str,
        update: &ReportUpdate,
    ) -> Result<Report, ClientError> {
        self.send(self.http.put(self.report_url(report_id)).json(update))
            .await
    }

    /// `PUT /reports/{id}` with only the layout
    pub async fn save_layout(&self, report_id: &str, layout: &[Element]) -> Result<Report, ClientError> {
        self.update_report(report_id, &ReportUpdate::layout(layout.to_vec()))
            .await
    }

    /// `DELETE /reports/{id}`
    pub async fn delete_report(&self, report_id: &str) -> Result<Message, ClientError> {
        self.send(self.http.delete(self.report_url(report_id)))
            .await
    }

    /// `POST /initialize-sample-data`; a no-op on the backend once seeded
    pub async fn initialize_sample_data(&self) -> Result<Message, ClientError> {
        self.send(self.http.post(self.url("/initialize-sample-data")))
            .await
    }

    /// `GET /sample-data`
    pub async fn sample_data(&self) -> Result<Vec<SampleRecord>, ClientError> {
        self.send(self.http.get(self.url("/sample-data"))).await
    }

    /// `GET /sample-data/{type}`
    pub async fn sample_data_by_type(&self, kind: ElementKind) -> Result<Vec<SampleRecord>, ClientError> {
        self.send(self.http.get(self.url(&format!("/sample-data/{}", kind.as_str()))))
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn report_url(&self, report_id: &str) -> String {
        self.url(&format!("/reports/{}", report_id))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        debug!(url = %response.url(), status = %response.status(), "backend response");

        let response = check_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl Default for ReportsClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl ReportStore for ReportsClient {
    type Error = ClientError;

    async fn save_layout(&self, report_id: &str, layout: &[Element]) -> Result<Report, ClientError> {
        ReportsClient::save_layout(self, report_id, layout).await
    }
}

async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound(detail(&body)));
    }

    Err(ClientError::Status {
        status: status.as_u16(),
        body: detail(&body),
    })
}

// Backend errors arrive as {"detail": "..."}
fn detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
