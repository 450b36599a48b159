//! Client for the remote `/Issues` resource.
//!
//! Pure transport: one request per call, no retries, no caching. Every
//! failure, including a non-2xx status, surfaces as [`TransportError`].

use async_trait::async_trait;

use crate::error::TransportError;
use crate::models::{Issue, IssueDraft, IssueId};
use crate::traits::{Headers, HttpClient, Response};

/// Path of the issues collection, relative to the API base URL.
pub const ISSUES_PATH: &str = "/Issues";

/// CRUD operations against the remote issue collection.
#[async_trait]
pub trait IssueRepository: Send + Sync {
    /// All issues, in the order the backend returns them.
    async fn list(&self) -> Result<Vec<Issue>, TransportError>;

    /// Create an issue from `draft`; the backend assigns id and timestamps.
    async fn create(&self, draft: &IssueDraft) -> Result<Issue, TransportError>;

    /// Replace issue `id`. Returns the stored issue, or `None` when the
    /// backend answers with an empty body.
    async fn update(&self, id: &IssueId, issue: &Issue) -> Result<Option<Issue>, TransportError>;

    async fn delete(&self, id: &IssueId) -> Result<(), TransportError>;
}

/// [`IssueRepository`] speaking JSON over an [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpIssueRepository<C> {
    base_url: String,
    client: C,
}

impl<C: HttpClient> HttpIssueRepository<C> {
    /// Create a repository rooted at `base_url` (for example
    /// `http://localhost:5255/api`). A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, ISSUES_PATH)
    }

    fn item_url(&self, id: &IssueId) -> String {
        let segment = id.to_string();
        format!(
            "{}{}/{}",
            self.base_url,
            ISSUES_PATH,
            urlencoding::encode(&segment)
        )
    }

    fn json_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers
    }

    /// Turn a non-2xx response into a [`TransportError::Status`].
    fn check(response: Response) -> Result<Response, TransportError> {
        if response.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .unwrap_or_default()
            .trim()
            .to_string();
        Err(TransportError::Status {
            status: response.status,
            message,
        })
    }
}

#[async_trait]
impl<C: HttpClient> IssueRepository for HttpIssueRepository<C> {
    async fn list(&self) -> Result<Vec<Issue>, TransportError> {
        let url = self.collection_url();
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url, &Self::json_headers()).await?;
        let issues: Vec<Issue> = Self::check(response)?.json()?;

        tracing::debug!("Listed {} issues", issues.len());
        Ok(issues)
    }

    async fn create(&self, draft: &IssueDraft) -> Result<Issue, TransportError> {
        let url = self.collection_url();
        let body = serde_json::to_string(draft)?;
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url, &body, &Self::json_headers()).await?;
        let issue: Issue = Self::check(response)?.json()?;

        tracing::debug!("Created issue {}", issue.id);
        Ok(issue)
    }

    async fn update(&self, id: &IssueId, issue: &Issue) -> Result<Option<Issue>, TransportError> {
        let url = self.item_url(id);
        let body = serde_json::to_string(issue)?;
        tracing::debug!("PUT {}", url);

        let response = Self::check(self.client.put(&url, &body, &Self::json_headers()).await?)?;
        if response.is_body_empty() {
            return Ok(None);
        }
        Ok(Some(response.json()?))
    }

    async fn delete(&self, id: &IssueId) -> Result<(), TransportError> {
        let url = self.item_url(id);
        tracing::debug!("DELETE {}", url);

        Self::check(self.client.delete(&url, &Self::json_headers()).await?)?;
        Ok(())
    }
}
