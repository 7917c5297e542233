//! ERP client port
//!
//! The single surface external collaborators use: a signed raw request, the
//! SuiteQL executor, and record helpers layered on top of the raw request.

use async_trait::async_trait;
use serde_json::Value;
use suitelink_domain::constants::RECORD_PATH;
use suitelink_domain::{
    HttpMethod, ListParams, QueryOptions, QueryOutcome, Result, SuiteLinkError,
};

/// Trait for ERP client operations
#[async_trait]
pub trait ErpClient: Send + Sync {
    /// Perform one signed request.
    ///
    /// `path` is relative to the account base URL (or absolute). `query`
    /// pairs are appended before signing. Returns the parsed JSON body, or
    /// `Value::Null` for an empty 2xx body.
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        query: &[(String, String)],
    ) -> Result<Value>;

    /// Execute a SuiteQL query and return the accumulated items.
    async fn execute_query(&self, query: &str, options: &QueryOptions) -> Result<QueryOutcome>;

    /// Execute a SuiteQL query following every page.
    async fn query_all(&self, query: &str) -> Result<QueryOutcome> {
        self.execute_query(query, &QueryOptions::default()).await
    }

    /// `GET /record/v1/<type>/<id>`
    async fn get_record(&self, record_type: &str, id: &str) -> Result<Value> {
        let path = record_path(record_type, Some(id))?;
        self.request(HttpMethod::Get, &path, None, &[]).await
    }

    /// `GET /record/v1/<type>?limit=&offset=&q=`
    async fn list_records(&self, record_type: &str, params: &ListParams) -> Result<Value> {
        let path = record_path(record_type, None)?;
        self.request(HttpMethod::Get, &path, None, &params.to_query()).await
    }

    /// `POST /record/v1/<type>`
    async fn create_record(&self, record_type: &str, body: &Value) -> Result<Value> {
        let path = record_path(record_type, None)?;
        self.request(HttpMethod::Post, &path, Some(body), &[]).await
    }

    /// `PATCH /record/v1/<type>/<id>`
    async fn update_record(&self, record_type: &str, id: &str, body: &Value) -> Result<Value> {
        let path = record_path(record_type, Some(id))?;
        self.request(HttpMethod::Patch, &path, Some(body), &[]).await
    }

    /// `DELETE /record/v1/<type>/<id>`
    async fn delete_record(&self, record_type: &str, id: &str) -> Result<Value> {
        let path = record_path(record_type, Some(id))?;
        self.request(HttpMethod::Delete, &path, None, &[]).await
    }
}

/// Build a record endpoint path with percent-encoded segments.
pub fn record_path(record_type: &str, id: Option<&str>) -> Result<String> {
    let record_type = non_empty_segment("record type", record_type)?;
    let mut path = format!("{RECORD_PATH}/{}", urlencoding::encode(record_type));

    if let Some(id) = id {
        let id = non_empty_segment("record id", id)?;
        path.push('/');
        path.push_str(&urlencoding::encode(id));
    }

    Ok(path)
}

fn non_empty_segment<'a>(what: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SuiteLinkError::InvalidInput(format!("{what} must not be empty")));
    }
    Ok(value)
}
