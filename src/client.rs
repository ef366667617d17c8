//! Blocking client for the sample service
//!
//! Every operation builds a [`Request`], dispatches it on the shared
//! [`HttpClient`] and waits for the result before returning. Transport
//! failure, a non-200 status and an empty body are reported as distinct
//! [`ClientError`] variants; nothing is retried.

use std::path::Path;

use indexmap::IndexMap;
use reqwest::header::ACCEPT;
use tokio::runtime::{Builder, Runtime};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::http::request::MULTIPART_FORM_DATA;
use crate::http::{HttpClient, HttpMethod, MultipartBody, Request, Response};
use crate::json;
use crate::utils::{FileUtils, UrlUtils};

const UPLOAD_CONTENT_TYPE: &str = "application/pdf";

/// Client for the sample service endpoints
///
/// Owns one transport and one runtime for its whole lifetime; both are
/// reused by every call.
#[derive(Debug)]
pub struct SampleServiceClient {
    config: ClientConfig,
    http: HttpClient,
    runtime: Runtime,
}

impl SampleServiceClient {
    /// Client with default settings for `base_url`.
    ///
    /// The URL is not checked here; a malformed one fails each call with
    /// [`ClientError::InvalidUrl`].
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::new(&config)?;
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            config,
            http,
            runtime,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET {base}/some/search/?someId={id}`; returns the response body.
    pub fn get(&self, id: &str) -> Result<String> {
        let request = self.build_get(id);
        self.dispatch(request)?.into_body()
    }

    /// `DELETE {base}some/{id}`; returns a confirmation naming `id`, not the body.
    pub fn delete(&self, id: &str) -> Result<String> {
        let request = self.build_delete(id);
        self.dispatch(request)?.into_body()?;
        Ok(format!("Deleted {} successfully", id))
    }

    /// `POST {base}some/post` with `{"someKey": key}`; returns the response body.
    pub fn post_json(&self, key: &str) -> Result<String> {
        let request = self.build_post_json(key);
        self.dispatch(request)?.into_body()
    }

    /// `POST {base}resume/upload` with the file as multipart form data;
    /// returns the response body.
    ///
    /// The file is read completely before anything is sent. A missing or
    /// unreadable file fails with [`ClientError::Io`] and no request is made.
    pub fn post_multipart(&self, file_path: impl AsRef<Path>) -> Result<String> {
        let request = self.build_post_multipart(file_path.as_ref())?;
        self.dispatch(request)?.into_body()
    }

    pub fn build_get(&self, id: &str) -> Request {
        Request::new(
            HttpMethod::Get,
            self.endpoint(&format!("/some/search/?someId={}", id)),
        )
    }

    pub fn build_delete(&self, id: &str) -> Request {
        Request::new(HttpMethod::Delete, self.endpoint(&format!("some/{}", id)))
    }

    pub fn build_post_json(&self, key: &str) -> Request {
        let mut body = IndexMap::new();
        body.insert("someKey".to_string(), key);
        Request::new(HttpMethod::Post, self.endpoint("some/post"))
            .json_body(json::mapping_to_json(&body))
    }

    pub fn build_post_multipart(&self, file_path: &Path) -> Result<Request> {
        let file_name = FileUtils::file_name(file_path)?;
        let bytes = FileUtils::read_all(file_path)?;
        let body = MultipartBody::new().text("hogePart", "hoge").file(
            "file",
            file_name,
            UPLOAD_CONTENT_TYPE,
            bytes,
        );

        let mut request = Request::new(HttpMethod::Post, self.endpoint("resume/upload"));
        request.set_header(ACCEPT, MULTIPART_FORM_DATA);
        Ok(request.multipart_body(body))
    }

    fn endpoint(&self, path: &str) -> String {
        UrlUtils::join(&self.config.base_url, path)
    }

    fn dispatch(&self, request: Request) -> Result<Response> {
        self.runtime.block_on(self.http.execute(request))
    }
}

impl TryFrom<ClientConfig> for SampleServiceClient {
    type Error = ClientError;

    fn try_from(config: ClientConfig) -> Result<Self> {
        Self::with_config(config)
    }
}
