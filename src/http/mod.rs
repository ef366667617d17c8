//! HTTP client module
//!
//! This module provides the transport used by the sample service client:
//! one long-lived `reqwest::Client` that turns a [`Request`] into a
//! [`Response`].

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::utils::UrlUtils;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, ClientBuilder};

pub mod request;
pub mod response;

pub use request::{FormPart, HttpMethod, MultipartBody, Request, RequestBody};
pub use response::Response;

/// HTTP client wrapper
///
/// Built once and reused for every call so connections are pooled instead of
/// being set up per request.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new();

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        let client = builder.build().map_err(ClientError::Transport)?;

        Ok(Self { client })
    }

    /// Execute a request and read the whole response body as text
    pub async fn execute(&self, request: Request) -> Result<Response> {
        let url = UrlUtils::validate_url(&request.url)?;
        log::debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method.into(), url);

        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        builder = match request.body {
            Some(RequestBody::Json(json)) => builder.body(json),
            Some(RequestBody::Multipart(body)) => builder.multipart(build_form(body)?),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| {
            log::error!("Request failed: {}", e);
            ClientError::Transport(e)
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(ClientError::Transport)?;
        log::debug!("Response status {} ({} bytes)", status, body.len());

        Ok(Response { status, body })
    }
}

/// Convert a multipart description into a reqwest form.
///
/// File names are written as raw UTF-8 inside `filename="..."`; the default
/// percent encoding would turn `résumé.pdf` into `r%C3%A9sum%C3%A9.pdf`.
fn build_form(body: MultipartBody) -> Result<Form> {
    let mut form = Form::new().percent_encode_noop();

    for part in body.parts {
        form = match part {
            FormPart::Text { name, value } => {
                let part = Part::text(value)
                    .mime_str("text/plain; charset=utf-8")
                    .map_err(|e| ClientError::Config(format!("Invalid MIME type: {}", e)))?;
                form.part(name, part)
            }
            FormPart::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(reqwest::header::CONTENT_LENGTH, bytes.len().into());
                let part = Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&content_type)
                    .map_err(|e| ClientError::Config(format!("Invalid MIME type: {}", e)))?
                    .headers(headers);
                form.part(name, part)
            }
        };
    }

    Ok(form)
}
