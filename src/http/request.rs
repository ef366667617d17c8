//! HTTP request description
//!
//! A `Request` is plain data: method, absolute URL, ordered headers and an
//! optional body. It is built per call by the client and consumed by
//! [`HttpClient::execute`](super::HttpClient::execute).

use std::fmt;

use reqwest::header::{ACCEPT, ACCEPT_CHARSET, CONTENT_TYPE};

pub const APPLICATION_JSON: &str = "application/json";
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// HTTP methods used by the sample service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Delete,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Post => "POST",
        };
        write!(f, "{}", method)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// One part of a `multipart/form-data` body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

/// Multipart body; the boundary is generated by the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartBody {
    pub parts: Vec<FormPart>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Serialized JSON document, sent as UTF-8
    Json(String),
    Multipart(MultipartBody),
}

/// A single outgoing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl Request {
    /// Create a request carrying the standard headers.
    ///
    /// Headers every call needs (e.g. an `Authorization: Bearer ...` token)
    /// belong in `add_default_headers`.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        let mut request = Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        };
        request.add_default_headers();
        request
    }

    fn add_default_headers(&mut self) {
        self.set_header(ACCEPT, APPLICATION_JSON);
        self.set_header(ACCEPT_CHARSET, "utf-8");
    }

    /// Set a header, replacing any existing value with the same name.
    /// Names compare case-insensitively; position of the first occurrence is kept.
    pub fn set_header(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        let name = name.as_ref();
        let value = value.into();
        match self
            .headers
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some(index) => {
                self.headers[index].1 = value;
                let mut position = 0;
                self.headers.retain(|(key, _)| {
                    let keep = position <= index || !key.eq_ignore_ascii_case(name);
                    position += 1;
                    keep
                });
            }
            None => self.headers.push((name.to_string(), value)),
        }
    }

    pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
        let name = name.as_ref();
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Attach a JSON body and the matching `Content-Type`
    pub fn json_body(mut self, json: String) -> Self {
        self.set_header(CONTENT_TYPE, APPLICATION_JSON);
        self.body = Some(RequestBody::Json(json));
        self
    }

    /// Attach a multipart body; `Content-Type` and boundary come from the transport.
    pub fn multipart_body(mut self, body: MultipartBody) -> Self {
        self.body = Some(RequestBody::Multipart(body));
        self
    }
}
