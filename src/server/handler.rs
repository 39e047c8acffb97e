//! Turns a parsed request into a response.

use tracing::{debug, error};

use crate::config::ServerConfig;
use crate::error::Result;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::server::content;
use crate::server::resolver::{DocumentRoot, Resolution};

const NOT_FOUND_BODY: &[u8] = b"File not found";
const FORBIDDEN_BODY: &[u8] = b"Forbidden";

/// Handler selected by the request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Get,
    Head,
    Other,
}

impl Route {
    /// Exact, case-sensitive match on the method token.
    pub fn for_method(method: &Method) -> Self {
        match method {
            Method::GET => Route::Get,
            Method::HEAD => Route::Head,
            Method::Other(_) => Route::Other,
        }
    }
}

/// Builds responses for one server instance.
#[derive(Debug, Clone)]
pub struct Responder {
    root: DocumentRoot,
    host: String,
    server_name: String,
}

impl Responder {
    pub fn new(root: DocumentRoot, host: impl Into<String>, server_name: impl Into<String>) -> Self {
        Self {
            root,
            host: host.into(),
            server_name: server_name.into(),
        }
    }

    pub fn from_config(cfg: &ServerConfig) -> Self {
        Self::new(
            DocumentRoot::new(cfg.document_root.clone()),
            cfg.host.clone(),
            cfg.server_name.clone(),
        )
    }

    /// Responds to a request. Never fails: any error raised while handling
    /// the request becomes a bodiless 500.
    pub async fn respond(&self, req: &Request) -> Response {
        match self.dispatch(req).await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    method = %req.method,
                    path = %req.path,
                    error = %e,
                    "Request handling failed"
                );
                self.builder(StatusCode::InternalServerError).build()
            }
        }
    }

    async fn dispatch(&self, req: &Request) -> Result<Response> {
        let route = Route::for_method(&req.method);
        debug!(method = %req.method, path = %req.path, ?route, "Dispatching request");

        match route {
            Route::Get => self.get(&req.path).await,
            Route::Head => self.head(&req.path).await,
            Route::Other => Ok(self.builder(StatusCode::NotImplemented).build()),
        }
    }

    async fn get(&self, target: &str) -> Result<Response> {
        let response = match self.root.resolve(target).await? {
            Resolution::Found(path) => {
                let body = content::load(&path).await?;
                self.builder(StatusCode::Ok).body(body).build()
            }
            Resolution::Missing(_) => self
                .builder(StatusCode::NotFound)
                .body(NOT_FOUND_BODY.to_vec())
                .build(),
            Resolution::Forbidden(_) => self
                .builder(StatusCode::Forbidden)
                .body(FORBIDDEN_BODY.to_vec())
                .build(),
        };

        Ok(response)
    }

    async fn head(&self, target: &str) -> Result<Response> {
        let status = match self.root.resolve(target).await? {
            Resolution::Found(_) => StatusCode::Ok,
            Resolution::Missing(_) => StatusCode::NotFound,
            Resolution::Forbidden(_) => StatusCode::Forbidden,
        };

        Ok(self.builder(status).build())
    }

    fn builder(&self, status: StatusCode) -> ResponseBuilder {
        ResponseBuilder::standard(status, &self.host, &self.server_name)
    }
}
