//! Request routing.
//!
//! # Routes
//!
//! Evaluated in order, first match wins:
//!
//! | Match               | Behavior                                   |
//! |---------------------|--------------------------------------------|
//! | exact `/`           | 200, empty body                            |
//! | prefix `/echo`      | last path segment as `text/plain`, gzip if negotiated |
//! | prefix `/user-agent`| request `User-Agent` as `text/plain`       |
//! | prefix `/files`     | POST writes the body, anything else reads  |
//! | anything else       | 404                                        |
//!
//! Failures never escape as errors: a malformed request becomes 400, a
//! missing file 404, and a failed write or compression 500.

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ServerConfig;
use crate::http::encoding::EncodingError;
use crate::http::parser::parse_http_request;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::store::{FileStore, StoreError};

const TEXT_PLAIN: &str = "text/plain";
const OCTET_STREAM: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// How a route compares itself against the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMatch {
    Exact(&'static str),
    Prefix(&'static str),
}

impl PathMatch {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathMatch::Exact(p) => path == *p,
            PathMatch::Prefix(p) => path.starts_with(p),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Root,
    Echo,
    UserAgent,
    Files,
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub matcher: PathMatch,
    pub kind: RouteKind,
}

const ROUTES: [Route; 4] = [
    Route { matcher: PathMatch::Exact("/"), kind: RouteKind::Root },
    Route { matcher: PathMatch::Prefix("/echo"), kind: RouteKind::Echo },
    Route { matcher: PathMatch::Prefix("/user-agent"), kind: RouteKind::UserAgent },
    Route { matcher: PathMatch::Prefix("/files"), kind: RouteKind::Files },
];

pub struct Router {
    routes: Vec<Route>,
    store: FileStore,
}

impl Router {
    pub fn new(cfg: &ServerConfig) -> Self {
        Self::with_store(FileStore::new(cfg.files_directory.clone()))
    }

    pub fn with_store(store: FileStore) -> Self {
        Self {
            routes: ROUTES.to_vec(),
            store,
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the first route matching `path`.
    pub fn route(&self, path: &str) -> Option<RouteKind> {
        self.routes
            .iter()
            .find(|r| r.matcher.matches(path))
            .map(|r| r.kind)
    }

    /// Decodes `buf` and handles it. A malformed request yields 400.
    pub fn handle_bytes(&self, buf: &[u8]) -> Response {
        match parse_http_request(buf) {
            Ok(request) => self.handle(&request),
            Err(e) => {
                warn!(error = %e, "Rejecting malformed request");
                Response::bad_request()
            }
        }
    }

    pub fn handle(&self, req: &Request) -> Response {
        let response = match self.dispatch(req) {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    error = %e,
                    method = %req.method(),
                    path = %req.path(),
                    "Request handling failed"
                );
                Response::internal_error()
            }
        };

        debug!(
            method = %req.method(),
            path = %req.path(),
            status = response.status.as_u16(),
            bytes = response.content_length(),
            "Request routed"
        );

        response
    }

    fn dispatch(&self, req: &Request) -> Result<Response, HandlerError> {
        let Some(kind) = self.route(req.path()) else {
            return Ok(Response::not_found());
        };

        match kind {
            RouteKind::Root => Ok(Response::ok()),
            RouteKind::Echo => echo(req),
            RouteKind::UserAgent => Ok(user_agent(req)),
            RouteKind::Files => self.files(req),
        }
    }

    fn files(&self, req: &Request) -> Result<Response, HandlerError> {
        let filename = last_segment(req.path());

        if *req.method() == Method::POST {
            self.store.write(filename, &req.body)?;
            return Ok(Response::created());
        }

        match self.store.read(filename) {
            Ok(contents) => Ok(ResponseBuilder::new(StatusCode::Ok)
                .content_type(OCTET_STREAM)
                .body(contents)
                .build()),
            Err(e) => {
                debug!(error = %e, "File read failed");
                Ok(Response::not_found())
            }
        }
    }
}

fn echo(req: &Request) -> Result<Response, HandlerError> {
    let payload = last_segment(req.path()).as_bytes();
    let builder = ResponseBuilder::new(StatusCode::Ok).content_type(TEXT_PLAIN);

    let response = match req.headers.accept_encoding {
        Some(encoding) => builder
            .content_encoding(encoding)
            .body(encoding.encode(payload)?)
            .build(),
        None => builder.body(payload).build(),
    };

    Ok(response)
}

fn user_agent(req: &Request) -> Response {
    let agent = req.headers.user_agent.clone().unwrap_or_default();

    ResponseBuilder::new(StatusCode::Ok)
        .content_type(TEXT_PLAIN)
        .user_agent(agent.clone())
        .body(agent)
        .build()
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}
