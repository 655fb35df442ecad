//! HTTP controllers
//!
//! Controllers accept a neutral request, drive their use case, and shape a
//! neutral response. They are the only place domain errors become HTTP
//! statuses; whatever they return as `Err` is the transport boundary's 500.

pub mod projects;

pub use projects::*;

use async_trait::async_trait;

use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};

/// A single HTTP operation over neutral request and response shapes
#[async_trait]
pub trait HttpController: Send + Sync {
    async fn handle(&self, request: HttpRequest) -> Result<HttpResponse>;
}
