//! Route table mapping methods and path patterns to controllers
//!
//! Patterns are literal segments with `:name` marking a path parameter, so
//! `/projects/:id` matches `/projects/abc` and hands the controller
//! `id = "abc"`. First registered match wins.

use std::collections::HashMap;
use std::sync::Arc;

use projectboard_core::application::projects::{
    CreateProjectUseCase, DeleteProjectUseCase, FindProjectUseCase, ListProjectsUseCase,
    UpdateProjectUseCase,
};
use projectboard_core::controllers::{
    DeleteProjectController, GetAllProjectsController, GetProjectByIdController, HttpController,
    PostProjectController, PutProjectController,
};
use projectboard_core::domain::projects::ProjectRepository;

enum Segment {
    Literal(String),
    Param(String),
}

struct Route {
    method: String,
    segments: Vec<Segment>,
    controller: Box<dyn HttpController>,
}

/// Method and path-pattern table resolving requests to controllers
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `controller` for `method` and `pattern`
    pub fn route(
        mut self,
        method: &str,
        pattern: &str,
        controller: Box<dyn HttpController>,
    ) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();

        self.routes.push(Route {
            method: method.to_string(),
            segments,
            controller,
        });
        self
    }

    /// Find the controller for `method` and `path`, extracting path params
    ///
    /// `path` must already be stripped of any base prefix and query string.
    /// Segments are percent-decoded before matching, so an encoded id
    /// reaches its controller in decoded form.
    pub fn resolve(
        &self,
        method: &str,
        path: &str,
    ) -> Option<(&dyn HttpController, HashMap<String, String>)> {
        let parts: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(decode_component)
            .collect();

        self.routes.iter().find_map(|route| {
            if route.method != method || route.segments.len() != parts.len() {
                return None;
            }

            let mut params = HashMap::new();
            for (segment, part) in route.segments.iter().zip(&parts) {
                match segment {
                    Segment::Literal(literal) if literal == part => {}
                    Segment::Literal(_) => return None,
                    Segment::Param(name) => {
                        params.insert(name.clone(), part.clone());
                    }
                }
            }

            Some((route.controller.as_ref(), params))
        })
    }
}

/// Percent-decode one path or query component
///
/// Malformed escapes and non-UTF-8 results leave the component as received.
pub(crate) fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Wire the project routes against `repository`
///
/// The composition root: the shared store is handed to each use case here
/// and nowhere else.
pub fn api_router(repository: Arc<dyn ProjectRepository>) -> Router {
    Router::new()
        .route(
            "POST",
            "/projects",
            Box::new(PostProjectController::new(CreateProjectUseCase::new(
                repository.clone(),
            ))),
        )
        .route(
            "GET",
            "/projects",
            Box::new(GetAllProjectsController::new(ListProjectsUseCase::new(
                repository.clone(),
            ))),
        )
        .route(
            "GET",
            "/projects/:id",
            Box::new(GetProjectByIdController::new(FindProjectUseCase::new(
                repository.clone(),
            ))),
        )
        .route(
            "PUT",
            "/projects/:id",
            Box::new(PutProjectController::new(UpdateProjectUseCase::new(
                repository.clone(),
            ))),
        )
        .route(
            "DELETE",
            "/projects/:id",
            Box::new(DeleteProjectController::new(DeleteProjectUseCase::new(
                repository,
            ))),
        )
}
