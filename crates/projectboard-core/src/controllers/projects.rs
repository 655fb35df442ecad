//! Project controllers
//!
//! One controller per route. Create answers 201, reads and deletes answer
//! 200 or 404, and update answers 201 exactly when the store synthesized a
//! fresh project instead of updating one; equal timestamps are the only
//! signal it gives.

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::application::projects::{
    CreateProjectUseCase, DeleteProjectUseCase, FindProjectUseCase, ListProjectsUseCase,
    UpdateProjectUseCase,
};
use crate::domain::projects::ProjectDraft;
use crate::error::{Error, Result};
use crate::http::{HttpRequest, HttpResponse, HttpStatus, header, http_date};

use super::HttpController;

/// Caller-settable fields accepted from request bodies
///
/// Only these three cross the HTTP boundary; `members` and `issues` are
/// never taken from the wire. `owner_id` keeps null and absent apart: an
/// explicit `"ownerId": null` is a present value meaning "no owner".
#[derive(Debug)]
struct ProjectBody {
    title: Option<String>,
    description: Option<String>,
    owner_id: Option<Option<String>>,
}

impl ProjectBody {
    /// Extract the body fields of `request`
    ///
    /// Fields are read independently, so a malformed value drops that field
    /// alone rather than the whole body; create and update keep having no
    /// failure path.
    fn from_request(request: &HttpRequest) -> Self {
        Self {
            title: string_field(&request.body, "title"),
            description: string_field(&request.body, "description"),
            owner_id: request
                .body
                .get("ownerId")
                .and_then(|value| serde_json::from_value(value.clone()).ok()),
        }
    }

    fn into_draft(self) -> ProjectDraft {
        ProjectDraft {
            title: self.title,
            description: self.description,
            owner_id: self.owner_id,
            ..ProjectDraft::default()
        }
    }
}

/// Read field `name` of `body` as a string; `None` when absent or not one
fn string_field(body: &Value, name: &str) -> Option<String> {
    body.get(name)
        .and_then(|value| serde_json::from_value(value.clone()).ok())
}

/// The `id` path parameter, empty when the router supplied none
fn param_id(request: &HttpRequest) -> String {
    request.params.get("id").cloned().unwrap_or_default()
}

/// 404 response carrying the error's message text verbatim
fn not_found(err: &Error) -> HttpResponse {
    HttpResponse::json(HttpStatus::NotFound, json!({ "message": err.to_string() }))
}

/// POST /projects
pub struct PostProjectController {
    create_project: CreateProjectUseCase,
}

impl PostProjectController {
    pub fn new(create_project: CreateProjectUseCase) -> Self {
        Self { create_project }
    }
}

#[async_trait]
impl HttpController for PostProjectController {
    async fn handle(&self, request: HttpRequest) -> Result<HttpResponse> {
        let draft = ProjectBody::from_request(&request).into_draft();
        let project = self.create_project.execute(draft).await?;
        let last_modified = http_date(project.time_updated);

        Ok(
            HttpResponse::json(HttpStatus::Created, serde_json::to_value(&project)?)
                .with_header(header::LAST_MODIFIED, last_modified),
        )
    }
}

/// GET /projects
pub struct GetAllProjectsController {
    list_projects: ListProjectsUseCase,
}

impl GetAllProjectsController {
    pub fn new(list_projects: ListProjectsUseCase) -> Self {
        Self { list_projects }
    }
}

#[async_trait]
impl HttpController for GetAllProjectsController {
    async fn handle(&self, _request: HttpRequest) -> Result<HttpResponse> {
        let projects = self.list_projects.execute().await?;

        Ok(HttpResponse::json(
            HttpStatus::Ok,
            serde_json::to_value(&projects)?,
        ))
    }
}

/// GET /projects/:id
pub struct GetProjectByIdController {
    find_project: FindProjectUseCase,
}

impl GetProjectByIdController {
    pub fn new(find_project: FindProjectUseCase) -> Self {
        Self { find_project }
    }
}

#[async_trait]
impl HttpController for GetProjectByIdController {
    async fn handle(&self, request: HttpRequest) -> Result<HttpResponse> {
        let id = param_id(&request);

        match self.find_project.execute(&id).await {
            Ok(project) => Ok(HttpResponse::json(
                HttpStatus::Ok,
                serde_json::to_value(&project)?,
            )),
            Err(err @ Error::ProjectNotFound(_)) => Ok(not_found(&err)),
            Err(err) => Err(err),
        }
    }
}

/// PUT /projects/:id
pub struct PutProjectController {
    update_project: UpdateProjectUseCase,
}

impl PutProjectController {
    pub fn new(update_project: UpdateProjectUseCase) -> Self {
        Self { update_project }
    }
}

#[async_trait]
impl HttpController for PutProjectController {
    async fn handle(&self, request: HttpRequest) -> Result<HttpResponse> {
        let id = param_id(&request);
        let draft = ProjectBody::from_request(&request).into_draft();
        let project = self.update_project.execute(&id, draft).await?;

        // Equal timestamps mean the store created this project fresh rather
        // than updating an existing one.
        let status = if project.time_created == project.time_updated {
            HttpStatus::Created
        } else {
            HttpStatus::Ok
        };
        let last_modified = http_date(project.time_updated);

        Ok(HttpResponse::json(status, serde_json::to_value(&project)?)
            .with_header(header::LAST_MODIFIED, last_modified))
    }
}

/// DELETE /projects/:id
pub struct DeleteProjectController {
    delete_project: DeleteProjectUseCase,
}

impl DeleteProjectController {
    pub fn new(delete_project: DeleteProjectUseCase) -> Self {
        Self { delete_project }
    }
}

#[async_trait]
impl HttpController for DeleteProjectController {
    async fn handle(&self, request: HttpRequest) -> Result<HttpResponse> {
        let id = param_id(&request);

        match self.delete_project.execute(&id).await {
            Ok(project) => Ok(HttpResponse::json(
                HttpStatus::Ok,
                serde_json::to_value(&project)?,
            )),
            Err(err @ Error::ProjectNotFound(_)) => Ok(not_found(&err)),
            Err(err) => Err(err),
        }
    }
}
