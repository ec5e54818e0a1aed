//! Project methods for the API client.

use anyhow::Result;
use vidpipe_core::models::{Project, ProjectListResponse};

use crate::ApiClient;

impl ApiClient {
    /// List projects with pagination.
    pub async fn list_projects(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<ProjectListResponse> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(l) = limit {
            query.push(("limit", l.to_string()));
        }
        if let Some(o) = offset {
            query.push(("offset", o.to_string()));
        }

        self.get(&self.path("/projects"), &query).await
    }

    /// Get a single project, including its videos.
    pub async fn get_project(&self, project_id: &str) -> Result<Project> {
        self.get(
            &self.path(&format!("/projects/{}", urlencoding::encode(project_id))),
            &[],
        )
        .await
    }
}
