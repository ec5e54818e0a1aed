//! [`ProjectStore`] over HTTP.
//!
//! File bytes are streamed in `chunk_size` pieces. Each piece handed to the
//! connection reports a percentage on a channel, which the awaiting task
//! drains and relays to the caller's callback.

use async_trait::async_trait;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use reqwest::multipart::{Form, Part};
use tokio::sync::mpsc;

use vidpipe_core::models::{FileContent, Project, TaggedProjectRequest, Video};
use vidpipe_core::store::{ProgressFn, ProjectStore, StoreError};

use crate::ApiClient;

/// Chunk stream that reports how much of `data` has been handed off.
fn progress_stream(
    data: Bytes,
    chunk_size: usize,
    tx: mpsc::UnboundedSender<u8>,
) -> impl Stream<Item = Result<Bytes, std::io::Error>> + Send + Sync + 'static {
    let total = data.len() as u64;
    let chunk_size = chunk_size.max(1);
    let chunks: Vec<Bytes> = (0..data.len())
        .step_by(chunk_size)
        .map(|start| data.slice(start..(start + chunk_size).min(data.len())))
        .collect();

    let mut sent: u64 = 0;
    futures::stream::iter(chunks).map(move |chunk| {
        sent += chunk.len() as u64;
        // Receiver may already be gone if the request failed early.
        let _ = tx.send((sent * 100 / total) as u8);
        Ok(chunk)
    })
}

fn file_part(file: &FileContent, body: reqwest::Body) -> anyhow::Result<Part> {
    Part::stream_with_length(body, file.bytes.len() as u64)
        .file_name(file.filename.clone())
        .mime_str(&file.declared_mime_type)
        .map_err(|e| anyhow::anyhow!("Invalid file content type: {}", e))
}

#[async_trait]
impl ProjectStore for ApiClient {
    async fn transfer_file(
        &self,
        project_id: &str,
        file: &FileContent,
        on_progress: ProgressFn<'_>,
    ) -> Result<Video, StoreError> {
        tracing::debug!(
            project_id = %project_id,
            filename = %file.filename,
            chunk_size = self.chunk_size(),
            "Streaming file to project API"
        );

        let (tx, mut rx) = mpsc::unbounded_channel();
        let body = reqwest::Body::wrap_stream(progress_stream(
            file.bytes.clone(),
            self.chunk_size(),
            tx,
        ));
        let form = Form::new().part("file", file_part(file, body)?);

        let path = self.path(&format!(
            "/projects/{}/videos",
            urlencoding::encode(project_id)
        ));
        let request = self.post_multipart::<Video>(&path, form);
        tokio::pin!(request);

        loop {
            tokio::select! {
                biased;
                Some(percent) = rx.recv() => on_progress(percent),
                result = &mut request => {
                    while let Ok(percent) = rx.try_recv() {
                        on_progress(percent);
                    }
                    return result.map_err(StoreError::from);
                }
            }
        }
    }

    async fn transfer_remote_url(
        &self,
        project_id: &str,
        url: &str,
    ) -> Result<Video, StoreError> {
        let path = self.path(&format!(
            "/projects/{}/videos/youtube",
            urlencoding::encode(project_id)
        ));
        let body = serde_json::json!({ "url": url });

        Ok(self.post_json(&path, &body).await?)
    }

    async fn create_project_with_attachment(
        &self,
        request: TaggedProjectRequest,
    ) -> Result<Project, StoreError> {
        let path = self.path("/projects");

        let Some(file) = &request.file else {
            return Ok(self.post_json(&path, &request).await?);
        };

        let mut form = Form::new()
            .text("name", request.name.clone())
            .text("type", request.kind.to_string());
        if let Some(description) = &request.description {
            form = form.text("description", description.clone());
        }
        let body = reqwest::Body::from(file.bytes.clone());
        form = form.part("file", file_part(file, body)?);

        Ok(self.post_multipart(&path, form).await?)
    }
}
