//! Command handlers. Each returns the text to print on success.

use crate::cli::Commands;
use crate::error::DocdeskError;
use crate::router::{RouteTable, View};
use crate::views::{render_document_list, render_json};

use client_core::DocumentClient;

use common::ErrorLocation;
use models::{UploadPayload, UploadPayloadBuilder, UploadPolicy};

use std::panic::Location;
use std::path::Path;

use log::{debug, info};

pub async fn execute(
    command: &Commands,
    client: &DocumentClient,
    routes: &RouteTable,
    json: bool,
) -> Result<String, DocdeskError> {
    match command {
        Commands::Upload { path, no_check } => {
            let payload = read_payload(path).await?;

            if !no_check {
                UploadPolicy::default().check(&payload)?;
            }

            info!("Uploading {} ({} bytes)", payload.file_name, payload.len());
            let reply = client.upload_document(payload).await?;
            render_json(&reply)
        }
        Commands::List => {
            let reply = client.get_documents().await?;
            render_json(&reply)
        }
        Commands::Analyze { id } => {
            info!("Requesting detection for document {id}");
            let reply = client.analyze_document(id).await?;
            render_json(&reply)
        }
        Commands::Delete { id } => {
            info!("Deleting document {id}");
            let reply = client.delete_document(id).await?;
            render_json(&reply)
        }
        Commands::Open { path } => {
            let route = routes.resolve(path).ok_or_else(|| DocdeskError::NoRoute {
                path: path.clone(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            debug!("Resolved {path} to route {}", route.name);

            match route.view {
                View::DocumentList => {
                    let listing = client.get_documents().await?;
                    if json {
                        render_json(&listing)
                    } else {
                        render_document_list(listing)
                    }
                }
            }
        }
    }
}

/// Read a file from disk into an upload payload named after the file.
pub async fn read_payload(path: &Path) -> Result<UploadPayload, DocdeskError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| DocdeskError::docdesk(format!("Not a file path: {}", path.display())))?;

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        DocdeskError::docdesk(format!("Failed to read {}: {e}", path.display()))
    })?;

    Ok(UploadPayloadBuilder::default()
        .with_file_name(file_name)
        .with_bytes(bytes)
        .build()?)
}
