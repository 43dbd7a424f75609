//! Attachment archiver.
//!
//! Saves every attachment of a message under the media directory. Each attachment
//! is fetched and written independently; a failure is logged and the remaining
//! attachments still run.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use chrono::NaiveDate;

use crate::{
    error::transport::TransportError,
    model::message::{MessageAttachment, MessageEvent},
    service::transport::Transport,
};

pub struct AttachmentArchiver {
    media_dir: PathBuf,
    fetch_timeout: Duration,
}

impl AttachmentArchiver {
    /// Creates an archiver writing into `media_dir`.
    ///
    /// # Arguments
    /// - `media_dir` - Directory receiving archived files, created on demand
    /// - `fetch_timeout` - Bound on fetching one attachment; the file write is not bounded
    pub fn new(media_dir: PathBuf, fetch_timeout: Duration) -> Self {
        Self {
            media_dir,
            fetch_timeout,
        }
    }

    /// Archives all attachments of a message.
    ///
    /// # Arguments
    /// - `event` - Message whose attachments are saved
    /// - `transport` - Source of attachment bytes
    /// - `date` - Date stamped into the file names
    ///
    /// # Returns
    /// - `Vec<PathBuf>` - Paths written, in attachment order; failed attachments are omitted
    pub async fn archive(
        &self,
        event: &MessageEvent,
        transport: &dyn Transport,
        date: NaiveDate,
    ) -> Vec<PathBuf> {
        if event.attachments.is_empty() {
            return Vec::new();
        }

        if let Err(e) = tokio::fs::create_dir_all(&self.media_dir).await {
            tracing::error!(
                "Error creating media directory {}: {}",
                self.media_dir.display(),
                e
            );
            return Vec::new();
        }

        let mut saved = Vec::with_capacity(event.attachments.len());

        for (index, attachment) in event.attachments.iter().enumerate() {
            let path = self.media_dir.join(archive_file_name(
                &event.author.tag,
                date,
                event.message_id,
                index,
                &attachment.filename,
            ));

            match self.save(attachment, &path, transport).await {
                Ok(()) => {
                    tracing::info!(
                        target: "attachment",
                        "Downloaded attachment to {}",
                        path.display()
                    );
                    saved.push(path);
                }
                Err(e) => {
                    tracing::error!(
                        "Error downloading attachment {}: {}",
                        attachment.filename,
                        e
                    );
                }
            }
        }

        saved
    }

    async fn save(
        &self,
        attachment: &MessageAttachment,
        path: &Path,
        transport: &dyn Transport,
    ) -> Result<(), TransportError> {
        // Only the fetch is bounded; a started write always runs to completion.
        let fetch = transport.fetch_content(&attachment.url);
        let bytes = tokio::time::timeout(self.fetch_timeout, fetch)
            .await
            .map_err(|_| TransportError::Timeout {
                operation: attachment.url.clone(),
                seconds: self.fetch_timeout.as_secs(),
            })??;

        tokio::fs::write(path, bytes).await?;

        Ok(())
    }
}

/// Builds `{author}-{YYYY-MM-DD}-{message_id}-{index}-{base}{.ext}` for an attachment.
///
/// The message ID and attachment position keep names unique across messages and
/// within one message. Characters outside `[A-Za-z0-9._-]` in the author and the
/// original file name are replaced with `_`.
pub fn archive_file_name(
    author: &str,
    date: NaiveDate,
    message_id: u64,
    index: usize,
    filename: &str,
) -> String {
    let sanitized = sanitize(filename);
    let path = Path::new(&sanitized);

    let base = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    format!(
        "{}-{}-{}-{}-{}{}",
        sanitize(author),
        date.format("%Y-%m-%d"),
        message_id,
        index,
        base,
        extension
    )
}

fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
