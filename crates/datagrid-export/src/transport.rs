//! Delivery of finished documents to the caller's response stream.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Cookie set alongside a download so host pages can detect completion.
pub const DOWNLOAD_COOKIE: &str = "datagrid.download";

/// Response metadata configured before a download body is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadMetadata {
    /// Full output filename, extension included.
    pub filename: String,
    /// MIME type of the body.
    pub content_type: String,
    /// `Expires` header value.
    pub expires: String,
    /// `Cache-Control` header value.
    pub cache_control: String,
    /// `Pragma` header value.
    pub pragma: String,
    /// `Content-Disposition` header value.
    pub content_disposition: String,
    /// Delivery-marker cookie name/value pair.
    pub cookie: (String, String),
}

impl DownloadMetadata {
    /// Attachment disposition with the caching headers a one-shot download
    /// response carries.
    pub fn attachment(filename: &str, content_type: &str) -> Self {
        Self {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            expires: "0".to_string(),
            cache_control: "must-revalidate, post-check=0, pre-check=0".to_string(),
            pragma: "public".to_string(),
            content_disposition: format!("attachment; filename=\"{filename}\""),
            cookie: (DOWNLOAD_COOKIE.to_string(), "true".to_string()),
        }
    }
}

/// Transport collaborator delivering a finished document as a file
/// download.
///
/// Metadata is configured before assembly starts; the body is written once,
/// after the whole document has been assembled. There are no retries.
pub trait Transport {
    /// Configure response metadata for the upcoming download.
    fn configure_download(&mut self, metadata: DownloadMetadata) -> io::Result<()>;

    /// Deliver the encoded document body.
    fn write_body(&mut self, body: &[u8]) -> io::Result<()>;
}

/// Captures the configured metadata and delivered body in memory.
///
/// Suited to hosts that buffer the response themselves, and to tests.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    /// Metadata from the last `configure_download` call.
    pub metadata: Option<DownloadMetadata>,
    /// Body from the last `write_body` call.
    pub body: Option<Vec<u8>>,
}

impl MemoryTransport {
    /// Create an empty capture.
    pub fn new() -> Self {
        Self::default()
    }

    /// The delivered body as text, when one was written.
    pub fn body_text(&self) -> Option<String> {
        self.body
            .as_ref()
            .map(|body| String::from_utf8_lossy(body).into_owned())
    }
}

impl Transport for MemoryTransport {
    fn configure_download(&mut self, metadata: DownloadMetadata) -> io::Result<()> {
        self.metadata = Some(metadata);
        Ok(())
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        self.body = Some(body.to_vec());
        Ok(())
    }
}

/// Writes the document body to a file.
///
/// The response metadata has no file-level counterpart; it is recorded for
/// callers that want to inspect it.
#[derive(Debug)]
pub struct FileTransport {
    path: PathBuf,
    metadata: Option<DownloadMetadata>,
}

impl FileTransport {
    /// Transport writing to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            metadata: None,
        }
    }

    /// Metadata recorded by `configure_download`, when it ran.
    pub fn metadata(&self) -> Option<&DownloadMetadata> {
        self.metadata.as_ref()
    }
}

impl Transport for FileTransport {
    fn configure_download(&mut self, metadata: DownloadMetadata) -> io::Result<()> {
        self.metadata = Some(metadata);
        Ok(())
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        let mut file = File::create(&self.path)?;
        file.write_all(body)?;
        file.flush()
    }
}
