use bytes::Bytes;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;

use crate::errors::{IdeogramError, IdeogramResult};

/// Default filename for the primary image part.
pub const DEFAULT_IMAGE_FILENAME: &str = "image.png";

/// Default filename for the mask part.
pub const DEFAULT_MASK_FILENAME: &str = "mask.png";

const UNREADABLE_MESSAGE: &str = "Image stream must be readable";

/// Where the bytes of an [`ImageFile`] come from.
pub enum ImageSource {
    /// In-memory bytes.
    Bytes(Bytes),
    /// Any reader; drained once at encode time on the blocking pool.
    Reader(Box<dyn Read + Send + Sync>),
    /// A file read at encode time.
    Path(PathBuf),
}

impl fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            ImageSource::Reader(_) => f.write_str("Reader(..)"),
            ImageSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
        }
    }
}

/// An image byte source with the filename sent alongside it.
///
/// Owned by the request that carries it and consumed when the request is
/// encoded.
#[derive(Debug)]
pub struct ImageFile {
    source: ImageSource,
    filename: Option<String>,
}

impl ImageFile {
    /// Wraps in-memory bytes.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self {
            source: ImageSource::Bytes(bytes.into()),
            filename: None,
        }
    }

    /// Wraps a reader.
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Self {
            source: ImageSource::Reader(Box::new(reader)),
            filename: None,
        }
    }

    /// Refers to a file on disk. The file name becomes the part filename.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string);
        Self {
            source: ImageSource::Path(path),
            filename,
        }
    }

    /// Overrides the filename sent with the part.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Returns the explicit filename, if any.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Returns the byte source.
    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    /// Drains the source.
    ///
    /// Files are read through `tokio::fs`; readers are drained on the blocking
    /// pool. Fails with a validation error tagged `param` when the source
    /// cannot be read. Returns the filename (or `default_filename`) and the
    /// bytes, which may be empty.
    pub(crate) async fn read_all(
        self,
        param: &str,
        default_filename: &str,
    ) -> IdeogramResult<(String, Vec<u8>)> {
        let data = match self.source {
            ImageSource::Bytes(bytes) => bytes.to_vec(),
            ImageSource::Reader(mut reader) => {
                let drained = tokio::task::spawn_blocking(move || {
                    let mut buf = Vec::new();
                    reader.read_to_end(&mut buf).map(|_| buf)
                })
                .await
                .map_err(|e| {
                    tracing::debug!(param, error = %e, "Image reader task failed");
                    IdeogramError::validation_param(UNREADABLE_MESSAGE, param)
                })?;
                drained.map_err(|e| unreadable(param, &e))?
            }
            ImageSource::Path(path) => tokio::fs::read(&path)
                .await
                .map_err(|e| unreadable(param, &e))?,
        };

        let filename = self
            .filename
            .unwrap_or_else(|| default_filename.to_string());
        Ok((filename, data))
    }
}

fn unreadable(param: &str, err: &std::io::Error) -> IdeogramError {
    tracing::debug!(param, error = %err, "Image source could not be read");
    IdeogramError::validation_param(UNREADABLE_MESSAGE, param)
}

impl From<Bytes> for ImageFile {
    fn from(bytes: Bytes) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for ImageFile {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&'static [u8]> for ImageFile {
    fn from(bytes: &'static [u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "stream closed"))
        }
    }

    #[tokio::test]
    async fn test_bytes_default_filename() {
        let file = ImageFile::from_bytes(vec![1u8, 2, 3]);
        let (filename, data) = file.read_all("image_file", DEFAULT_IMAGE_FILENAME).await.unwrap();

        assert_eq!(filename, "image.png");
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_custom_filename() {
        let file = ImageFile::from_bytes(vec![1u8]).with_filename("cat.jpg");
        let (filename, _) = file.read_all("image_file", DEFAULT_IMAGE_FILENAME).await.unwrap();
        assert_eq!(filename, "cat.jpg");
    }

    #[tokio::test]
    async fn test_reader_is_drained() {
        let file = ImageFile::from_reader(io::Cursor::new(vec![9u8; 16]));
        let (_, data) = file.read_all("image_file", DEFAULT_IMAGE_FILENAME).await.unwrap();
        assert_eq!(data.len(), 16);
    }

    #[tokio::test]
    async fn test_failing_reader_is_validation_error() {
        let file = ImageFile::from_reader(FailingReader);
        let err = file.read_all("mask", DEFAULT_MASK_FILENAME).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.message(), "Image stream must be readable");
        assert!(matches!(
            err,
            IdeogramError::Validation { param: Some(ref p), .. } if p == "mask"
        ));
    }

    #[tokio::test]
    async fn test_missing_path_is_validation_error() {
        let file = ImageFile::from_path("/nonexistent/ideogram/input.png");
        assert_eq!(file.filename(), Some("input.png"));

        let err = file.read_all("image_file", DEFAULT_IMAGE_FILENAME).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_empty_sources_are_accepted() {
        let (filename, data) = ImageFile::from_bytes(Vec::new())
            .read_all("image_file", DEFAULT_IMAGE_FILENAME)
            .await
            .unwrap();
        assert_eq!(filename, "image.png");
        assert!(data.is_empty());

        let (_, data) = ImageFile::from_reader(io::empty())
            .read_all("image_file", DEFAULT_IMAGE_FILENAME)
            .await
            .unwrap();
        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn test_path_is_read() {
        let path = std::env::temp_dir().join(format!("ideogram-read-{}.png", std::process::id()));
        tokio::fs::write(&path, [7u8; 12]).await.unwrap();

        let file = ImageFile::from_path(path.clone());
        let expected = path.file_name().and_then(|n| n.to_str()).unwrap().to_string();
        let (filename, data) = file
            .read_all("image_file", DEFAULT_IMAGE_FILENAME)
            .await
            .unwrap();
        tokio::fs::remove_file(&path).await.ok();

        assert_eq!(filename, expected);
        assert_eq!(data, vec![7u8; 12]);
    }
}
