use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::{AsyncRead, AsyncWriteExt};

/// Writes uploaded files into a single directory on the local filesystem.
///
/// Filenames are joined onto the root verbatim. A name containing `..` or an
/// absolute path resolves outside the root.
pub struct LocalStorageService {
    root: PathBuf,
}

impl LocalStorageService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the uploads directory and any missing parents
    pub async fn ensure_root(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root).await
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Streams `reader` into `<root>/<filename>`, truncating any existing file.
    /// Returns the number of bytes written.
    pub async fn write_stream<R>(&self, filename: &str, mut reader: R) -> io::Result<u64>
    where
        R: AsyncRead + Unpin + Send,
    {
        let path = self.path_for(filename);
        let mut file = File::create(&path).await?;
        let written = tokio::io::copy(&mut reader, &mut file).await?;
        file.flush().await?;
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_root_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorageService::new(dir.path().join("static").join("uploads"));

        storage.ensure_root().await.unwrap();
        assert!(storage.root().is_dir());

        // Idempotent
        storage.ensure_root().await.unwrap();
    }

    #[tokio::test]
    async fn test_write_stream_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorageService::new(dir.path());

        let n = storage
            .write_stream("a.png", &b"first version, longer"[..])
            .await
            .unwrap();
        assert_eq!(n, 21);

        storage.write_stream("a.png", &b"second"[..]).await.unwrap();
        let content = std::fs::read(dir.path().join("a.png")).unwrap();
        assert_eq!(content, b"second");
    }

    #[tokio::test]
    async fn test_write_stream_missing_root_fails() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorageService::new(dir.path().join("missing"));

        let result = storage.write_stream("a.png", &b"data"[..]).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_path_for_uses_name_verbatim() {
        let storage = LocalStorageService::new("static/uploads");
        assert_eq!(
            storage.path_for("cat.gif"),
            PathBuf::from("static/uploads/cat.gif")
        );
        assert_eq!(
            storage.path_for("../escape.png"),
            PathBuf::from("static/uploads/../escape.png")
        );
    }
}
