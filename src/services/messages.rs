//! Loading linter messages

use std::path::{Path, PathBuf};

use tokio::io::AsyncReadExt;

use crate::error::MessageError;
use crate::models::message::Message;

/// Path that reads messages from standard input
pub const STDIN_PATH: &str = "-";

/// Reads linter output (a JSON array of messages) for a project
pub struct MessageSource {
    root: PathBuf,
}

impl MessageSource {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub async fn load(&self, path: &Path) -> Result<Vec<Message>, MessageError> {
        let (content, origin) = if path == Path::new(STDIN_PATH) {
            let mut content = String::new();
            tokio::io::stdin().read_to_string(&mut content).await?;
            (content, PathBuf::from("<stdin>"))
        } else {
            let path = self.resolve(path);
            if !path.exists() {
                return Err(MessageError::NotFound(path));
            }
            (tokio::fs::read_to_string(&path).await?, path)
        };

        let messages = self.parse(&content, &origin)?;
        tracing::debug!(
            count = messages.len(),
            source = %origin.display(),
            "Loaded linter messages"
        );
        Ok(messages)
    }

    /// Parse a JSON array of messages, anchoring relative file paths at the root.
    pub fn parse(&self, content: &str, origin: &Path) -> Result<Vec<Message>, MessageError> {
        let mut messages: Vec<Message> =
            serde_json::from_str(content).map_err(|source| MessageError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;
        for message in &mut messages {
            message.file = self.resolve(&message.file);
        }
        Ok(messages)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::message::SolutionFormat;

    const MESSAGES: &str = r#"[
        {"file": "src/a.js", "severity": "error", "version": 2,
         "range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 5}},
         "solutions": [{"position": {"start": {"line": 0, "character": 5}, "end": {"line": 0, "character": 5}}, "replace_with": ";"}]},
        {"file": "/abs/b.js", "severity": "warning"}
    ]"#;

    #[test]
    fn test_parse_resolves_relative_paths() {
        let source = MessageSource::new(Path::new("/project"));
        let messages = source.parse(MESSAGES, Path::new("messages.json")).unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].file, PathBuf::from("/project/src/a.js"));
        assert_eq!(messages[1].file, PathBuf::from("/abs/b.js"));
        assert_eq!(messages[1].solutions, SolutionFormat::Legacy);
    }

    #[test]
    fn test_parse_error_names_origin() {
        let source = MessageSource::new(Path::new("/project"));
        let err = source
            .parse("{not json", Path::new("lint.json"))
            .unwrap_err();
        assert!(err.to_string().contains("lint.json"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("messages.json"), MESSAGES).unwrap();

        let source = MessageSource::new(dir.path());
        let messages = source.load(Path::new("messages.json")).await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].file, dir.path().join("src/a.js"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = MessageSource::new(dir.path());
        let err = source.load(Path::new("absent.json")).await.unwrap_err();
        assert!(matches!(err, MessageError::NotFound(_)));
    }
}
