use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures while turning an edge-list file into a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("malformed input at line {line_number}: {reason}: {line:?}")]
    MalformedInput {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("cannot read graph file '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GraphError {
    pub fn malformed(line_number: usize, line: &str, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line_number,
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_carries_line_content() {
        let err = GraphError::malformed(3, "1 2 3", "expected 2 integer tokens, found 3");
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("\"1 2 3\""));
        assert!(err.is_malformed_input());
    }

    #[test]
    fn file_access_names_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = GraphError::file_access("/tmp/missing.txt", io);
        assert!(err.to_string().contains("/tmp/missing.txt"));
        assert!(!err.is_malformed_input());
    }
}
