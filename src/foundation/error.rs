pub type VitaeResult<T> = Result<T, VitaeError>;

#[derive(thiserror::Error, Debug)]
pub enum VitaeError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("render failure (exit {}): {}", exit_label(.exit_code), .stderr.trim())]
    Render {
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VitaeError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn render(
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::Render {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for VitaeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        // Unix processes killed by a signal report no exit code.
        None => "signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            VitaeError::configuration("x")
                .to_string()
                .contains("configuration error:")
        );
        assert!(
            VitaeError::render(Some(1), "", "x")
                .to_string()
                .contains("render failure")
        );
        assert!(
            VitaeError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            VitaeError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn render_display_includes_exit_code_and_stderr() {
        let err = VitaeError::render(Some(3), "out", "theme not found\n");
        assert_eq!(err.to_string(), "render failure (exit 3): theme not found");

        let killed = VitaeError::render(None, "", "");
        assert!(killed.to_string().contains("exit signal"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = VitaeError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn json_errors_map_to_serde() {
        let err: VitaeError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, VitaeError::Serde(_)));
    }
}
