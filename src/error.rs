use std::path::Path;

pub type MaskgenResult<T> = Result<T, MaskgenError>;

#[derive(thiserror::Error, Debug)]
pub enum MaskgenError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MaskgenError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn io(path: &Path, err: std::io::Error) -> Self {
        Self::Io(format!("{}: {err}", path.display()))
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            MaskgenError::invalid_argument("x")
                .to_string()
                .contains("invalid argument:")
        );
        assert!(
            MaskgenError::io(Path::new("masks/light.json"), std::io::Error::other("denied"))
                .to_string()
                .contains("io error:")
        );
        assert!(
            MaskgenError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn io_names_the_path() {
        let err = MaskgenError::io(Path::new("masks/light.json"), std::io::Error::other("denied"));
        let msg = err.to_string();
        assert!(msg.contains("masks/light.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = MaskgenError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
