use thiserror::Error;

/// Failures while bringing the viewer up.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The rendering backend is missing entirely; nothing else can run.
    #[error("{0}")]
    RendererUnavailable(String),
    /// Orbit controls are unavailable; the viewer continues with static controls.
    #[error("OrbitControls failed to load. Using limited controls instead.")]
    ControlsUnavailable,
    #[error("missing page element #{0}")]
    MissingElement(&'static str),
    #[error("GPU setup failed: {0}")]
    Gpu(String),
}

impl SetupError {
    /// Whether setup can continue after reporting this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SetupError::ControlsUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_missing_controls_is_recoverable() {
        assert!(SetupError::ControlsUnavailable.is_recoverable());
        assert!(!SetupError::RendererUnavailable("x".into()).is_recoverable());
        assert!(!SetupError::Gpu("lost".into()).is_recoverable());
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            SetupError::MissingElement("status").to_string(),
            "missing page element #status"
        );
        assert_eq!(
            SetupError::RendererUnavailable("WebGPU is not available.".into()).to_string(),
            "WebGPU is not available."
        );
    }
}
