use super::program::StageKind;

/// Failure to build a shader program.
///
/// Both variants are fatal for the caller: there is no fallback program.
/// `log` carries the compiler / validator diagnostic text unmodified.
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    #[error("{stage} shader failed to compile:\n{log}")]
    Compile { stage: StageKind, log: String },

    #[error("shader program `{label}` failed to link:\n{log}")]
    Link { label: String, log: String },
}

impl ProgramError {
    /// The raw diagnostic text.
    pub fn log(&self) -> &str {
        match self {
            ProgramError::Compile { log, .. } | ProgramError::Link { log, .. } => log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_names_stage_and_keeps_log() {
        let err = ProgramError::Compile {
            stage: StageKind::Fragment,
            log: "error: expected ';'".into(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("fragment shader failed to compile"));
        assert!(msg.ends_with("error: expected ';'"));
        assert_eq!(err.log(), "error: expected ';'");
    }

    #[test]
    fn link_error_names_program() {
        let err = ProgramError::Link {
            label: "mandelbrot".into(),
            log: "entry point missing".into(),
        };
        assert_eq!(
            err.to_string(),
            "shader program `mandelbrot` failed to link:\nentry point missing"
        );
    }
}
