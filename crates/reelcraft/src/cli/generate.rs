//! `reelcraft generate`.

use reelcraft::{
    Credentials, ErrorClass, FailureBody, GenerationRequest, ReelcraftConfig, ScriptPipeline,
    build_pipeline,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, instrument};

/// Exit code for rejected input.
const EXIT_INVALID_INPUT: u8 = 2;

/// Options for one pipeline run.
#[derive(Debug)]
pub struct GenerateOptions {
    /// Target market or industry
    pub niche: String,
    /// Requested platform identifiers
    pub platforms: Vec<String>,
    /// Competitor text source; stdin when `None` or "-"
    pub input: Option<PathBuf>,
    /// Pretty-print the output
    pub pretty: bool,
}

/// Run the pipeline once.
///
/// Prints `PipelineOutput` JSON to stdout on success. On a pipeline failure,
/// prints the `FailureBody` JSON to stderr and returns exit code 2 for
/// rejected input or 1 otherwise.
#[instrument(skip_all, fields(niche = %options.niche))]
pub async fn handle_generate(
    config: &ReelcraftConfig,
    options: GenerateOptions,
) -> anyhow::Result<ExitCode> {
    let raw_text = read_input(options.input.as_deref())?;
    let pipeline = build_pipeline(config, Credentials::from_env())?;

    let request = GenerationRequest::new(raw_text, options.niche, options.platforms);
    match pipeline.run(request).await {
        Ok(output) => {
            let json = if options.pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };
            println!("{}", json);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!(class = %err.class(), error = %err, "Generation failed");
            eprintln!("{}", serde_json::to_string(&FailureBody::from(&err))?);
            Ok(ExitCode::from(exit_status_for(err.class())))
        }
    }
}

fn exit_status_for(class: ErrorClass) -> u8 {
    match class {
        ErrorClass::InvalidInput => EXIT_INVALID_INPUT,
        _ => 1,
    }
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e)),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_status_for(ErrorClass::InvalidInput), 2);
        assert_eq!(exit_status_for(ErrorClass::Dependency), 1);
        assert_eq!(exit_status_for(ErrorClass::Timeout), 1);
        assert_eq!(exit_status_for(ErrorClass::Configuration), 1);
    }

    #[test]
    fn test_read_input_from_file() {
        let path = std::env::temp_dir().join(format!("reelcraft-input-{}.txt", std::process::id()));
        std::fs::write(&path, "Lose 5kg in a week!").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "Lose 5kg in a week!");
        assert!(read_input(Some(Path::new("/nonexistent/reelcraft/ad.txt"))).is_err());

        std::fs::remove_file(&path).unwrap();
    }
}
