//! CLI command implementations.

pub mod batch;
pub mod describe;
pub mod doctor;
pub mod generate;
pub mod tables;

use std::process::ExitCode;

use tarab_spec::{ErrorCode, GenerationResult};

/// Exit status for a request rejected before synthesis.
pub const EXIT_INPUT_ERROR: u8 = 1;

/// Exit status for a request that failed during generation.
pub const EXIT_GENERATION_ERROR: u8 = 2;

/// Maps a generation result onto the process exit status.
pub fn exit_code_for(result: &GenerationResult) -> ExitCode {
    ExitCode::from(exit_status(result))
}

fn exit_status(result: &GenerationResult) -> u8 {
    if result.success {
        0
    } else if result.error_kind == Some(ErrorCode::InvalidParameter) {
        EXIT_INPUT_ERROR
    } else {
        EXIT_GENERATION_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status() {
        let ok = GenerationResult::succeeded("a.mp3", "a.mp3", 10, 120.0, 10, "h");
        assert_eq!(exit_status(&ok), 0);

        let mut invalid = GenerationResult::failed_with_message("tempo");
        invalid.error_kind = Some(ErrorCode::InvalidParameter);
        assert_eq!(exit_status(&invalid), EXIT_INPUT_ERROR);

        let mut encoding = GenerationResult::failed_with_message("ffmpeg");
        encoding.error_kind = Some(ErrorCode::EncodingFailure);
        assert_eq!(exit_status(&encoding), EXIT_GENERATION_ERROR);
    }
}
