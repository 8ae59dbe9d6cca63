//! JSON output mode for the generate command.

use anyhow::Result;
use pcmgen_spec::{Report, ReportError, ReportWarning};
use std::process::ExitCode;
use std::time::Instant;

use super::{execute, GenerateOptions};
use crate::commands::{backend_version, print_report};

/// Run generate with machine-readable JSON output.
pub fn run_json(options: &GenerateOptions<'_>) -> Result<ExitCode> {
    let start = Instant::now();
    let builder = Report::builder("generate", backend_version());

    let (report, code) = match execute(options) {
        Ok(generated) => {
            let report = builder
                .stream(generated.stream_summary())
                .warnings(
                    generated
                        .summary
                        .warnings
                        .iter()
                        .map(ReportWarning::from_param_warning),
                )
                .params(generated.params)
                .seed(generated.seed)
                .duration_ms(start.elapsed().as_millis() as u64)
                .build();
            (report, ExitCode::SUCCESS)
        }
        Err(e) => {
            let report = builder
                .error(ReportError::from_backend_error(&e))
                .duration_ms(start.elapsed().as_millis() as u64)
                .build();
            (report, ExitCode::from(1))
        }
    };

    print_report(&report)?;
    Ok(code)
}
