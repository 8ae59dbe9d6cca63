//! CLI command implementations

pub mod formats;
pub mod generate;
pub mod inspect;

/// Tool identifier recorded in every report.
pub(crate) fn backend_version() -> String {
    format!("pcmgen v{}", env!("CARGO_PKG_VERSION"))
}

/// Prints a report as pretty JSON on stdout.
pub(crate) fn print_report(report: &pcmgen_spec::Report) -> anyhow::Result<()> {
    println!("{}", report.to_json_pretty()?);
    Ok(())
}
