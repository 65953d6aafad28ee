use crate::error::{Result as ServerErrorResult, ServerError};

use pc_auth::{AuditReport, KeyAudit};
use pc_config::Config;

use std::io::Write;

/// Audit the configured key material and write the report to `out`.
///
/// Returns the report so the caller can pick an exit status.
pub fn run(
    config: &Config,
    compact: bool,
    out: &mut impl Write,
) -> ServerErrorResult<AuditReport> {
    let keys_dir = config.keys_path()?;
    let report = KeyAudit::new(
        &keys_dir,
        config.auth.jwt_secret.as_deref(),
        config.auth.encryption_key.as_deref(),
    )
    .run();

    let written = if compact {
        serde_json::to_writer(&mut *out, &report)
    } else {
        serde_json::to_writer_pretty(&mut *out, &report)
    };
    written.map_err(|source| ServerError::Report { source })?;
    writeln!(out).map_err(|e| ServerError::Report {
        source: serde_json::Error::io(e),
    })?;

    Ok(report)
}
