use std::process::ExitCode;

use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    bpms_auth_observability::init();

    let args = bpms_auth_cli::Args::parse();

    match bpms_auth_cli::run(args).await {
        Ok(report) => {
            tracing::info!(
                deleted = report.deleted,
                created = report.created.total(),
                "Authorization reconciliation finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "Authorization reconciliation failed");
            ExitCode::FAILURE
        }
    }
}
