use crate::cli::Cli;
use crate::commands::Commands;
use crate::logging;
use kvault_config::VaultSettings;
use kvault_core::{Error, Result, ERROR_PREFIX};
use kvault_secrets::VaultClient;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

/// Entry point shared by the three binaries
///
/// Arguments are parsed first so `--help` works without a backend. The
/// backend settings are captured before the configuration file is opened.
/// Nothing reaches stdout unless the whole document was produced.
pub async fn run(command: Commands) -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("failed to initialize logging: {e}");
    }

    let cli = match Cli::try_parse_for(command) {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    match generate(command, &cli.config).await.and_then(|out| emit(&out)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, command = command.bin_name(), "generation failed");
            eprintln!("{ERROR_PREFIX} {e}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

async fn generate(command: Commands, config_path: &Path) -> Result<String> {
    let settings = VaultSettings::from_env()?;
    tracing::debug!(address = %settings.address(), "using vault backend");
    let client = VaultClient::new(settings)?;
    command.execute(&client, config_path).await
}

fn emit(document: &str) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(document.as_bytes())
        .and_then(|()| handle.flush())
        .map_err(Error::output)
}
