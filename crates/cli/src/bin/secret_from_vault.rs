use kvault::Commands;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    kvault::execute::run(Commands::Secret).await
}
