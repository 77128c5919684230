use bullpen::adapter::inbound::cli::command::Cli;
use bullpen::adapter::inbound::cli::{output, run};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = run::execute(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
