use log::info;
use salary_ledger::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    info!("Starting salary ledger");
    Cli::run()
}
