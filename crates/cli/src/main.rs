use anyhow::Result;
use clap::Parser;

use polydemo_cli::config::{Cli, Section};
use polydemo_cli::{drivers, render};

fn main() -> Result<()> {
    let cli = Cli::parse();
    polydemo_observability::init(cli.log_format);

    let stdout = std::io::stdout();
    let mut presenter = render::presenter(cli.format, stdout.lock());

    if cli.section.includes(Section::Accounts) {
        presenter.accounts(&drivers::run_accounts()?)?;
    }
    if cli.section.includes(Section::Payroll) {
        presenter.payroll(&drivers::run_payroll()?)?;
    }
    if cli.section.includes(Section::Rental) {
        presenter.rental(&drivers::run_rental(cli.duration)?)?;
    }

    tracing::info!(section = ?cli.section, "done");
    Ok(())
}
