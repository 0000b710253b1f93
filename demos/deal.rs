//! Deals an opening hand and prints what the player can see.

use std::error::Error;
use std::io::{self, Write};

use bjcore::{Table, TableOptions, TextReport};
use flexi_logger::Logger;
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let mut table = Table::from_os_rng(TableOptions::default());
    table.deal_opening()?;
    info!("{} cards left after the opening deal", table.cards_remaining());

    let mut report = TextReport::new(String::new());
    table.report_opening(&mut report)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(report.into_inner().as_bytes())?;
    stdout.flush()?;

    Ok(())
}
