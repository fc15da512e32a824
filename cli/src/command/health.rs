use anyhow::{anyhow, Result};
use clap::Parser;
use colored::Colorize;

use crate::util::{redact_url, Context};

#[derive(Parser, Debug)]
pub struct Health {
    /// Also list the user tables once connected.
    #[clap(long, short)]
    tables: bool,
}

impl Health {
    /// Probes the connection directly. An empty table list is never read as healthy or unhealthy.
    pub async fn run(self, ctx: &Context) -> Result<()> {
        eprintln!("{}: {}", "Database".bold(), redact_url(&ctx.url));
        let crawler = ctx.service.crawler();
        if let Err(e) = crawler.check_connection().await {
            eprintln!("{}: {e}", "FAILED".red());
            return Err(anyhow!("catalog is unreachable"));
        }
        eprintln!("{}", "SUCCESS".green());
        if self.tables {
            let tables = crawler.list_tables().await;
            match tables.cause() {
                Some(cause) => eprintln!("{}: could not list tables: {cause}", "WARNING".yellow()),
                None => {
                    for table in tables.unwrap_or_default() {
                        println!("{table}");
                    }
                }
            }
        }
        Ok(())
    }
}
