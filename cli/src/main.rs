use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod command;
pub(crate) mod config;
mod util;

use command::*;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL. Takes precedence over DATABASE_URL and the config file.
    #[clap(long, global = true)]
    url: Option<String>,

    /// Log catalog queries and generation steps.
    #[clap(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List user tables.
    Tables,
    /// Every facet of one table, with the status of each.
    Table(TableArgs),
    Columns(TableArgs),
    PrimaryKeys(TableArgs),
    ForeignKeys(TableArgs),
    Indexes(TableArgs),
    /// Metadata for every user table.
    All,
    /// Generate the model for one table.
    Model(TableArgs),
    /// Generate models for every user table.
    Models,
    /// Print generated source.
    Code(Code),
    Relationships(TableArgs),
    Fields(TableArgs),
    /// Check that the catalog is reachable.
    Health(Health),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "schemacrawler=debug" } else { "schemacrawler=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    use Command::*;
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let runtime = util::create_runtime()?;
    runtime.block_on(async {
        let ctx = util::Context::new(cli.url)?;
        match cli.command {
            Tables => crawl::tables(&ctx).await,
            Table(args) => crawl::table(&ctx, args).await,
            Columns(args) => crawl::columns(&ctx, args).await,
            PrimaryKeys(args) => crawl::primary_keys(&ctx, args).await,
            ForeignKeys(args) => crawl::foreign_keys(&ctx, args).await,
            Indexes(args) => crawl::indexes(&ctx, args).await,
            All => crawl::all(&ctx).await,
            Model(args) => generate::model(&ctx, args).await,
            Models => generate::models(&ctx).await,
            Code(code) => code.run(&ctx).await,
            Relationships(args) => generate::relationships(&ctx, args).await,
            Fields(args) => generate::fields(&ctx, args).await,
            Health(health) => health.run(&ctx).await,
        }
    })
}
