use anyhow::Result;
use clap::Parser;

use crate::command::TableArgs;
use crate::util::{print_json, Context};

pub async fn model(ctx: &Context, args: TableArgs) -> Result<()> {
    print_json(&ctx.service.model(&args.table).await)
}

pub async fn models(ctx: &Context) -> Result<()> {
    print_json(&ctx.service.models().await)
}

pub async fn relationships(ctx: &Context, args: TableArgs) -> Result<()> {
    print_json(&ctx.service.relationships(&args.table).await)
}

pub async fn fields(ctx: &Context, args: TableArgs) -> Result<()> {
    print_json(&ctx.service.fields(&args.table).await)
}

#[derive(Parser, Debug)]
pub struct Code {
    /// Table to generate source for.
    #[clap(required_unless_present = "all")]
    table: Option<String>,

    /// Generate every table. Prints a JSON object of class name to source.
    #[clap(long, short, conflicts_with = "table")]
    all: bool,
}

impl Code {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self.table {
            Some(table) if !self.all => {
                print!("{}", ctx.service.code(&table).await);
                Ok(())
            }
            _ => print_json(&ctx.service.all_code().await),
        }
    }
}
