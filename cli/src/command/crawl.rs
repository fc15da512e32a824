//! Raw catalog facets, printed as JSON.
use anyhow::Result;

use crate::command::TableArgs;
use crate::util::{print_json, Context};

pub async fn tables(ctx: &Context) -> Result<()> {
    print_json(&ctx.service.crawler().list_tables().await)
}

pub async fn table(ctx: &Context, args: TableArgs) -> Result<()> {
    let crawled = ctx.service.crawler().crawl_table(&args.table).await;
    for (kind, cause) in crawled.unavailable() {
        eprintln!("{}: {kind} unavailable: {cause}", args.table);
    }
    print_json(&crawled)
}

pub async fn columns(ctx: &Context, args: TableArgs) -> Result<()> {
    print_json(&ctx.service.crawler().columns(&args.table).await)
}

pub async fn primary_keys(ctx: &Context, args: TableArgs) -> Result<()> {
    print_json(&ctx.service.crawler().primary_keys(&args.table).await)
}

pub async fn foreign_keys(ctx: &Context, args: TableArgs) -> Result<()> {
    print_json(&ctx.service.crawler().foreign_key_constraints(&args.table).await)
}

pub async fn indexes(ctx: &Context, args: TableArgs) -> Result<()> {
    print_json(&ctx.service.crawler().indexes(&args.table).await)
}

pub async fn all(ctx: &Context) -> Result<()> {
    print_json(&ctx.service.crawler().all_tables().await)
}
