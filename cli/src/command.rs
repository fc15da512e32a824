use clap::Parser;

pub mod crawl;
pub mod generate;
mod health;

pub use generate::Code;
pub use health::*;

#[derive(Parser, Debug)]
pub struct TableArgs {
    /// Table name, exactly as the catalog spells it.
    pub table: String,
}
