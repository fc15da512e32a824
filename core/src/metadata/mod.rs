pub use column::*;
pub use index::*;
pub use table::*;

mod column;
mod index;
mod table;
