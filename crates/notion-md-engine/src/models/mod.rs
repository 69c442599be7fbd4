pub mod block;
pub mod rich_text;

pub use block::*;
pub use rich_text::*;
