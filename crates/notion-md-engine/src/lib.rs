pub mod fetch;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use fetch::{BlockSource, FetchError, MAX_DEPTH, SourceError, TreeFetcher, fetch_all_blocks};
pub use io::{ApiError, NotionClient, NotionClientOptions};
pub use models::*;
pub use parsing::{BlockIdError, extract_block_id};
pub use render::{format_rich_text, render};

/// Fetch the tree below `root` and render it as Markdown.
pub fn convert_to_markdown<S: BlockSource + ?Sized>(
    source: &S,
    root: &BlockId,
) -> Result<String, FetchError> {
    convert_to_markdown_with_depth(source, root, MAX_DEPTH)
}

/// [`convert_to_markdown`] with an explicit nesting ceiling.
pub fn convert_to_markdown_with_depth<S: BlockSource + ?Sized>(
    source: &S,
    root: &BlockId,
    max_depth: usize,
) -> Result<String, FetchError> {
    let blocks = TreeFetcher::new(source)
        .with_max_depth(max_depth)
        .fetch_all_blocks(root)?;
    Ok(render(&blocks))
}
