//! Depth-first reconstruction of a remote block tree.
//!
//! The fetcher walks the hierarchy in pre-order: each block is emitted before
//! its descendants, and all descendants are emitted before the next sibling.
//! Children lists are paginated remotely; every page of one parent is drained
//! sequentially before the walk moves on.

use log::debug;

use crate::models::{Block, BlockId, BlockWithDepth, ChildrenPage};

/// Default ceiling on nesting depth below the root.
pub const MAX_DEPTH: usize = 10;

/// Error produced by a [`BlockSource`] implementation.
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// Retrieves one page of direct children of a block.
///
/// Implementations must preserve the remote ordering of children and must set
/// `has_more` to false on the final page.
pub trait BlockSource {
    fn children(
        &self,
        block_id: &BlockId,
        cursor: Option<&str>,
    ) -> Result<ChildrenPage, SourceError>;
}

impl<S: BlockSource + ?Sized> BlockSource for &S {
    fn children(
        &self,
        block_id: &BlockId,
        cursor: Option<&str>,
    ) -> Result<ChildrenPage, SourceError> {
        (**self).children(block_id, cursor)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("maximum recursion depth ({max_depth}) exceeded")]
    DepthExceeded { max_depth: usize },
    #[error("failed to get children for block {block_id}: {source}")]
    RetrievalFailed {
        block_id: BlockId,
        source: SourceError,
    },
}

#[derive(Debug, thiserror::Error)]
#[error("response reported more pages but carried no cursor")]
struct MissingCursor;

/// Walks a block tree through a [`BlockSource`].
pub struct TreeFetcher<'a, S: ?Sized> {
    source: &'a S,
    max_depth: usize,
}

impl<'a, S: BlockSource + ?Sized> TreeFetcher<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            max_depth: MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Fetch every descendant of `root` as an ordered, depth-annotated sequence.
    ///
    /// Any failure aborts the whole walk; blocks retrieved before the failure
    /// are discarded.
    pub fn fetch_all_blocks(&self, root: &BlockId) -> Result<Vec<BlockWithDepth>, FetchError> {
        let mut result = Vec::new();
        self.fetch_recursive(root, 0, &mut result)?;
        Ok(result)
    }

    fn fetch_recursive(
        &self,
        block_id: &BlockId,
        depth: usize,
        out: &mut Vec<BlockWithDepth>,
    ) -> Result<(), FetchError> {
        if depth > self.max_depth {
            return Err(FetchError::DepthExceeded {
                max_depth: self.max_depth,
            });
        }

        debug!("Fetching children for block {block_id} (depth: {depth})");
        let blocks = self.fetch_block_children(block_id)?;
        debug!("Found {} children at depth {depth}", blocks.len());

        let count = blocks.len();
        for (i, block) in blocks.into_iter().enumerate() {
            let nested = block.has_children.then(|| block.id.clone());
            out.push(BlockWithDepth { block, depth });

            if let Some(child_id) = nested {
                debug!("Block {}/{count} has children, recursing", i + 1);
                self.fetch_recursive(&child_id, depth + 1, out)?;
            }
        }

        Ok(())
    }

    /// Drain all pages of direct children of `block_id`, in remote order.
    pub fn fetch_block_children(&self, block_id: &BlockId) -> Result<Vec<Block>, FetchError> {
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;
        let mut page = 1;

        loop {
            debug!("API call: children page {page} for block {block_id}");
            let response = self
                .source
                .children(block_id, cursor.as_deref())
                .map_err(|source| FetchError::RetrievalFailed {
                    block_id: block_id.clone(),
                    source,
                })?;

            debug!(
                "Received {} blocks (has_more: {})",
                response.results.len(),
                response.has_more
            );
            blocks.extend(response.results);

            if !response.has_more {
                break;
            }
            let next = response
                .next_cursor
                .ok_or_else(|| FetchError::RetrievalFailed {
                    block_id: block_id.clone(),
                    source: Box::new(MissingCursor),
                })?;
            cursor = Some(next);
            page += 1;
        }

        Ok(blocks)
    }
}

/// Fetch the tree below `root` with the default depth ceiling.
pub fn fetch_all_blocks<S: BlockSource + ?Sized>(
    source: &S,
    root: &BlockId,
) -> Result<Vec<BlockWithDepth>, FetchError> {
    TreeFetcher::new(source).fetch_all_blocks(root)
}
