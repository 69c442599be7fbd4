use std::fmt;

use super::rich_text::RichText;

/// Identifier of a block in the remote hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The kind of a block together with its kind-specific payload.
///
/// Only the kinds the renderer understands get their own variant. Everything
/// else becomes [`BlockKind::Unsupported`] and renders to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Heading1(Vec<RichText>),
    Heading2(Vec<RichText>),
    Heading3(Vec<RichText>),
    Paragraph(Vec<RichText>),
    BulletedListItem(Vec<RichText>),
    NumberedListItem(Vec<RichText>),
    /// A collapsible item, rendered like a bulleted item.
    Toggle(Vec<RichText>),
    Quote(Vec<RichText>),
    Callout(Vec<RichText>),
    Code {
        /// Language tag placed after the opening fence.
        language: String,
        rich_text: Vec<RichText>,
    },
    Divider,
    Unsupported {
        /// The remote type name, kept for diagnostics.
        kind: String,
    },
}

impl BlockKind {
    /// Remote type name of this kind, as used by the Notion API.
    pub fn name(&self) -> &str {
        match self {
            BlockKind::Heading1(_) => "heading_1",
            BlockKind::Heading2(_) => "heading_2",
            BlockKind::Heading3(_) => "heading_3",
            BlockKind::Paragraph(_) => "paragraph",
            BlockKind::BulletedListItem(_) => "bulleted_list_item",
            BlockKind::NumberedListItem(_) => "numbered_list_item",
            BlockKind::Toggle(_) => "toggle",
            BlockKind::Quote(_) => "quote",
            BlockKind::Callout(_) => "callout",
            BlockKind::Code { .. } => "code",
            BlockKind::Divider => "divider",
            BlockKind::Unsupported { kind } => kind,
        }
    }

    /// The styled text runs carried by this kind, if any.
    pub fn rich_text(&self) -> Option<&[RichText]> {
        match self {
            BlockKind::Heading1(text)
            | BlockKind::Heading2(text)
            | BlockKind::Heading3(text)
            | BlockKind::Paragraph(text)
            | BlockKind::BulletedListItem(text)
            | BlockKind::NumberedListItem(text)
            | BlockKind::Toggle(text)
            | BlockKind::Quote(text)
            | BlockKind::Callout(text) => Some(text),
            BlockKind::Code { rich_text, .. } => Some(rich_text),
            BlockKind::Divider | BlockKind::Unsupported { .. } => None,
        }
    }
}

/// A read-only snapshot of one remote block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub has_children: bool,
    pub kind: BlockKind,
}

impl Block {
    pub fn new(id: impl Into<BlockId>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            has_children: false,
            kind,
        }
    }

    pub fn with_children(mut self) -> Self {
        self.has_children = true;
        self
    }
}

/// A block paired with its nesting depth below the traversal root.
///
/// Direct children of the root sit at depth 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockWithDepth {
    pub block: Block,
    pub depth: usize,
}

/// One page of direct children as returned by a [`crate::fetch::BlockSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildrenPage {
    pub results: Vec<Block>,
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

impl ChildrenPage {
    /// A page with no continuation.
    pub fn last(results: Vec<Block>) -> Self {
        Self {
            results,
            has_more: false,
            next_cursor: None,
        }
    }

    /// A page followed by another one at `cursor`.
    pub fn more(results: Vec<Block>, cursor: impl Into<String>) -> Self {
        Self {
            results,
            has_more: true,
            next_cursor: Some(cursor.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_id_display_and_conversions() {
        let id = BlockId::from("abc-123");
        assert_eq!(id.to_string(), "abc-123");
        assert_eq!(id.as_str(), "abc-123");
        assert_eq!(id, BlockId::from("abc-123".to_string()));
    }

    #[test]
    fn test_kind_names_match_remote_types() {
        assert_eq!(BlockKind::Heading1(vec![]).name(), "heading_1");
        assert_eq!(BlockKind::Divider.name(), "divider");
        assert_eq!(
            BlockKind::Unsupported {
                kind: "table".to_string()
            }
            .name(),
            "table"
        );
    }

    #[test]
    fn test_structural_kinds_have_no_text() {
        assert!(BlockKind::Divider.rich_text().is_none());
        assert!(
            BlockKind::Code {
                language: "go".to_string(),
                rich_text: vec![RichText::plain("x")],
            }
            .rich_text()
            .is_some()
        );
    }

    #[test]
    fn test_block_defaults_to_leaf() {
        let block = Block::new("a", BlockKind::Divider);
        assert!(!block.has_children);
        assert!(block.with_children().has_children);
    }
}
