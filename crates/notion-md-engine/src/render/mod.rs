//! Ordered block sequence → Markdown.
//!
//! Rendering is pure and total. List-like items (bulleted, numbered, toggle)
//! are indented two spaces per depth level; every other block renders flush.
//! Kinds without a Markdown form are dropped.

mod rich_text;

pub use rich_text::format_rich_text;

use log::trace;

use crate::models::{BlockKind, BlockWithDepth};

const INDENT: &str = "  ";

/// Render a depth-annotated block sequence as one Markdown document.
pub fn render(blocks: &[BlockWithDepth]) -> String {
    let mut out = String::new();
    for entry in blocks {
        render_block(entry, &mut out);
    }
    out
}

fn render_block(entry: &BlockWithDepth, out: &mut String) {
    let kind = &entry.block.kind;
    let indent = INDENT.repeat(entry.depth);
    let text = kind.rich_text().map(format_rich_text).unwrap_or_default();

    match kind {
        BlockKind::Heading1(_) => out.push_str(&format!("# {text}\n\n")),
        BlockKind::Heading2(_) => out.push_str(&format!("## {text}\n\n")),
        BlockKind::Heading3(_) => out.push_str(&format!("### {text}\n\n")),
        BlockKind::Paragraph(_) => {
            if !text.is_empty() {
                out.push_str(&format!("{text}\n\n"));
            }
        }
        BlockKind::BulletedListItem(_) | BlockKind::Toggle(_) => {
            out.push_str(&format!("{indent}- {text}\n"));
        }
        BlockKind::NumberedListItem(_) => out.push_str(&format!("{indent}1. {text}\n")),
        BlockKind::Quote(_) | BlockKind::Callout(_) => out.push_str(&format!("> {text}\n\n")),
        BlockKind::Code { language, .. } => {
            out.push_str(&format!("```{language}\n{text}\n```\n\n"));
        }
        BlockKind::Divider => out.push_str("---\n\n"),
        BlockKind::Unsupported { .. } => {
            trace!(
                "Skipping unsupported block {} ({})",
                entry.block.id,
                kind.name()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, RichText};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn at(depth: usize, kind: BlockKind) -> BlockWithDepth {
        BlockWithDepth {
            block: Block::new("id", kind),
            depth,
        }
    }

    fn text(s: &str) -> Vec<RichText> {
        vec![RichText::plain(s)]
    }

    #[rstest]
    #[case::heading_1(BlockKind::Heading1(text("Test Heading")), "# Test Heading\n\n")]
    #[case::heading_2(BlockKind::Heading2(text("Sub")), "## Sub\n\n")]
    #[case::heading_3(BlockKind::Heading3(text("Minor")), "### Minor\n\n")]
    #[case::paragraph(BlockKind::Paragraph(text("Body")), "Body\n\n")]
    #[case::bulleted(BlockKind::BulletedListItem(text("Item")), "- Item\n")]
    #[case::numbered(BlockKind::NumberedListItem(text("Step")), "1. Step\n")]
    #[case::toggle(BlockKind::Toggle(text("Fold")), "- Fold\n")]
    #[case::quote(BlockKind::Quote(text("Said")), "> Said\n\n")]
    #[case::callout(BlockKind::Callout(text("Note")), "> Note\n\n")]
    #[case::divider(BlockKind::Divider, "---\n\n")]
    fn test_render_single_block(#[case] kind: BlockKind, #[case] expected: &str) {
        assert_eq!(render(&[at(0, kind)]), expected);
    }

    #[test]
    fn test_render_code_block() {
        let kind = BlockKind::Code {
            language: "go".to_string(),
            rich_text: text("func main() {}"),
        };

        assert_eq!(render(&[at(0, kind)]), "```go\nfunc main() {}\n```\n\n");
    }

    #[test]
    fn test_nested_list_is_indented() {
        let blocks = vec![
            at(0, BlockKind::BulletedListItem(text("Parent item"))),
            at(1, BlockKind::BulletedListItem(text("Child item"))),
        ];

        assert_eq!(render(&blocks), "- Parent item\n  - Child item\n");
    }

    #[test]
    fn test_numbered_items_are_not_renumbered() {
        let blocks = vec![
            at(0, BlockKind::NumberedListItem(text("First"))),
            at(0, BlockKind::NumberedListItem(text("Second"))),
            at(2, BlockKind::NumberedListItem(text("Deep"))),
        ];

        assert_eq!(render(&blocks), "1. First\n1. Second\n    1. Deep\n");
    }

    #[rstest]
    #[case::heading(BlockKind::Heading2(text("H")), "## H\n\n")]
    #[case::paragraph(BlockKind::Paragraph(text("P")), "P\n\n")]
    #[case::quote(BlockKind::Quote(text("Q")), "> Q\n\n")]
    #[case::callout(BlockKind::Callout(text("C")), "> C\n\n")]
    #[case::code(
        BlockKind::Code { language: "sh".to_string(), rich_text: text("ls") },
        "```sh\nls\n```\n\n"
    )]
    #[case::divider(BlockKind::Divider, "---\n\n")]
    fn test_block_forms_ignore_depth(#[case] kind: BlockKind, #[case] expected: &str) {
        assert_eq!(render(&[at(3, kind)]), expected);
    }

    #[test]
    fn test_empty_paragraph_renders_nothing() {
        assert_eq!(render(&[at(0, BlockKind::Paragraph(vec![]))]), "");
    }

    #[test]
    fn test_unsupported_block_renders_nothing() {
        let blocks = vec![
            at(0, BlockKind::Paragraph(text("before"))),
            at(
                0,
                BlockKind::Unsupported {
                    kind: "table".to_string(),
                },
            ),
            at(0, BlockKind::Paragraph(text("after"))),
        ];

        assert_eq!(render(&blocks), "before\n\nafter\n\n");
    }

    #[test]
    fn test_paragraph_with_styled_runs() {
        let runs = vec![
            RichText::plain("Normal "),
            RichText::plain("bold").bold(),
            RichText::plain(" text"),
        ];

        assert_eq!(
            render(&[at(0, BlockKind::Paragraph(runs))]),
            "Normal **bold** text\n\n"
        );
    }

    #[test]
    fn test_render_is_repeatable() {
        let blocks = vec![
            at(0, BlockKind::Heading1(text("Title"))),
            at(0, BlockKind::BulletedListItem(text("a"))),
            at(1, BlockKind::Toggle(text("b"))),
            at(0, BlockKind::Divider),
        ];

        assert_eq!(render(&blocks), render(&blocks));
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(render(&[]), "");
    }
}
