//! JSON shapes of the Notion block-children endpoint.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::models::{Annotations, Block, BlockId, BlockKind, ChildrenPage, RichText};

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("block {id} of type {kind} has no {kind} payload")]
    MissingPayload { id: String, kind: String },
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    results: Vec<RawBlock>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawBlock {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    has_children: bool,
    /// Everything else; the kind-specific payload lives under the key named by `kind`.
    #[serde(flatten)]
    payload: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct TextPayload {
    #[serde(default)]
    rich_text: Vec<RawRichText>,
    #[serde(default)]
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRichText {
    #[serde(default)]
    plain_text: String,
    #[serde(default)]
    annotations: Option<RawAnnotations>,
    #[serde(default)]
    href: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAnnotations {
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    strikethrough: bool,
    #[serde(default)]
    code: bool,
}

/// Error body returned alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Decode one page of a `GET /blocks/{id}/children` response.
pub fn parse_children_page(body: &str) -> Result<ChildrenPage, WireError> {
    let response: ListResponse = serde_json::from_str(body)?;
    let results = response
        .results
        .into_iter()
        .map(Block::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ChildrenPage {
        results,
        has_more: response.has_more,
        next_cursor: response.next_cursor,
    })
}

impl TryFrom<RawBlock> for Block {
    type Error = WireError;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        let RawBlock {
            id,
            kind: type_name,
            has_children,
            mut payload,
        } = raw;

        let mut text = || -> Result<TextPayload, WireError> {
            let value = payload
                .remove(&type_name)
                .ok_or_else(|| WireError::MissingPayload {
                    id: id.clone(),
                    kind: type_name.clone(),
                })?;
            Ok(serde_json::from_value(value)?)
        };

        let kind = match type_name.as_str() {
            "heading_1" => BlockKind::Heading1(text()?.rich_text()),
            "heading_2" => BlockKind::Heading2(text()?.rich_text()),
            "heading_3" => BlockKind::Heading3(text()?.rich_text()),
            "paragraph" => BlockKind::Paragraph(text()?.rich_text()),
            "bulleted_list_item" => BlockKind::BulletedListItem(text()?.rich_text()),
            "numbered_list_item" => BlockKind::NumberedListItem(text()?.rich_text()),
            "toggle" => BlockKind::Toggle(text()?.rich_text()),
            "quote" => BlockKind::Quote(text()?.rich_text()),
            "callout" => BlockKind::Callout(text()?.rich_text()),
            "code" => {
                let mut payload = text()?;
                BlockKind::Code {
                    language: payload.language.take().unwrap_or_default(),
                    rich_text: payload.rich_text(),
                }
            }
            "divider" => BlockKind::Divider,
            other => BlockKind::Unsupported {
                kind: other.to_string(),
            },
        };

        Ok(Block {
            id: BlockId::from(id),
            has_children,
            kind,
        })
    }
}

impl TextPayload {
    fn rich_text(self) -> Vec<RichText> {
        self.rich_text.into_iter().map(RichText::from).collect()
    }
}

impl From<RawRichText> for RichText {
    fn from(raw: RawRichText) -> Self {
        RichText {
            plain_text: raw.plain_text,
            annotations: raw.annotations.map(|a| Annotations {
                bold: a.bold,
                italic: a.italic,
                strikethrough: a.strikethrough,
                code: a.code,
            }),
            href: raw.href,
        }
    }
}
