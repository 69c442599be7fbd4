//! HTTP access to the Notion block-children endpoint.

pub mod wire;

use std::thread;
use std::time::Duration;

use log::{debug, warn};

use crate::fetch::{BlockSource, SourceError};
use crate::models::{BlockId, ChildrenPage};

pub use wire::{WireError, parse_children_page};

pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";
pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_MAX_RETRIES: u32 = 3;

const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(1);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Notion API returned {status} ({code}): {message}")]
    Status {
        status: u16,
        code: String,
        message: String,
    },
    #[error("transport error: {0}")]
    Transport(#[from] Box<ureq::Transport>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Decode(#[from] WireError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotionClientOptions {
    pub base_url: String,
    pub notion_version: String,
    pub page_size: u32,
    /// How many times a rate-limited (429) request is retried.
    pub max_retries: u32,
}

impl Default for NotionClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Blocking Notion API client exposing block children as a [`BlockSource`].
pub struct NotionClient {
    agent: ureq::Agent,
    token: String,
    options: NotionClientOptions,
}

impl NotionClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_options(token, NotionClientOptions::default())
    }

    pub fn with_options(token: impl Into<String>, options: NotionClientOptions) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        Self {
            agent,
            token: token.into(),
            options,
        }
    }

    pub fn options(&self) -> &NotionClientOptions {
        &self.options
    }

    fn children_url(&self, block_id: &BlockId) -> String {
        format!(
            "{}/blocks/{}/children",
            self.options.base_url.trim_end_matches('/'),
            block_id
        )
    }

    /// Fetch one page of children, retrying only when rate limited.
    pub fn get_children(
        &self,
        block_id: &BlockId,
        cursor: Option<&str>,
    ) -> Result<ChildrenPage, ApiError> {
        let url = self.children_url(block_id);
        let page_size = self.options.page_size.to_string();
        let mut attempt = 0;

        loop {
            let mut request = self
                .agent
                .get(&url)
                .set("Authorization", &format!("Bearer {}", self.token))
                .set("Notion-Version", &self.options.notion_version)
                .query("page_size", &page_size);
            if let Some(cursor) = cursor {
                request = request.query("start_cursor", cursor);
            }

            match request.call() {
                Ok(response) => {
                    let body = response.into_string()?;
                    return Ok(parse_children_page(&body)?);
                }
                Err(ureq::Error::Status(429, response)) if attempt < self.options.max_retries => {
                    attempt += 1;
                    let wait = retry_after(&response);
                    warn!(
                        "Rate limited fetching {block_id}, retry {attempt}/{} in {wait:?}",
                        self.options.max_retries
                    );
                    thread::sleep(wait);
                }
                Err(ureq::Error::Status(status, response)) => {
                    return Err(status_error(status, response));
                }
                Err(ureq::Error::Transport(transport)) => {
                    return Err(ApiError::Transport(Box::new(transport)));
                }
            }
        }
    }
}

impl BlockSource for NotionClient {
    fn children(
        &self,
        block_id: &BlockId,
        cursor: Option<&str>,
    ) -> Result<ChildrenPage, SourceError> {
        debug!("GET children of {block_id} (cursor: {cursor:?})");
        self.get_children(block_id, cursor).map_err(Into::into)
    }
}

fn retry_after(response: &ureq::Response) -> Duration {
    response
        .header("Retry-After")
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_RETRY_AFTER)
}

fn status_error(status: u16, response: ureq::Response) -> ApiError {
    let status_text = response.status_text().to_string();
    let body = response.into_string().unwrap_or_default();
    let parsed = serde_json::from_str::<wire::ErrorBody>(&body).ok();

    let (code, message) = match parsed {
        Some(wire::ErrorBody { code, message }) => (
            code.unwrap_or_else(|| "unknown".to_string()),
            message.unwrap_or(status_text),
        ),
        None if body.is_empty() => ("unknown".to_string(), status_text),
        None => ("unknown".to_string(), body),
    };

    ApiError::Status {
        status,
        code,
        message,
    }
}
