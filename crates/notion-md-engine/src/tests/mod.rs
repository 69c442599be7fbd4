//! Shared test doubles and block builders.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::fetch::{BlockSource, SourceError};
use crate::models::{Block, BlockId, BlockKind, ChildrenPage, RichText};

type Response = Result<ChildrenPage, String>;

/// A [`BlockSource`] that replays scripted responses per block id.
///
/// Responses for one id are handed out in the order they were scripted. An id
/// with nothing left to replay answers with an empty final page.
#[derive(Default)]
pub struct ScriptedSource {
    responses: RefCell<HashMap<String, VecDeque<Response>>>,
    calls: RefCell<Vec<(String, Option<String>)>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(self, block_id: &str, page: ChildrenPage) -> Self {
        self.push(block_id, Ok(page));
        self
    }

    pub fn failure(self, block_id: &str, message: &str) -> Self {
        self.push(block_id, Err(message.to_string()));
        self
    }

    /// A single chain of `levels` nested paragraphs below `root`.
    pub fn chain(levels: usize) -> Self {
        let mut source = Self::new();
        let mut parent = "root".to_string();
        for level in 0..levels {
            let id = format!("level-{level}");
            let mut block = paragraph(&id, &id);
            if level + 1 < levels {
                block = block.with_children();
            }
            source = source.page(&parent, ChildrenPage::last(vec![block]));
            parent = id;
        }
        source
    }

    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn push(&self, block_id: &str, response: Response) {
        self.responses
            .borrow_mut()
            .entry(block_id.to_string())
            .or_default()
            .push_back(response);
    }
}

impl BlockSource for ScriptedSource {
    fn children(
        &self,
        block_id: &BlockId,
        cursor: Option<&str>,
    ) -> Result<ChildrenPage, SourceError> {
        self.calls
            .borrow_mut()
            .push((block_id.to_string(), cursor.map(str::to_string)));

        let next = self
            .responses
            .borrow_mut()
            .get_mut(block_id.as_str())
            .and_then(VecDeque::pop_front);

        match next {
            Some(Ok(page)) => Ok(page),
            Some(Err(message)) => Err(message.into()),
            None => Ok(ChildrenPage::default()),
        }
    }
}

pub fn paragraph(id: &str, text: &str) -> Block {
    Block::new(id, BlockKind::Paragraph(vec![RichText::plain(text)]))
}

pub fn bullet(id: &str, text: &str) -> Block {
    Block::new(id, BlockKind::BulletedListItem(vec![RichText::plain(text)]))
}
