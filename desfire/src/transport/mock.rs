// desfire/src/transport/mock.rs

//! Scripted transport for tests and examples.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::transport::traits::Transceive;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    sent: Vec<Vec<u8>>,
    max_lens: Vec<usize>,
    responses: VecDeque<Result<Vec<u8>>>,
}

/// Mock transport for tests. It records sent commands and replays queued
/// responses or injected failures in order.
///
/// Clones share the same state, so a test can keep one handle for
/// assertions after boxing another into a session.
#[derive(Debug, Default, Clone)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    /// Empty mock: every exchange fails until a response is queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock pre-seeded with raw responses (payload plus trailer).
    pub fn with_responses<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let mock = Self::new();
        for resp in responses {
            mock.push_response(resp);
        }
        mock
    }

    /// Queue a raw response.
    pub fn push_response(&self, resp: Vec<u8>) {
        self.state.borrow_mut().responses.push_back(Ok(resp));
    }

    /// Queue a reader failure; the matching exchange returns
    /// `Error::Communication`.
    pub fn push_failure(&self, reason: &str) {
        self.state
            .borrow_mut()
            .responses
            .push_back(Err(Error::Communication(reason.to_string())));
    }

    /// Every command sent so far, oldest first.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state.borrow().sent.clone()
    }

    /// Most recent command, if any.
    pub fn last_sent(&self) -> Option<Vec<u8>> {
        self.state.borrow().sent.last().cloned()
    }

    /// `max_response_len` passed with each exchange, oldest first.
    pub fn max_response_lens(&self) -> Vec<usize> {
        self.state.borrow().max_lens.clone()
    }

    /// Number of queued responses not yet consumed.
    pub fn pending(&self) -> usize {
        self.state.borrow().responses.len()
    }

    /// Forget the sent log and recorded ceilings.
    pub fn clear_sent(&self) {
        let mut state = self.state.borrow_mut();
        state.sent.clear();
        state.max_lens.clear();
    }
}

impl Transceive for MockTransport {
    fn transceive(&mut self, command: &[u8], max_response_len: usize) -> Result<Vec<u8>> {
        let mut state = self.state.borrow_mut();
        state.sent.push(command.to_vec());
        state.max_lens.push(max_response_len);
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(Error::Communication("no response queued".into())))
    }
}
