//! Background search requests.
//!
//! A UI thread posts `{ board, depth, maximizing }` requests and later picks
//! up one reply per request. Requests run one at a time, in posting order, on
//! a dedicated single-thread pool; each search itself stays single-threaded.

use std::sync::{
    mpsc::{self, Receiver, Sender, TryRecvError},
    Arc,
};

use chess_core::Board;
use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{EngineResult, SearchError};
use crate::search::{select_move_with, SearchConfig, SearchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    pub board: Board,
    pub depth: i32,
    pub maximizing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReply {
    /// Identifier returned by [`SearchWorker::post`] for the request.
    pub id: u64,
    pub result: EngineResult<SearchResult>,
}

pub struct SearchWorker {
    pool: ThreadPool,
    config: Arc<SearchConfig>,
    replies_tx: Sender<SearchReply>,
    replies_rx: Receiver<SearchReply>,
    next_id: u64,
    pending: usize,
}

impl SearchWorker {
    pub fn new(config: SearchConfig) -> EngineResult<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(1)
            .thread_name(|_| "search-worker".to_string())
            .build()
            .map_err(|err| SearchError::WorkerStart(err.to_string()))?;
        let (replies_tx, replies_rx) = mpsc::channel();
        Ok(Self {
            pool,
            config: Arc::new(config),
            replies_tx,
            replies_rx,
            next_id: 0,
            pending: 0,
        })
    }

    /// Queues a search and returns its reply id.
    pub fn post(&mut self, request: SearchRequest) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.pending += 1;

        let config = Arc::clone(&self.config);
        let replies = self.replies_tx.clone();
        self.pool.spawn(move || {
            debug!("worker picked up request {id}");
            let result = select_move_with(&request.board, request.depth, request.maximizing, &config);
            // The receiving side lives in the worker itself; a send error
            // only happens while it is being dropped.
            let _ = replies.send(SearchReply { id, result });
        });
        id
    }

    /// Number of posted requests whose reply has not been taken yet.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Blocks for the next reply. `None` when nothing is outstanding.
    pub fn recv(&mut self) -> Option<SearchReply> {
        if self.pending == 0 {
            return None;
        }
        let reply = self.replies_rx.recv().ok()?;
        self.pending -= 1;
        Some(reply)
    }

    /// The next reply if one is ready, without blocking.
    pub fn try_recv(&mut self) -> Option<SearchReply> {
        match self.replies_rx.try_recv() {
            Ok(reply) => {
                self.pending -= 1;
                Some(reply)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}
