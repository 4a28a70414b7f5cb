//! Dual ownership modes for a [`Board`]'s state-history stack.
//!
//! A [`Board`] threads its per-ply [`BoardState`] through a singly linked chain
//! as moves are applied and undone. Two ownership strategies are supported:
//!
//! - [`StackMode::Internal`]: the `Board` owns the whole chain through a
//!   reference-counted [`Arc`]. Popping a state (undoing a move) drops the
//!   `Arc`'s reference to it, freeing the state once no other `Board` (e.g. a
//!   [`Board::shallow_clone()`]) still shares it. Every `Board` constructed
//!   through [`Board::default()`] or [`Board::new_from_fen()`] starts out in
//!   this mode.
//! - [`StackMode::External`]: the chain's backing storage is owned by the
//!   caller (e.g. a pre-allocated per-ply arena used by a search routine),
//!   and `push`/`pop` only move a handle along that pre-built chain without
//!   allocating or freeing anything themselves.
//!
//! Both variants share the same reference-counted representation; the tag
//! only distinguishes which side is responsible for the chain's lifetime,
//! which matters when a `Board` is handed off across an allocation boundary
//! (e.g. to a worker that must not free states the caller still expects to
//! reuse).
//!
//! [`Board`]: ../struct.Board.html
//! [`Board::shallow_clone()`]: ../struct.Board.html#method.shallow_clone
//! [`Board::default()`]: ../struct.Board.html#method.default
//! [`Board::new_from_fen()`]: ../struct.Board.html#method.new_from_fen
//! [`BoardState`]: ../board_state/struct.BoardState.html

use super::board_state::BoardState;
use tools::pleco_arc::Arc;

/// A handle to the current link of a [`Board`]'s state-history chain, tagged
/// with the ownership strategy used to manage that chain.
///
/// [`Board`]: ../struct.Board.html
#[derive(Clone)]
pub enum StackMode {
    /// The chain is owned by the `Board`; pushing allocates, popping frees.
    Internal(Arc<BoardState>),
    /// The chain's storage is owned by the caller; push/pop only walk it.
    External(Arc<BoardState>),
}

impl StackMode {
    /// Starts a new internally-owned chain rooted at `state`.
    #[inline]
    pub fn internal(state: BoardState) -> StackMode {
        StackMode::Internal(Arc::new(state))
    }

    /// Wraps an already-linked, caller-owned chain without taking ownership
    /// of freeing it.
    #[inline]
    pub fn external(state: Arc<BoardState>) -> StackMode {
        StackMode::External(state)
    }

    /// Returns a shared reference to the current link of the chain.
    #[inline]
    pub fn current(&self) -> &Arc<BoardState> {
        match *self {
            StackMode::Internal(ref s) | StackMode::External(ref s) => s,
        }
    }

    /// Returns a mutable reference to the current link of the chain, for
    /// callers that need to mutate the state in place (e.g. via
    /// `Arc::get_mut`) rather than replace it.
    #[inline]
    pub fn current_mut(&mut self) -> &mut Arc<BoardState> {
        match *self {
            StackMode::Internal(ref mut s) | StackMode::External(ref mut s) => s,
        }
    }

    /// Advances the chain to `state`, preserving the current ownership mode.
    ///
    /// In `Internal` mode, `state` is expected to be a freshly allocated node
    /// with `prev` set to the old current state, so the old Arc is dropped
    /// (and freed, once unshared) here. In `External` mode the caller has
    /// already linked `state` into its own storage; this call only moves the
    /// handle forward.
    #[inline]
    pub fn advance(&mut self, state: Arc<BoardState>) {
        *self = match *self {
            StackMode::Internal(_) => StackMode::Internal(state),
            StackMode::External(_) => StackMode::External(state),
        };
    }

    /// Moves the chain back to the previous state.
    ///
    /// # Panics
    ///
    /// Panics if there is no previous state, i.e. this is the root of the chain.
    #[inline]
    pub fn retreat(&mut self) {
        let prev = self.current()
            .get_prev()
            .expect("StackMode::retreat called with no previous BoardState");
        self.advance(prev);
    }
}

impl ::std::ops::Deref for StackMode {
    type Target = BoardState;
    #[inline]
    fn deref(&self) -> &BoardState {
        self.current()
    }
}
