// scheduler.rs - Host frame scheduling as an injectable capability

use std::collections::VecDeque;

use crate::animation::GenerationToken;

/// Asks the host to call back once on its next frame.
///
/// The host answers by handing the same token to
/// [`AnimationController::on_frame`](crate::AnimationController::on_frame).
pub trait FrameScheduler {
    fn request_frame(&mut self, token: GenerationToken);
}

/// Queue of requested callbacks, drained by whoever owns the frame clock.
///
/// Cancellation never removes entries: a token queued before `pause` is
/// still delivered and turns into a stale no-op.
#[derive(Debug, Default)]
pub struct FrameQueue {
    pending: VecDeque<GenerationToken>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pop(&mut self) -> Option<GenerationToken> {
        self.pending.pop_front()
    }

    /// Everything requested so far, oldest first.
    pub fn drain(&mut self) -> Vec<GenerationToken> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self, token: GenerationToken) {
        self.pending.push_back(token);
    }
}
