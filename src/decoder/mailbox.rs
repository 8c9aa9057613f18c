//! Decoder interrupt to control loop handoff
//!
//! The mailbox holds at most `SIZE` frames. Once full, new frames are
//! rejected, and [`FrameSource::discard_pending`] empties it after a blocking
//! command, so keypresses made during a fade are lost rather than replayed.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use super::{FrameSource, IrFrame};

/// Frame rejected by a full mailbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub IrFrame);

/// The mailbox is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded frame queue shared between interrupt and loop
pub struct FrameMailbox<const SIZE: usize> {
    frames: Mutex<RefCell<Deque<IrFrame, SIZE>>>,
}

impl<const SIZE: usize> FrameMailbox<SIZE> {
    pub const fn new() -> Self {
        Self {
            frames: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for the decoder interrupt
    pub const fn sender(&self) -> FrameSender<'_, SIZE> {
        FrameSender { mailbox: self }
    }

    /// Handle for the control loop
    pub const fn receiver(&self) -> FrameReceiver<'_, SIZE> {
        FrameReceiver { mailbox: self }
    }

    fn with_frames<R>(&self, f: impl FnOnce(&mut Deque<IrFrame, SIZE>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.frames.borrow(cs).borrow_mut()))
    }

    pub fn try_send(&self, frame: IrFrame) -> Result<(), TrySendError> {
        self.with_frames(|frames| frames.push_back(frame).map_err(TrySendError))
    }

    pub fn try_receive(&self) -> Result<IrFrame, TryReceiveError> {
        self.with_frames(|frames| frames.pop_front().ok_or(TryReceiveError))
    }

    /// Drop every pending frame
    pub fn clear(&self) {
        self.with_frames(|frames| frames.clear());
    }

    pub fn len(&self) -> usize {
        self.with_frames(|frames| frames.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for FrameMailbox<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct FrameSender<'a, const SIZE: usize> {
    mailbox: &'a FrameMailbox<SIZE>,
}

impl<const SIZE: usize> FrameSender<'_, SIZE> {
    pub fn try_send(&self, frame: IrFrame) -> Result<(), TrySendError> {
        self.mailbox.try_send(frame)
    }
}

#[derive(Clone, Copy)]
pub struct FrameReceiver<'a, const SIZE: usize> {
    mailbox: &'a FrameMailbox<SIZE>,
}

impl<const SIZE: usize> FrameReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<IrFrame, TryReceiveError> {
        self.mailbox.try_receive()
    }
}

impl<const SIZE: usize> FrameSource for FrameReceiver<'_, SIZE> {
    fn poll(&mut self) -> Option<IrFrame> {
        self.try_receive().ok()
    }

    fn discard_pending(&mut self) {
        self.mailbox.clear();
    }
}
