//! IR decoder boundary
//!
//! Demodulation and protocol decoding happen outside this crate. The
//! decoder hands over flat [`IrFrame`]s, and [`FrameFilter`] decides which of
//! them become commands.

mod mailbox;

pub use mailbox::{FrameMailbox, FrameReceiver, FrameSender, TryReceiveError, TrySendError};

use crate::command::Command;

/// Frame flag set by the decoder for auto-repeat frames of a held key
pub const FLAG_REPETITION: u8 = 0x01;

/// Protocol family reported by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Nec,
    Onkyo,
    /// Any other protocol, by decoder-specific id
    Other(u8),
}

/// One decoded remote control frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrFrame {
    pub protocol: Protocol,
    pub address: u16,
    pub flags: u8,
    pub command: u16,
}

impl IrFrame {
    /// Fresh keypress frame
    pub const fn new(protocol: Protocol, address: u16, command: u16) -> Self {
        Self {
            protocol,
            address,
            flags: 0,
            command,
        }
    }

    /// Auto-repeat frame of a held key
    pub const fn repeat(protocol: Protocol, address: u16, command: u16) -> Self {
        Self {
            protocol,
            address,
            flags: FLAG_REPETITION,
            command,
        }
    }

    pub const fn is_repeat(&self) -> bool {
        self.flags != 0
    }
}

/// Why a frame did not produce a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Protocol,
    Address,
    UnknownCode,
    Repeat,
}

/// Accepts frames from the expected remote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameFilter {
    pub protocol: Protocol,
    pub address: u16,
}

impl FrameFilter {
    pub const DEFAULT: Self = Self {
        protocol: Protocol::Nec,
        address: 0,
    };

    /// Map a frame to a command
    ///
    /// Repeat frames only pass for commands that allow auto-repeat.
    pub fn check(&self, frame: &IrFrame) -> Result<Command, Rejection> {
        if frame.protocol != self.protocol {
            return Err(Rejection::Protocol);
        }
        if frame.address != self.address {
            return Err(Rejection::Address);
        }
        let command = Command::from_code(frame.command).ok_or(Rejection::UnknownCode)?;
        if frame.is_repeat() && !command.allows_repeat() {
            return Err(Rejection::Repeat);
        }
        Ok(command)
    }

    pub fn accept(&self, frame: &IrFrame) -> Option<Command> {
        self.check(frame).ok()
    }
}

impl Default for FrameFilter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Poll-style source of decoded frames
pub trait FrameSource {
    /// Take the next frame, if one is available
    fn poll(&mut self) -> Option<IrFrame>;

    /// Drop frames that arrived while the caller was busy
    fn discard_pending(&mut self) {}
}

impl<F: FrameSource + ?Sized> FrameSource for &mut F {
    fn poll(&mut self) -> Option<IrFrame> {
        (**self).poll()
    }

    fn discard_pending(&mut self) {
        (**self).discard_pending();
    }
}
