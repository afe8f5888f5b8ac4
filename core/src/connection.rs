//! Connection abstraction and scoped message framing.
//!
//! RULE: exactly one logical message may be open on a connection at a
//! time, and it must close exactly once no matter how the handler exits.
//! Handlers never call `begin_message`/`end_message` themselves — they
//! go through `MessageFrame`, whose `Drop` closes the frame on every
//! path, early returns and unwinds included.

use crate::wire::Tokenizable;

/// One stateful client session, as seen by the command layer.
///
/// Implementations buffer tokens between `begin_message` and
/// `end_message` and make the whole message visible atomically on close;
/// a client never observes a half-framed response.
pub trait Connection {
    /// Open a message frame. Must not be called while a frame is open.
    fn begin_message(&mut self);

    /// Close the current frame, flushing the buffered tokens as one
    /// message. Must be called exactly once per `begin_message`.
    fn end_message(&mut self);

    /// Queue one raw text token into the open frame.
    fn send(&mut self, token: &str);

    /// Queue a structured token stream into the open frame.
    fn send_tokenizable(&mut self, tok: &dyn Tokenizable) {
        for token in tok.tokenize() {
            self.send(&token);
        }
    }
}

/// Scoped message frame. Constructing it opens the frame; dropping it
/// closes the frame. All sending goes through the guard, so nothing can
/// be transmitted outside a frame.
pub struct MessageFrame<'a> {
    conn: &'a mut dyn Connection,
}

impl<'a> MessageFrame<'a> {
    pub fn open(conn: &'a mut dyn Connection) -> Self {
        conn.begin_message();
        Self { conn }
    }

    pub fn send(&mut self, token: &str) {
        self.conn.send(token);
    }

    pub fn send_tokenizable(&mut self, tok: &dyn Tokenizable) {
        self.conn.send_tokenizable(tok);
    }
}

impl Drop for MessageFrame<'_> {
    fn drop(&mut self) {
        self.conn.end_message();
    }
}
