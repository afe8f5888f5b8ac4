//! One client session: lines in, framed messages out.
//!
//! The session thread reads request lines and dispatches each one while
//! holding the world lock; its own requests are serialized, other
//! sessions only wait for the lock, never for this client's socket.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;
use std::sync::{Arc, Mutex};
use wyrmgrid_core::command::CommandDispatcher;
use wyrmgrid_core::connection::Connection;
use wyrmgrid_core::world::World;

/// `Connection` over a TCP stream. Tokens are buffered between
/// `begin_message` and `end_message` and written as one line on close,
/// so the client sees every response atomically. A write failure marks
/// the session dead; the read loop notices and winds the session down.
pub struct TcpConnection {
    stream:     TcpStream,
    buffer:     Vec<String>,
    in_message: bool,
    dead:       bool,
}

impl TcpConnection {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            buffer: Vec::new(),
            in_message: false,
            dead: false,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }
}

impl Connection for TcpConnection {
    fn begin_message(&mut self) {
        debug_assert!(!self.in_message, "message frame opened twice");
        self.buffer.clear();
        self.in_message = true;
    }

    fn end_message(&mut self) {
        debug_assert!(self.in_message, "message frame closed without open");
        self.in_message = false;
        let line = format!("{}\n", self.buffer.join(" "));
        self.buffer.clear();
        if self.dead {
            return;
        }
        if let Err(e) = self
            .stream
            .write_all(line.as_bytes())
            .and_then(|()| self.stream.flush())
        {
            log::warn!("write failed, marking session dead: {e}");
            self.dead = true;
        }
    }

    fn send(&mut self, token: &str) {
        debug_assert!(self.in_message, "send outside a message frame");
        self.buffer.push(token.to_string());
    }
}

pub fn run(world: Arc<Mutex<World>>, stream: TcpStream) {
    let peer = stream
        .peer_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "<unknown>".to_string());
    let reader = match stream.try_clone() {
        Ok(clone) => BufReader::new(clone),
        Err(e) => {
            log::warn!("cannot clone stream for {peer}: {e}");
            return;
        }
    };
    let dispatcher = CommandDispatcher::new();
    let mut conn = TcpConnection::new(stream);
    log::info!("session {peer} opened");

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("read failed for {peer}: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let mut guard = match world.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = dispatcher.dispatch(&mut guard, &line, &mut conn);
        drop(guard);
        if conn.is_dead() {
            break;
        }
    }
    log::info!("session {peer} closed");
}
