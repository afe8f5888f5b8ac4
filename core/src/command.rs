//! Client-command dispatch.
//!
//! Per request: split the raw line into a keyword and a remainder, look
//! the keyword up in the static handler table, run the handler's routine
//! inside exactly one message frame. The frame is guard-scoped, so it
//! closes on every exit path.
//!
//! RULE: a malformed or unanswerable request is a framed `ans:invalid`
//! response plus a status for the log — never a propagated error, never
//! fatal to the connection.

use crate::connection::{Connection, MessageFrame};
use crate::protocol;
use crate::types::EntityId;
use crate::wire::EntityWire;
use crate::world::World;
use std::collections::HashMap;

/// Outcome of one handler routine, consumed by the dispatcher's log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    /// The routine ran to completion. The trace is a human-readable
    /// account of what was answered — including "not found" answers,
    /// which are normal responses, not failures.
    Completed { trace: String },

    /// The request was malformed and answered with the invalid token.
    /// Handled locally; the connection stays up.
    Rejected,
}

impl CommandStatus {
    pub fn is_rejected(&self) -> bool {
        matches!(self, CommandStatus::Rejected)
    }
}

/// One registered command. The keyword is fixed at registration and
/// matched exactly, case-sensitive.
pub trait ClientCommand: Send {
    fn keyword(&self) -> &'static str;

    /// Type-specific routine, run against the remainder of the request
    /// line. All transmission happens through the frame the routine
    /// opens; the routine must not mutate world state unless the command
    /// is defined to.
    fn routine(&self, world: &mut World, args: &str, conn: &mut dyn Connection) -> CommandStatus;
}

/// Static keyword → handler table.
pub struct CommandDispatcher {
    handlers: HashMap<&'static str, Box<dyn ClientCommand>>,
}

impl CommandDispatcher {
    /// The full production table. Commands are registered here and
    /// nowhere else.
    pub fn new() -> Self {
        let mut dispatcher = Self {
            handlers: HashMap::new(),
        };
        dispatcher.register(Box::new(GetEntityCommand));
        dispatcher
    }

    pub fn register(&mut self, command: Box<dyn ClientCommand>) {
        let keyword = command.keyword();
        let previous = self.handlers.insert(keyword, command);
        debug_assert!(previous.is_none(), "keyword {keyword:?} registered twice");
    }

    /// Dispatch one raw request line. Exactly one message frame is
    /// opened and closed on the connection, whatever the outcome.
    pub fn dispatch(
        &self,
        world: &mut World,
        line: &str,
        conn: &mut dyn Connection,
    ) -> CommandStatus {
        let line = line.trim_end_matches(['\r', '\n']);
        let (keyword, args) = match line.split_once(' ') {
            Some((keyword, rest)) => (keyword, rest),
            None => (line, ""),
        };

        match self.handlers.get(keyword) {
            Some(handler) => {
                let status = handler.routine(world, args, conn);
                match &status {
                    CommandStatus::Completed { trace } => {
                        log::debug!("{keyword}: {trace}");
                    }
                    CommandStatus::Rejected => {
                        log::warn!("{keyword}: rejected malformed request {args:?}");
                    }
                }
                status
            }
            None => {
                // Unknown keyword: answered by the dispatcher itself,
                // still as one well-formed frame.
                let mut frame = MessageFrame::open(conn);
                frame.send(&protocol::invalid_response());
                log::warn!("unknown command keyword {keyword:?}");
                CommandStatus::Rejected
            }
        }
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// `GET_ENTITY <id>` — answer with the summary wire view of the entity.
///
/// Parse failure and unknown id both answer `ans:invalid`; they differ
/// only in status. "Not registered" is a normal answer, not a rejection.
pub struct GetEntityCommand;

impl ClientCommand for GetEntityCommand {
    fn keyword(&self) -> &'static str {
        protocol::GET_ENTITY
    }

    fn routine(&self, world: &mut World, args: &str, conn: &mut dyn Connection) -> CommandStatus {
        let mut frame = MessageFrame::open(conn);

        let id: EntityId = match args.trim().parse() {
            Ok(id) => id,
            Err(_) => {
                frame.send(&protocol::invalid_response());
                return CommandStatus::Rejected;
            }
        };

        match world.registry().lookup(id) {
            Some(entity) => {
                let ctx = world.wire_context();
                frame.send_tokenizable(&EntityWire::new(entity, &ctx, false));
                CommandStatus::Completed {
                    trace: format!("sent entity {id}"),
                }
            }
            None => {
                frame.send(&protocol::invalid_response());
                CommandStatus::Completed {
                    trace: format!("entity {id} is not registered"),
                }
            }
        }
    }
}
