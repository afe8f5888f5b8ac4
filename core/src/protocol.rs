//! Protocol constants — the exact literals spoken on the wire.
//!
//! RULE: no other module hard-codes wire literals. Command keywords are
//! matched exactly, case-sensitive, as registered here.

/// Keyword of the get-entity-by-id command.
pub const GET_ENTITY: &str = "GET_ENTITY";

/// Prefix of every direct answer token.
pub const ANS: &str = "ans:";

/// Answer code for any rejected or unanswerable request.
pub const ANS_INVALID: &str = "invalid";

/// The two-part token sent on every failure path: `ANS` + `ANS_INVALID`.
pub fn invalid_response() -> String {
    format!("{ANS}{ANS_INVALID}")
}
