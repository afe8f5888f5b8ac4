//! Wire-adapter views — per-kind serialization of entities into
//! transmittable token streams.
//!
//! The view is selected by the entity's kind payload, not by inspecting
//! types at the call site: `EntityWire` matches on `EntityKind` once,
//! inside `tokenize`. Handlers only decide summary vs. full detail.

use crate::entity::{Entity, EntityKind};
use crate::types::Tick;

/// Anything the connection can transmit as a structured token stream.
pub trait Tokenizable {
    fn tokenize(&self) -> Vec<String>;
}

/// Server-side context threaded into wire views.
#[derive(Debug, Clone, Copy)]
pub struct WireContext {
    pub tick: Tick,
}

/// A borrowed, transmission-ready view of one entity.
///
/// `full_detail = false` yields the summary stream (kind, id, name,
/// position); full detail appends the kind-specific stats and the world
/// tick the view was taken at.
#[derive(Debug)]
pub struct EntityWire<'a> {
    entity:      &'a Entity,
    tick:        Tick,
    full_detail: bool,
}

impl<'a> EntityWire<'a> {
    pub fn new(entity: &'a Entity, ctx: &WireContext, full_detail: bool) -> Self {
        Self {
            entity,
            tick: ctx.tick,
            full_detail,
        }
    }
}

impl Tokenizable for EntityWire<'_> {
    fn tokenize(&self) -> Vec<String> {
        let e = self.entity;
        let mut tokens = vec![
            e.kind_name().to_string(),
            e.id.to_string(),
            e.name.clone(),
            e.position.x.to_string(),
            e.position.y.to_string(),
        ];
        if self.full_detail {
            match e.kind {
                EntityKind::Player {
                    hitpoints,
                    max_hitpoints,
                    level,
                } => {
                    tokens.push(hitpoints.to_string());
                    tokens.push(max_hitpoints.to_string());
                    tokens.push(level.to_string());
                }
                EntityKind::Dragon {
                    hitpoints,
                    max_hitpoints,
                    hoard,
                } => {
                    tokens.push(hitpoints.to_string());
                    tokens.push(max_hitpoints.to_string());
                    tokens.push(hoard.to_string());
                }
            }
            tokens.push(self.tick.to_string());
        }
        tokens
    }
}
