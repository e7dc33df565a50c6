use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;

use crate::application::SelectionEngine;
use crate::domain::value_objects::NodeId;
use crate::error::{CanopyError, CanopyResult};
use crate::infrastructure::{JsonEventSink, TracingEventSink};

use super::{build_engine, print_document, print_tree, CommandContext};

/// One scripted engine operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Check(NodeId),
    Uncheck(NodeId),
    /// Direct click: indeterminate or unchecked becomes checked
    Click(NodeId),
    Expand(NodeId),
    Collapse(NodeId),
    Select(NodeId),
    Deselect(NodeId),
    CheckAll,
    UncheckAll,
    Invert,
}

impl Operation {
    /// Run against the engine; `true` when the state changed
    pub fn apply(&self, engine: &mut SelectionEngine) -> CanopyResult<bool> {
        match self {
            Operation::Check(id) => engine.toggle_check(id.as_str(), true),
            Operation::Uncheck(id) => engine.toggle_check(id.as_str(), false),
            Operation::Click(id) => engine.click_check(id.as_str()),
            Operation::Expand(id) => engine.toggle_expand(id.as_str(), true),
            Operation::Collapse(id) => engine.toggle_expand(id.as_str(), false),
            Operation::Select(id) => engine.toggle_select(id.as_str(), true),
            Operation::Deselect(id) => engine.toggle_select(id.as_str(), false),
            Operation::CheckAll => Ok(engine.check_all()),
            Operation::UncheckAll => Ok(engine.uncheck_all()),
            Operation::Invert => Ok(engine.invert()),
        }
    }
}

impl FromStr for Operation {
    type Err = CanopyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| CanopyError::InvalidOperation {
            input: s.to_string(),
            message: message.to_string(),
        };

        let (verb, id) = match s.split_once(':') {
            Some((verb, id)) => (verb, Some(id)),
            None => (s, None),
        };

        let bulk = match verb {
            "check-all" => Some(Operation::CheckAll),
            "uncheck-all" => Some(Operation::UncheckAll),
            "invert" => Some(Operation::Invert),
            _ => None,
        };
        if let Some(op) = bulk {
            return match id {
                None => Ok(op),
                Some(_) => Err(invalid("bulk operations take no node id")),
            };
        }

        let id = match id {
            Some(id) if !id.is_empty() => NodeId::from(id),
            _ => return Err(invalid("expected VERB:ID")),
        };
        match verb {
            "check" => Ok(Operation::Check(id)),
            "uncheck" => Ok(Operation::Uncheck(id)),
            "click" => Ok(Operation::Click(id)),
            "expand" => Ok(Operation::Expand(id)),
            "collapse" => Ok(Operation::Collapse(id)),
            "select" => Ok(Operation::Select(id)),
            "deselect" => Ok(Operation::Deselect(id)),
            _ => Err(invalid(
                "unknown verb (expected check, uncheck, click, expand, collapse, select, deselect, check-all, uncheck-all or invert)",
            )),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Check(id) => write!(f, "check:{}", id),
            Operation::Uncheck(id) => write!(f, "uncheck:{}", id),
            Operation::Click(id) => write!(f, "click:{}", id),
            Operation::Expand(id) => write!(f, "expand:{}", id),
            Operation::Collapse(id) => write!(f, "collapse:{}", id),
            Operation::Select(id) => write!(f, "select:{}", id),
            Operation::Deselect(id) => write!(f, "deselect:{}", id),
            Operation::CheckAll => f.write_str("check-all"),
            Operation::UncheckAll => f.write_str("uncheck-all"),
            Operation::Invert => f.write_str("invert"),
        }
    }
}

pub fn cmd_apply(
    ctx: &CommandContext,
    tree: &std::path::Path,
    ops: &[Operation],
    filter: Option<&str>,
) -> Result<()> {
    let mut engine = build_engine(ctx, tree, false)?.with_event_sink(Arc::new(TracingEventSink));
    if ctx.json {
        engine = engine.with_event_sink(Arc::new(JsonEventSink::stdout()));
    }

    for op in ops {
        let changed = op.apply(&mut engine)?;
        if !changed && !ctx.json {
            eprintln!("note: '{}' left the state unchanged", op);
        }
    }

    if let Some(query) = filter {
        engine.apply_filter(query);
    }

    if ctx.json {
        print_document(&engine)?;
    } else {
        print_tree(ctx, &engine);
    }
    Ok(())
}
