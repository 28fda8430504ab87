use tracing::debug;

use crate::context::PageContext;
use crate::intent::types::{ResolvedIntent, TargetMethod};
use crate::selector::generators;
use crate::selector::tables::{Node, Table, GLOBAL_TABLES, PAGE_TABLES};

/// Map a dot-delimited semantic key plus page context to a concrete
/// selector chain. Missing tables or segments yield `None`, never a
/// panic.
pub fn resolve(semantic_key: &str, ctx: &PageContext) -> Option<String> {
    let mut segments = semantic_key.split('.').filter(|s| !s.is_empty());
    let first = segments.next()?;

    let table = table_for(first, ctx)?;
    let mut node: Option<&Node> = None;
    let mut children = table.root;

    for segment in segments {
        match children.iter().find(|(name, _)| *name == segment) {
            Some((_, child)) => {
                node = Some(child);
                children = match child {
                    Node::Branch(inner) => inner,
                    Node::Leaf(_) => &[],
                };
            }
            None => {
                debug!(key = semantic_key, segment, "selector segment missing");
                return None;
            }
        }
    }

    match node {
        Some(Node::Leaf(selector)) => Some((*selector).to_string()),
        // A bare table name or a branch is not addressable.
        _ => None,
    }
}

/// Pick the table the first key segment names. Header/footer/modal are
/// global; page tables additionally require the current route to match
/// (case-insensitive substring, home matching the root path).
fn table_for(name: &str, ctx: &PageContext) -> Option<&'static Table> {
    if let Some(table) = GLOBAL_TABLES.iter().copied().find(|t| t.name == name) {
        return Some(table);
    }

    let table = PAGE_TABLES.iter().copied().find(|t| t.name == name)?;
    let on_page = if table.name == "home" {
        ctx.is_home()
    } else {
        ctx.route_contains(table.name)
    };
    on_page.then_some(table)
}

/// Selector for a resolved intent, honoring its lookup method. `direct`
/// and `complex` intents treat the target as a semantic key.
pub fn for_intent(intent: &ResolvedIntent, ctx: &PageContext) -> Option<String> {
    match intent.method {
        TargetMethod::ByIndex => intent.param_index("index").map(generators::by_index),
        TargetMethod::ById => intent
            .param_str("id")
            .or(intent.target.as_deref())
            .map(generators::by_id),
        TargetMethod::ByName => intent.target.as_deref().map(generators::by_name),
        TargetMethod::Direct | TargetMethod::Complex => {
            intent.target.as_deref().and_then(|key| resolve(key, ctx))
        }
    }
}
