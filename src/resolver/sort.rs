//! Load-order computation using depth-first search
//!
//! DFS with three-color marking over the shim graph:
//!
//! 1. **WHITE** (unvisited): name hasn't been processed
//! 2. **GRAY** (in progress): name is in the current recursion stack
//! 3. **BLACK** (done): name and all its dependencies are ordered
//!
//! Revisiting a GRAY name means the current path closed on itself; the
//! error carries the offending chain (`a -> b -> a`). Post-order insertion
//! guarantees every dependency appears strictly before its dependents, and
//! the BLACK set guarantees each name appears exactly once no matter how
//! many dependents reference it. Sibling dependencies are visited in
//! declared order, so the result is deterministic.

use std::collections::HashSet;

use crate::config::LoaderConfig;
use crate::error::{Result, ShimpackError};

/// Context threaded through the DFS
struct SortContext<'a> {
    config: &'a LoaderConfig,
    /// Fully processed names (BLACK)
    visited: HashSet<String>,
    /// Names in the current recursion stack (GRAY)
    in_progress: HashSet<String>,
    /// Current path, for cycle chain reporting
    stack: Vec<String>,
    /// Result in dependency order
    order: Vec<String>,
}

/// Compute the load order for a set of roots
///
/// Returns every module reachable from `roots`, dependencies strictly
/// before dependents, each name exactly once, roots processed in the order
/// given.
///
/// # Errors
///
/// `UnknownModule` if any root or transitive dependency does not resolve;
/// `CyclicDependency` (with the chain) if the reachable graph has a cycle.
pub fn load_order(config: &LoaderConfig, roots: &[String]) -> Result<Vec<String>> {
    let mut ctx = SortContext {
        config,
        visited: HashSet::new(),
        in_progress: HashSet::new(),
        stack: Vec::new(),
        order: Vec::new(),
    };

    for root in roots {
        if !ctx.visited.contains(root) {
            visit(&mut ctx, root)?;
        }
    }

    Ok(ctx.order)
}

fn visit(ctx: &mut SortContext, name: &str) -> Result<()> {
    // GRAY revisit: the current path closed on itself
    if ctx.in_progress.contains(name) {
        return Err(ShimpackError::cyclic_dependency(cycle_chain(
            &ctx.stack, name,
        )));
    }

    if ctx.visited.contains(name) {
        return Ok(());
    }

    if !ctx.config.is_resolvable(name) {
        return Err(ShimpackError::unknown_module(name));
    }

    ctx.in_progress.insert(name.to_string());
    ctx.stack.push(name.to_string());

    let deps = ctx.config.deps_of(name).to_vec();
    for dep in &deps {
        visit(ctx, dep)?;
    }

    ctx.stack.pop();
    ctx.in_progress.remove(name);
    ctx.visited.insert(name.to_string());
    ctx.order.push(name.to_string());

    Ok(())
}

/// Format the cycle chain from the point the path first entered `name`
fn cycle_chain(stack: &[String], name: &str) -> String {
    let start = stack.iter().position(|n| n == name).unwrap_or(0);
    let mut chain: Vec<&str> = stack[start..].iter().map(String::as_str).collect();
    chain.push(name);
    chain.join(" -> ")
}
