//! Fan-out/fan-in assembly of a Program's top-level statements.
//!
//! One worker thread is spawned per top-level element. Each worker runs the same
//! [`parse_node`] dispatch as the sequential path over its own copy of the element and
//! reports back through a shared channel, tagged with the element's index. The
//! coordinator slots completions by index, so the body comes back in document order
//! no matter which worker finishes first.
//!
//! The first failed completion to arrive wins. The coordinator then raises the
//! cancellation flag and drops the receiver. Cancellation is best effort: a worker checks
//! the flag before it starts and again before it reports, but one already inside
//! `parse_node` runs to the end. The guarantee is that nothing reported after the first
//! failure reaches the caller. With a deadline configured, the coordinator gives up with
//! [`ParseError::Timeout`] once the deadline has passed, even if completions are waiting.

use super::{check_program_kind, dense_elements, parse_node, position, ParseError};
use crate::ast::{Located, LocatedNode, Program};
use crate::config::Config;
use crate::tree::TreeView;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// A worker's report for one top-level element
struct Completion {
    index: usize,
    result: Result<LocatedNode, ParseError>,
}

/// Assemble a `Program`, parsing each top-level statement on its own thread
pub fn parse_program_concurrently(
    view: TreeView<'_>,
    config: &Config,
) -> Result<Located<Program>, ParseError> {
    check_program_kind(view)?;
    let position = position(view, "Program")?;
    let elements = dense_elements(view, "Program", "body")?;

    let total = elements.len();
    if total == 0 {
        return Ok(Located::new(Program { body: Vec::new() }, position));
    }

    let deadline = config.deadline.map(|limit| Instant::now() + limit);
    let cancelled = Arc::new(AtomicBool::new(false));
    let (sender, receiver) = mpsc::channel();

    crate::debug_println!("spawning {} assembly tasks", total);

    for (index, element) in elements.iter().enumerate() {
        let element = element.clone();
        let sender = sender.clone();
        let cancelled = Arc::clone(&cancelled);

        thread::spawn(move || {
            if cancelled.load(Ordering::Acquire) {
                crate::debug_task!(index, "skipped, assembly already failed");
                return;
            }
            let result = parse_node(TreeView::new(&element));
            if cancelled.load(Ordering::Acquire) {
                crate::debug_task!(index, "finished after the assembly failed, discarding");
                return;
            }
            // The coordinator hangs up after the first failure or a timeout
            let _ = sender.send(Completion { index, result });
        });
    }
    drop(sender);

    let body = collect(&receiver, total, deadline).map_err(|error| {
        cancelled.store(true, Ordering::Release);
        error
    })?;

    Ok(Located::new(Program { body }, position))
}

/// Drain exactly `total` completions and rebuild them in index order
fn collect(
    receiver: &Receiver<Completion>,
    total: usize,
    deadline: Option<Instant>,
) -> Result<Vec<LocatedNode>, ParseError> {
    let mut slots: Vec<Option<LocatedNode>> = vec![None; total];
    let mut received = 0;

    while received < total {
        let completion = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                let next = if now >= deadline {
                    Err(RecvTimeoutError::Timeout)
                } else {
                    receiver.recv_timeout(deadline - now)
                };
                match next {
                    Ok(completion) => completion,
                    Err(RecvTimeoutError::Timeout) => {
                        crate::debug_println!(
                            "deadline reached with {}/{} tasks complete",
                            received,
                            total
                        );
                        return Err(ParseError::Timeout);
                    }
                    Err(RecvTimeoutError::Disconnected) => return Err(missing_completion(&slots)),
                }
            }
            None => match receiver.recv() {
                Ok(completion) => completion,
                Err(_) => return Err(missing_completion(&slots)),
            },
        };

        match completion.result {
            Ok(node) => {
                slots[completion.index] = Some(node);
                received += 1;
            }
            Err(error) => {
                crate::debug_task!(
                    completion.index,
                    "failed, abandoning remaining tasks: {}",
                    error
                );
                return Err(error);
            }
        }
    }

    Ok(slots.into_iter().flatten().collect())
}

/// A worker went away without reporting (it panicked)
fn missing_completion(slots: &[Option<LocatedNode>]) -> ParseError {
    let index = slots.iter().position(Option::is_none).unwrap_or(slots.len());
    ParseError::malformed("Program", format!("body[{}]", index))
}
