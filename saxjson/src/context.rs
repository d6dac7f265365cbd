// SPDX-License-Identifier: Apache-2.0

//! Nesting context tracking for the dispatch loop.

use alloc::vec::Vec;

/// One level of nesting.
///
/// Objects use two markers: `ObjectExpectKey` sits on the stack for the whole
/// object, and `ObjectAfterColon` is pushed on top of it by `:` and popped by
/// `,` or `}`. This keeps the key/value alternation on the same stack as the
/// nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Outside of any container. Always at the bottom of the stack.
    TopLevel,
    /// Inside an object, before a member name or its colon.
    ObjectExpectKey,
    /// Inside an object, after a colon.
    ObjectAfterColon,
    /// Inside an array.
    Array,
}

/// LIFO stack of [`Context`] markers that always holds `TopLevel` at the bottom.
#[derive(Debug)]
pub struct ContextStack {
    stack: Vec<Context>,
}

impl ContextStack {
    pub fn new() -> Self {
        let mut stack = Vec::with_capacity(16);
        stack.push(Context::TopLevel);
        Self { stack }
    }

    /// Innermost context.
    pub fn top(&self) -> Context {
        self.stack.last().copied().unwrap_or(Context::TopLevel)
    }

    pub fn push(&mut self, context: Context) {
        log::trace!("push {:?} at depth {}", context, self.stack.len());
        self.stack.push(context);
    }

    /// Pops the innermost context. The `TopLevel` marker is never removed;
    /// `None` means the caller tried to close more than was opened.
    pub fn pop(&mut self) -> Option<Context> {
        if self.stack.len() <= 1 {
            return None;
        }
        let popped = self.stack.pop();
        log::trace!("pop {:?} to depth {}", popped, self.stack.len());
        popped
    }

    /// True when every container has been closed.
    pub fn is_complete(&self) -> bool {
        self.stack == [Context::TopLevel]
    }

    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }
}

impl Default for ContextStack {
    fn default() -> Self {
        Self::new()
    }
}
