use std::fmt;
use std::ptr;

use tracing::{debug, warn};

use crate::error::{ContainerKind, Error, Result};
use crate::node::{self, Iter, Link, Node, Pid};

/// LIFO history of finished processes.
pub struct Stack {
    top: Link,
    len: usize,
}

impl Stack {
    pub fn new() -> Self {
        Stack { top: ptr::null_mut(), len: 0 }
    }

    /// Takes ownership of `node` and makes it the new top.
    pub fn push(&mut self, mut node: Box<Node>) {
        node.next = self.top;
        debug!(pid = node.pid(), len = self.len + 1, "process pushed");
        self.top = Box::into_raw(node);
        self.len += 1;
    }

    /// Detaches the top node and hands it to the caller.
    pub fn pop(&mut self) -> Result<Box<Node>> {
        if self.top.is_null() {
            warn!(container = %ContainerKind::Stack, "pop on empty stack");
            return Err(Error::EmptyContainer(ContainerKind::Stack));
        }

        // SAFETY: `top` is non-null and owned by this stack.
        let (node, next) = unsafe { node::unlink(self.top) };
        self.top = next;
        self.len -= 1;
        debug!(pid = node.pid(), len = self.len, "process popped");
        Ok(node)
    }

    pub fn peek(&self) -> Option<Pid> {
        self.first().map(|node| node.pid())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_null()
    }

    /// Identifiers from top to bottom, most recent first.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.first())
    }

    fn first(&self) -> Option<&Node> {
        unsafe { self.top.as_ref() }
    }
}

impl Default for Stack {
    fn default() -> Self {
        Stack::new()
    }
}

impl Drop for Stack {
    fn drop(&mut self) {
        let top = self.top;
        self.top = ptr::null_mut();
        unsafe { node::drop_chain(top) };
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = Pid;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, pid) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", pid)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
