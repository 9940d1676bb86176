use std::fmt;
use std::iter::FromIterator;
use std::ptr;

use tracing::{debug, warn};

use crate::error::{ContainerKind, Error, Result};
use crate::node::{self, Iter, Link, Node, Pid};

/// FIFO of admitted processes.
///
/// The chain is held entirely through raw links: `head` owns it, `tail`
/// points at its last node, and both are null together. Nodes enter through
/// `Box::into_raw` and leave through `Box::from_raw`, so no `Box` is ever
/// alive while `tail` points into the chain.
///
/// The unsafe code here is checked with `cargo +nightly miri test`.
pub struct Queue {
    head: Link,
    tail: Link,
    len: usize,
}

impl Queue {
    pub fn new() -> Self {
        Queue { head: ptr::null_mut(), tail: ptr::null_mut(), len: 0 }
    }

    /// Admits a new process at the back.
    pub fn enqueue(&mut self, pid: Pid) {
        self.enqueue_node(Node::new(pid));
    }

    /// Takes ownership of an already allocated node and links it after the
    /// current tail.
    pub fn enqueue_node(&mut self, node: Box<Node>) {
        debug_assert!(node.next.is_null());

        let pid = node.pid();
        let new_tail = Box::into_raw(node);

        if self.tail.is_null() {
            self.head = new_tail;
        } else {
            // SAFETY: a non-null tail is the last node of the chain owned by
            // `head`, and we hold `&mut self`.
            unsafe {
                (*self.tail).next = new_tail;
            }
        }

        self.tail = new_tail;
        self.len += 1;
        debug!(pid, len = self.len, "process enqueued");
    }

    /// Detaches the front node and hands it to the caller.
    pub fn dequeue(&mut self) -> Result<Box<Node>> {
        if self.head.is_null() {
            warn!(container = %ContainerKind::Queue, "dequeue on empty queue");
            return Err(Error::EmptyContainer(ContainerKind::Queue));
        }

        // SAFETY: `head` is non-null and owned by this queue; it is cut out of
        // the chain before the box is handed out.
        let (node, next) = unsafe { node::unlink(self.head) };
        self.head = next;
        if self.head.is_null() {
            self.tail = ptr::null_mut();
        }
        self.len -= 1;
        debug!(pid = node.pid(), len = self.len, "process dequeued");
        Ok(node)
    }

    pub fn peek_front(&self) -> Option<Pid> {
        self.front().map(|node| node.pid())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_null()
    }

    /// Identifiers front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.front())
    }

    fn front(&self) -> Option<&Node> {
        unsafe { self.head.as_ref() }
    }
}

impl Default for Queue {
    fn default() -> Self {
        Queue::new()
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        let head = self.head;
        self.head = ptr::null_mut();
        self.tail = ptr::null_mut();
        unsafe { node::drop_chain(head) };
    }
}

impl FromIterator<Pid> for Queue {
    fn from_iter<I: IntoIterator<Item = Pid>>(iterable: I) -> Queue {
        let mut queue = Queue::new();
        for pid in iterable {
            queue.enqueue(pid);
        }
        queue
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = Pid;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Display for Queue {
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

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
