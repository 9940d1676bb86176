use std::fmt;
use std::ptr;

/// Opaque process identifier.
pub type Pid = i32;

/// Owning link. A non-null link came from `Box::into_raw` and belongs to
/// whichever container holds the node it is stored in.
pub(crate) type Link = *mut Node;

/// A simulated process. The same node is handed from the queue to the stack;
/// only the allocation moves, never the payload.
pub struct Node {
    pid: Pid,
    pub(crate) next: Link,
}

impl Node {
    pub fn new(pid: Pid) -> Box<Node> {
        Box::new(Node { pid, next: ptr::null_mut() })
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Node").field("pid", &self.pid).finish()
    }
}

/// Reclaims the node behind `link` and returns it unlinked, along with the
/// link that followed it.
///
/// # Safety
///
/// `link` must be non-null, come from `Box::into_raw`, and not be reachable
/// from anywhere the caller keeps using.
pub(crate) unsafe fn unlink(link: Link) -> (Box<Node>, Link) {
    let mut node = Box::from_raw(link);
    let next = node.next;
    node.next = ptr::null_mut();
    (node, next)
}

/// Frees a chain one node at a time.
///
/// # Safety
///
/// Same as [`unlink`] for every node in the chain.
pub(crate) unsafe fn drop_chain(mut cur_link: Link) {
    while !cur_link.is_null() {
        let (_node, next) = unlink(cur_link);
        cur_link = next;
    }
}

/// Read-only walk along a chain of nodes, yielding identifiers.
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(first: Option<&'a Node>) -> Self {
        Iter { next: first }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Pid;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // The container is borrowed for 'a, so every later node stays put.
            self.next = unsafe { node.next.as_ref() };
            node.pid
        })
    }
}
