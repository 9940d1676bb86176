use std::fmt;

use crate::node::Pid;

/// One observable step of a simulation run. The kind and the identifier are
/// what matters; the rendered wording is only for humans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Enqueued(Pid),
    Dequeued(Pid),
    Pushed(Pid),
    Popped(Pid),
    QueueDrained,
    QueueListed(Vec<Pid>),
    StackListed(Vec<Pid>),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Event::Enqueued(pid) => write!(f, "Process {} enqueued successfully.", pid),
            Event::Dequeued(pid) => write!(f, "Process {} dequeued and moved to the stack.", pid),
            Event::Pushed(pid) => write!(f, "Process with PID {} pushed successfully!", pid),
            Event::Popped(pid) => write!(f, "Process popped with PID: {}", pid),
            Event::QueueDrained => f.write_str("The queue is now empty."),
            Event::QueueListed(ref pids) if pids.is_empty() => {
                f.write_str("The process queue is empty!")
            }
            Event::QueueListed(ref pids) => {
                f.write_str("Queue contents:")?;
                write_pids(f, pids)
            }
            Event::StackListed(ref pids) if pids.is_empty() => {
                f.write_str("The process stack is empty!")
            }
            Event::StackListed(ref pids) => {
                f.write_str("Finished process history (stack):")?;
                write_pids(f, pids)
            }
        }
    }
}

fn write_pids(f: &mut fmt::Formatter, pids: &[Pid]) -> fmt::Result {
    for pid in pids {
        write!(f, " {}", pid)?;
    }
    Ok(())
}

/// Ordered record of everything a run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    events: Vec<Event>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { events: Vec::new() }
    }

    pub fn record(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Every listing of the queue or stack, in the order they were printed.
    pub fn listings(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|event| match **event {
            Event::QueueListed(_) | Event::StackListed(_) => true,
            _ => false,
        })
    }
}
