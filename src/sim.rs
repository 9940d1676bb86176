use std::io::Write;

use tracing::{info, instrument};

use crate::error::Result;
use crate::event::{Event, Transcript};
use crate::node::Pid;
use crate::queue::Queue;
use crate::stack::Stack;

/// Drives one lifecycle: admit every process into the queue, move each one
/// onto the finished-process stack, then drain the stack.
pub struct Simulation {
    pids: Vec<Pid>,
    queue: Queue,
    stack: Stack,
}

impl Simulation {
    pub fn new<I: IntoIterator<Item = Pid>>(pids: I) -> Self {
        Simulation {
            pids: pids.into_iter().collect(),
            queue: Queue::new(),
            stack: Stack::new(),
        }
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn into_parts(self) -> (Queue, Stack) {
        (self.queue, self.stack)
    }

    /// Runs the full sequence, writing one status line per event to `out`.
    #[instrument(name = "simulation", skip_all, fields(processes = self.pids.len()))]
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Transcript> {
        let mut transcript = Transcript::new();

        for &pid in &self.pids {
            self.queue.enqueue(pid);
            emit(out, &mut transcript, Event::Enqueued(pid))?;
        }
        emit(out, &mut transcript, Event::QueueListed(self.queue.iter().collect()))?;

        while !self.queue.is_empty() {
            let node = self.queue.dequeue()?;
            let pid = node.pid();
            emit(out, &mut transcript, Event::Dequeued(pid))?;
            self.stack.push(node);
            emit(out, &mut transcript, Event::Pushed(pid))?;
        }
        emit(out, &mut transcript, Event::QueueDrained)?;
        emit(out, &mut transcript, Event::StackListed(self.stack.iter().collect()))?;

        while !self.stack.is_empty() {
            let node = self.stack.pop()?;
            emit(out, &mut transcript, Event::Popped(node.pid()))?;
        }
        emit(out, &mut transcript, Event::StackListed(self.stack.iter().collect()))?;

        info!(events = transcript.len(), "simulation finished");
        Ok(transcript)
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Simulation::new(1..=3)
    }
}

fn emit<W: Write>(out: &mut W, transcript: &mut Transcript, event: Event) -> Result<()> {
    writeln!(out, "{}", event)?;
    transcript.record(event);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::Simulation;
    use crate::event::Event;

    #[test]
    fn empty_run() {
        let mut sim = Simulation::new(Vec::new());
        let mut out = Vec::new();
        let transcript = sim.run(&mut out).unwrap();

        assert_eq!(
            transcript.events(),
            &[
                Event::QueueListed(vec![]),
                Event::QueueDrained,
                Event::StackListed(vec![]),
                Event::StackListed(vec![]),
            ]
        );
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 4);
    }

    #[test]
    fn containers_end_empty() {
        let mut sim = Simulation::new(vec![10, 20]);
        sim.run(&mut Vec::new()).unwrap();
        assert!(sim.queue().is_empty());
        assert!(sim.stack().is_empty());

        // a second run reuses the drained containers
        let transcript = sim.run(&mut Vec::new()).unwrap();
        assert_eq!(
            transcript.listings().cloned().collect::<Vec<_>>(),
            vec![
                Event::QueueListed(vec![10, 20]),
                Event::StackListed(vec![20, 10]),
                Event::StackListed(vec![]),
            ]
        );

        let (queue, stack) = sim.into_parts();
        assert_eq!(queue.len(), 0);
        assert_eq!(stack.len(), 0);
    }
}
