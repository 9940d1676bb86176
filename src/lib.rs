pub mod error;
pub mod event;
pub mod node;
pub mod queue;
pub mod sim;
pub mod stack;
pub mod trace;

pub use error::{ContainerKind, Error, Result};
pub use event::{Event, Transcript};
pub use node::{Node, Pid};
pub use queue::Queue;
pub use sim::Simulation;
pub use stack::Stack;
pub use trace::init_tracing;
