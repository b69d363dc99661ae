//! Ready queue and ordering policies.
//!
//! Provides the comparators that decide which ready process runs next
//! (arrival, burst, remaining time, priority, predicted burst) and the
//! bounded ready queue that algorithms resort before each selection.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{OrderingPolicy, ReadyQueue};
//! use u_cpusched::ProcessRecord;
//!
//! let mut queue = ReadyQueue::with_capacity(10);
//! queue.enqueue(ProcessRecord::new("P1", 0, 4).with_priority(3)).unwrap();
//! queue.enqueue(ProcessRecord::new("P2", 0, 6).with_priority(1)).unwrap();
//! queue.reorder(OrderingPolicy::ByPriority);
//! assert_eq!(queue.front().unwrap().id, "P2");
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod policy;
mod queue;

pub use policy::OrderingPolicy;
pub use queue::ReadyQueue;
