pub mod input;
pub mod model;
pub mod prime;
pub mod store;

#[cfg(test)]
mod store_test;

pub use input::{expand_key, parse_args, parse_task_spec, NewTask, ParsedInput};
pub use model::stats::TaskStats;
pub use model::task::{ParsePriorityError, Priority, Task, TaskId};
pub use prime::{is_prime, primes_in};
pub use store::TaskStore;
