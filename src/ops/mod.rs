pub mod board;
pub mod error;
pub mod search;
pub mod task_list;
pub mod undo_stack;
pub mod urgent_queue;
