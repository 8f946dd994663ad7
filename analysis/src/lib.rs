#![doc = include_str!("../README.md")]

mod group;
mod strategy;
pub mod summary;

pub use group::{group_records, max_thread_count, Group, Optimum};
pub use strategy::{ByConfiguration, ByMatrixSize, Configuration, GroupingStrategy};
