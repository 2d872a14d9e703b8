pub mod bus;
pub mod collection;
pub mod config;
pub mod dashboard;
pub mod data_storage;
pub mod formatter;
pub mod gpa;
pub mod habits;
pub mod id;
pub mod jobs;
pub mod marketplace;
pub mod messages;
pub mod money;
pub mod notify;
pub mod schedule;
pub mod shell;
pub mod storage;
pub mod timer;
pub mod todo;
pub mod view;
