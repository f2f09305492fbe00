#![allow(dead_code)]

pub mod contract;
pub mod fixtures;
pub mod mongo_container;
