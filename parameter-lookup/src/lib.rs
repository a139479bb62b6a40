pub mod configs;
pub mod domain;
pub mod lookup;
pub mod runner;
pub mod storage;
