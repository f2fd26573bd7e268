//! Materialize project skeletons: directory trees of empty placeholder files
//! plus a README describing them.

pub mod application;
pub mod cli;
pub mod config;
pub mod ext;
pub mod filesystem;
pub mod readme;
