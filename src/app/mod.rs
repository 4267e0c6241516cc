// Messager - app/mod.rs
//
// Application layer: the message catalog and its logging sinks.
// Dependencies: core, platform::fs.

pub mod catalog;
pub mod sink;
