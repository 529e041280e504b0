//! Session file naming.

pub mod filename;
