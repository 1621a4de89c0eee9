//! `polydemo` command line: scenario drivers and their presentation.
//!
//! Drivers build structured reports; printing lives only in [`render`].

pub mod config;
pub mod drivers;
pub mod render;
