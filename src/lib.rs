// src/lib.rs

//! Boot splash renderer: draws a logo, a status message and a progress bar
//! straight to the display device and updates them from commands written to
//! a named pipe.

pub mod assets;
pub mod backends;
pub mod canvas;
pub mod color;
pub mod config;
pub mod console;
pub mod draw;
pub mod fifo;
pub mod notify;
pub mod protocol;
pub mod signals;
pub mod splash;
