//! Event handler implementations for EventLoop.
//!
//! - `input`: keyboard input, buffer editing and engine dispatch
//! - `rendering`: terminal rendering
//!
//! Both are `impl EventLoop` blocks in separate files.

mod input;
mod rendering;
