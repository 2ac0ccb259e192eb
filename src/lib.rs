//! Two-player console word game.
//!
//! One player types an original word; then players take turns typing words made
//! from its letters (each letter no more often than it appears), never repeating
//! a word. Whoever is on turn when the countdown hits zero loses.

pub mod config;
pub mod console;
pub mod i18n;
pub mod session;
pub mod timer;
pub mod validation;
