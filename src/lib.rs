//! pingarr - notification preferences companion
//!
//! pingarr talks to a media request server's REST API and gives you a small
//! native app for managing how the server notifies you: Discord mentions and
//! Telegram messages, per user, validated before anything touches the wire.
//!
//! The server stays the source of truth. pingarr fetches a settings
//! snapshot, renders forms bound to it, posts the subset of fields each form
//! owns, and refetches after every submit so the display always reconciles
//! with what the server actually stored.

pub mod api;
pub mod config;
pub mod domain;
pub mod form;
pub mod gui;
pub mod i18n;

pub use domain::*;
