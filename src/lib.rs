//! desk_pet — a terminal desktop pet that chases the mouse cursor and fires
//! tears on click.
//!
//! The simulation lives in [`compute`] as pure functions over the types in
//! [`entities`]; [`display`] translates state into terminal commands and
//! [`config`] is the property sink for external tunables.

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod geometry;
