#![forbid(unsafe_code)]

//! Attribute-driven stylesheet generation for interactive graph explorers (headless).
//!
//! Given an attributed directed graph, a set of style controls, and the element the user last
//! tapped, [`StyleEngine`] produces an ordered list of selector/style rules for a
//! Cytoscape-style renderer, plus a plain-text analytics report for the tapped element.
//!
//! Design goals:
//! - deterministic output (same inputs, byte-identical stylesheet JSON)
//! - no hidden state: per-session selection travels in an explicit [`Session`]
//! - invalid visual input degrades to defaults instead of failing a run

pub mod assemble;
pub mod classify;
pub mod color;
pub mod controls;
pub mod encode;
pub mod engine;
pub mod error;
pub mod inspector;
pub mod model;
pub mod overlay;
pub mod palette;
pub mod session;
pub mod style;
pub mod utils;
pub mod validate;

pub use assemble::{StylesheetParts, assemble};
pub use classify::{AttributeColumns, classify};
pub use color::Rgb;
pub use controls::StyleControls;
pub use engine::{RunOutput, StyleEngine};
pub use error::{Error, Result};
pub use model::{AttrValue, EdgeRow, GraphModel, NodeTable, Row};
pub use palette::{Palette, UnknownPalette};
pub use session::{Selection, Session, TapEvent};
pub use style::{Literal, Selector, StyleRule, Stylesheet};
pub use validate::{validate_color, validate_px_or_percent};

#[cfg(test)]
mod tests;
