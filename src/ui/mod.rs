//! Terminal rendering of the analysis form and its results.
//!
//! State is first projected into a plain view model, then drawn by small
//! component functions into ANSI-styled lines. Colors can be switched off,
//! in which case the same lines are returned without escapes.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → FormViewModel → render → ANSI text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types and the result projection
//! - [`renderer`]: Entry points returning the finished text
//! - [`components`]: One renderer per form section
//! - [`helpers`]: Width measurement, escape stripping and chip wrapping
//! - [`theme`]: Built-in and custom palettes, 24-bit color escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_result, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{format_score, FormViewModel, KeywordSection, ResultView};
