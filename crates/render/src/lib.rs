//! Substitution engine and output projectors for kvault
//!
//! Data flows `SourceFile` -> [`Substituter`] -> resolved text -> projector
//! -> [`RenderedDocument`](kvault_core::RenderedDocument) -> [`manifest::render`].

pub mod assemble;
pub mod manifest;
pub mod project;
pub mod substitute;

pub use assemble::{assemble_all, frame_inline_output};
pub use project::{project_config_map, project_secret};
pub use substitute::Substituter;
