//! Project catalog and tag filter for the portfolio site.
//!
//! This crate holds everything about the project grid that does not need a
//! browser: the typed project records, the tag index derived from them, the
//! filter state machine, and the pure render pass that turns a filtered subset
//! into display items. The site crate owns the DOM and only wires clicks to
//! [`filter::ProjectFilter::select_tag`] and pushes the produced controls and
//! cards into its own view state through the [`filter::ControlHost`] and
//! [`filter::RenderTarget`] seams.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`record`] | `ProjectRecord` and its validated construction |
//! | [`catalog`] | Fixed ordered catalog, JSON loading, `TagIndex` derivation |
//! | [`filter`] | `FilterState`, `ProjectFilter`, host/target traits |
//! | [`render`] | Display items for the project grid |
//! | [`error`] | `CatalogError` |
//! | [`consts`] | Sentinel tag and card animation constants |

pub mod catalog;
pub mod consts;
pub mod error;
pub mod filter;
pub mod record;
pub mod render;

pub use catalog::{Catalog, TagIndex};
pub use error::CatalogError;
pub use filter::{ControlHost, FilterControl, FilterState, ProjectFilter, RenderTarget};
pub use record::{ProjectId, ProjectRecord};
pub use render::{ProjectCard, render};
