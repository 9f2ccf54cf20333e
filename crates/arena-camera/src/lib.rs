//! `arena-camera`: camera composition per view mode.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`mode`]      | `ViewMode`                                                  |
//! | [`pose`]      | `CameraPose`, `OrbitLimits`, `Viewport`, `Layout`, `CameraFrame` |
//! | [`strategy`]  | `CameraStrategy` trait and one implementation per mode      |
//! | [`rig`]       | `CameraRig`: active mode, viewer pose, dispatch table      |
//! | [`heatmap`]   | dwell aggregation and heat cells                            |
//!
//! # Frame ordering
//!
//! `CameraRig::compose` reads agent poses, so the session calls it after the
//! motion tick of the same frame.

pub mod heatmap;
pub mod mode;
pub mod pose;
pub mod rig;
pub mod strategy;


pub use heatmap::{HeatCell, aggregate_dwell, heat_cells};
pub use mode::ViewMode;
pub use pose::{CameraFrame, CameraPose, Layout, OrbitLimits, Viewport};
pub use rig::CameraRig;
pub use strategy::{CameraInput, CameraStrategy};
