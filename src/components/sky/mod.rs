//! Animated night-sky background.
//!
//! Three independent effects, each painting its own stacked canvas:
//! - [`Starfield`]: drifting, twinkling stars over a radial sky gradient
//! - [`Aurora`]: layered ribbons displaced by a sinusoid product, with
//!   palette cycling, pause and speed control
//! - [`ParticleSystem`]: a capped pool of falling meteors with fading trails
//!
//! A [`Scene`] owns the effects and their [`Surface`]s and advances them once
//! per frame; a [`Driver`] paces the scene on a [`TickSource`]. The
//! [`SkyBackground`] component wires all of this into the page.
//!
//! # Example
//!
//! ```ignore
//! use aurora_sky::{SkyBackground, SkyControls, SkyHandle};
//!
//! let sky = SkyHandle::default();
//! view! {
//!     <SkyBackground handle=sky.clone() />
//!     <SkyControls handle=sky />
//! }
//! ```
//!
//! Headless, the same scene runs on recording surfaces:
//!
//! ```
//! use aurora_sky::components::sky::{Layers, RecordingSurface, Scene, Size, SkyConfig};
//!
//! let size = Size::new(800.0, 600.0);
//! let layers = Layers {
//!     stars: RecordingSurface::new(size),
//!     aurora: RecordingSurface::new(size),
//!     particles: RecordingSurface::new(size),
//! };
//! let mut scene = Scene::new(&SkyConfig::default(), layers, 7);
//! scene.tick(0.0);
//! assert_eq!(scene.starfield.stars.len(), 600);
//! ```

pub mod aurora;
mod canvas;
mod component;
pub mod particles;
mod scene;
pub mod starfield;
pub mod surface;
pub mod theme;
pub mod ticker;
mod types;

pub use aurora::Aurora;
pub use canvas::CanvasSurface;
pub use component::{SkyBackground, SkyControls, SkyHandle};
pub use particles::ParticleSystem;
pub use scene::{Driver, Layers, Scene};
pub use starfield::Starfield;
pub use surface::{RecordingSurface, Size, Surface};
pub use theme::{Color, ColorScheme};
pub use ticker::{AnimationFrameTicker, FixedStepTicker, TickSource};
pub use types::SkyConfig;
