//! Output filter chain.
//!
//! Every stage implements `DisplayOutput` and wraps another one, so stages
//! compose in any order. Each stage's per-pixel rule is also exposed as a
//! plain function or type method and tested on its own.
//!
//! Path of a write issued by a drawable under `DrawingContext`:
//! transform → background → clip mask → write-once → device.

mod background;
mod clip_mask;
mod erasure;
mod front_to_back;
mod transformed;

pub use background::{
    BackgroundFilter, Behind, ForegroundFilter, InFront, RasterFilter, SampleBlend,
    blend_background, blend_foreground,
};
pub use clip_mask::{ClipMask, ClipMaskFilter};
pub use erasure::ErasureFilter;
pub use front_to_back::{FrontToBackWriter, WriteOnceMask};
pub use transformed::{TransformedDisplayOutput, transform_pixel};
