#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use posefit_codec as codec;

#[doc(inline)]
pub use posefit_metrics as metrics;

#[doc(inline)]
pub use posefit_dataset as dataset;
