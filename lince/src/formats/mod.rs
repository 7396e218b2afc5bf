//! One checker per supported format
//!
//! Every checker is a single forward pass over the source, starting
//! right after the two magic bytes the probe consumed. A checker either
//! returns a fully populated [`ImageMetadata`](crate::ImageMetadata) or
//! an error; there is no partial result.

pub(crate) mod bmp;
pub(crate) mod gif;
pub(crate) mod iff;
pub(crate) mod jpeg;
pub(crate) mod pcx;
pub(crate) mod png;
pub(crate) mod pnm;
pub(crate) mod psd;
pub(crate) mod ras;
