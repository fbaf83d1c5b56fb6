//! Geometric parameter sampling and the transform pipeline builder
//!
//! One parameter sample is drawn per packed image and reused across all of
//! its bands, which keeps paired bands spatially aligned through crop and
//! flip. The pipeline interprets those parameters as an ordered sequence of
//! image transforms ending in tensor conversion and normalization.

/// Random crop offset and flip flag sampling
pub mod params;
/// Ordered transform sequence construction and application
pub mod pipeline;
