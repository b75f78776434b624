//! Perturbation operator and factory protocols.
//!
//! Factories are constructed and owned outside this crate; the pipeline
//! only reads their configuration and consumes the operators they yield.

use perturb_types::{ImageBuffer, MetaMap, MetaValue};

use crate::error::OperatorError;

/// A single configured image perturbation operator.
///
/// One operator corresponds to one parameter combination of its factory.
pub trait Perturber {
    /// Applies the perturbation to one image, producing a new image.
    ///
    /// Output dimensions may differ from the input (e.g. resampling
    /// perturbations).
    ///
    /// # Errors
    ///
    /// Returns the operator's own error on failure; the pipeline wraps and
    /// propagates it without retrying.
    fn apply(&self, image: &ImageBuffer) -> std::result::Result<ImageBuffer, OperatorError>;

    /// Returns the exact parameters this operator was constructed with.
    ///
    /// Recorded verbatim as per-sample provenance metadata.
    fn config(&self) -> MetaMap;
}

/// Parameter value domains as declared by a factory.
///
/// Factories declare their parameter space in one of two shapes: a single
/// named axis with a flat value sequence, or several named axes with one
/// value sequence per axis. Both describe "a sequence of named axes, each
/// with its own domain"; [`ParameterAxes`](crate::ParameterAxes) normalizes
/// them to one representation.
#[derive(Debug, Clone, PartialEq)]
pub enum ThetaValues {
    /// One flat value domain, paired with a `theta_key` config entry.
    Flat(Vec<MetaValue>),
    /// One value domain per key, paired with a `theta_keys` config entry.
    PerKey(Vec<Vec<MetaValue>>),
}

/// A generator of perturbation operators across a declared parameter space.
///
/// The factory yields one operator per parameter combination, in the order
/// of the cartesian product of its value domains taken in key order. The
/// sweep engine verifies the yielded count against its own enumeration and
/// fails fast on mismatch.
pub trait PerturberFactory {
    /// Returns the raw configuration mapping.
    ///
    /// Must contain either a `theta_keys` entry (list of axis names) or a
    /// `theta_key` entry (single axis name).
    fn config(&self) -> MetaMap;

    /// Returns the parameter value domains, shaped to match [`Self::config`].
    fn thetas(&self) -> ThetaValues;

    /// Yields one operator per parameter combination, in cartesian order.
    fn perturbers(&self) -> Vec<Box<dyn Perturber>>;
}
