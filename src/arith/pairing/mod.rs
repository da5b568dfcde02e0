use std::fmt::Debug;

#[cfg(feature = "ark_bn254")]
mod ark_bn254;
#[cfg(feature = "ark_bn254")]
pub use self::ark_bn254::PairingEngine;

use crate::{BackendError, CurveParameters, CurvePoint, Error, FieldElement, TargetGroup};

/// Main backend trait that ties the three groups to the bilinear map.
///
/// The pairing is exposed in two stages. [`miller_loop`](Self::miller_loop)
/// produces a *raw* value in [`Raw`](Self::Raw): a non-canonical
/// representative that supports cheap accumulation via
/// [`combine_raw`](Self::combine_raw) but carries no meaningful notion of
/// equality. [`final_exponentiation`](Self::final_exponentiation) maps a raw
/// value to the unique canonical representative in the order-r subgroup,
/// after which [`Target`](Self::Target) values compare with `==`. Two
/// logically equal pairing products must each be finalized (or their raw
/// product finalized once) before comparison; the type split makes mixing
/// the two a compile error.
///
/// The pairing satisfies bilinearity: `e(a*P, b*Q) = e(P, Q)^(ab)`.
///
/// # Example
///
/// ```rust
/// use paircheck::{CurvePoint, PairingBackend, PairingEngine};
///
/// type G1 = <PairingEngine as PairingBackend>::G1;
/// type G2 = <PairingEngine as PairingBackend>::G2;
///
/// let raw = PairingEngine::miller_loop(&G1::generator(), &G2::generator());
/// let gt = PairingEngine::final_exponentiation(raw)?;
/// assert_eq!(gt, PairingEngine::pairing(&G1::generator(), &G2::generator()));
/// # Ok::<(), paircheck::BackendError>(())
/// ```
pub trait PairingBackend: Send + Sync + Debug + Sized + 'static {
    /// Scalar field type (Fr).
    type Scalar: FieldElement;
    /// First curve group (G1).
    type G1: CurvePoint<Self::Scalar>;
    /// Second curve group (G2).
    type G2: CurvePoint<Self::Scalar>;
    /// Canonical pairing target group (GT).
    type Target: TargetGroup<Scalar = Self::Scalar>;
    /// Raw Miller-loop output, prior to final exponentiation.
    type Raw: Clone + Send + Sync + Debug + 'static;

    /// Derives this backend's curve parameters from its trusted `u` and
    /// validates them against the backend's hard-coded constants.
    ///
    /// Fails with [`Error::ParameterMismatch`] if derivation and constants
    /// disagree; every engine construction runs this check before any
    /// pairing is computed.
    fn parameters() -> Result<CurveParameters, Error>;

    /// Computes the Miller loop for a single pair: `e_raw(g1, g2)`.
    fn miller_loop(g1: &Self::G1, g2: &Self::G2) -> Self::Raw;

    /// Computes the combined Miller loop over all pairs, deferring the
    /// final exponentiation.
    ///
    /// Returns an error if the input slices have different lengths.
    fn multi_miller_loop(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Raw, BackendError>;

    /// Multiplies two raw Miller-loop outputs.
    fn combine_raw(a: Self::Raw, b: Self::Raw) -> Self::Raw;

    /// Canonicalizes a raw value into the order-r subgroup of GT.
    fn final_exponentiation(raw: Self::Raw) -> Result<Self::Target, BackendError>;

    /// Computes the full bilinear pairing: `e(g1, g2) -> GT`.
    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target;

    /// Computes a finalized product of pairings: `∏ e(g1[i], g2[i])`.
    ///
    /// This is more efficient than computing individual pairings and
    /// multiplying, since the final exponentiation runs once at the end.
    /// Returns an error if the input slices have different lengths.
    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, BackendError>;
}
