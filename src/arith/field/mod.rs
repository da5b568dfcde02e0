use std::fmt::Debug;

use rand_core::RngCore;

use crate::BackendError;

#[cfg(feature = "ark_bn254")]
mod ark_bn254;
#[cfg(feature = "ark_bn254")]
pub use self::ark_bn254::Fr;

/// Scalar field abstraction.
///
/// This trait abstracts over the scalar field Fr shared by G1, G2 and GT.
/// Scalars live in Z/rZ and all arithmetic is implicitly reduced modulo the
/// group order; multiplication of a group element by an *unreduced*
/// arbitrary-width integer goes through
/// [`CurvePoint::mul_uint`](crate::CurvePoint::mul_uint) instead.
///
/// # Example
///
/// ```rust
/// use rand::thread_rng;
/// use paircheck::{FieldElement, Fr};
///
/// let mut rng = thread_rng();
/// let a = Fr::random(&mut rng);
/// let inv = a.invert().expect("non-zero element");
///
/// let bytes = a.to_repr();
/// let recovered = Fr::from_repr(&bytes).expect("valid repr");
/// assert_eq!(a, recovered);
/// ```
pub trait FieldElement: Clone + Copy + Send + Sync + Debug + PartialEq + 'static {
    /// Byte representation type for serialization.
    type Repr: AsRef<[u8]> + AsMut<[u8]> + Default + Debug + Send + Sync + Clone + 'static;

    /// Returns the additive identity (zero) element.
    fn zero() -> Self;

    /// Returns the multiplicative identity (one) element.
    fn one() -> Self;

    /// Generates a random field element using the provided RNG.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Computes the multiplicative inverse, returning `None` for zero.
    fn invert(&self) -> Option<Self>;

    /// Embeds a small integer into the field.
    fn from_u64(n: u64) -> Self;

    /// Serializes this field element to its byte representation.
    fn to_repr(&self) -> Self::Repr;

    /// Deserializes a field element from its byte representation.
    ///
    /// Returns an error if the representation is invalid (e.g., not reduced
    /// modulo the field order).
    fn from_repr(repr: &Self::Repr) -> Result<Self, BackendError>;
}
