use std::fmt::Debug;

use num_bigint::BigUint;

use crate::{BackendError, DecodeError, FieldElement};

#[cfg(feature = "ark_bn254")]
mod ark_bn254;
#[cfg(feature = "ark_bn254")]
pub use self::ark_bn254::{gt_hex, Gt, G1, G2};

/// Elliptic curve point abstraction for the G1 and G2 source groups.
///
/// Every value of an implementing type is a valid group element: points are
/// constructed from the generator, from validated affine coordinates, or by
/// decoding a byte encoding that is checked against the curve equation and
/// the subgroup. Elements are plain values, freely copied, with no shared
/// mutable state.
///
/// # Example
///
/// ```rust
/// use paircheck::{CurvePoint, FieldElement, Fr, G1};
///
/// let a = G1::mul_generator(&Fr::from_u64(4));
/// let b = G1::mul_generator(&Fr::from_u64(8));
/// assert_eq!(a.add(&b), G1::mul_generator(&Fr::from_u64(12)));
///
/// let bytes = a.to_bytes();
/// let back = G1::from_bytes(bytes.as_ref()).expect("valid encoding");
/// assert_eq!(a, back);
/// ```
pub trait CurvePoint<F: FieldElement>:
    Clone + Copy + Send + Sync + Debug + PartialEq + 'static
{
    /// Associated affine representation.
    type Affine: Clone + Copy + Debug + Send + Sync + 'static;

    /// Fixed-width byte encoding, big-endian affine coordinates.
    type Repr: AsRef<[u8]> + Clone + Debug + Send + Sync + 'static;

    /// Byte length of [`Repr`](Self::Repr): 32 bytes per field coordinate.
    const ENCODED_SIZE: usize;

    /// Returns the point at infinity (identity element).
    fn identity() -> Self;

    /// Returns the standard generator for this group.
    fn generator() -> Self;

    /// Checks if this point is the identity element.
    fn is_identity(&self) -> bool;

    /// Converts from affine to projective coordinates.
    fn from_affine(affine: &Self::Affine) -> Self;

    /// Converts from projective to affine coordinates.
    fn to_affine(&self) -> Self::Affine;

    /// Performs elliptic curve point addition.
    fn add(&self, other: &Self) -> Self;

    /// Performs elliptic curve point subtraction.
    fn sub(&self, other: &Self) -> Self;

    /// Returns the additive inverse of this point.
    fn negate(&self) -> Self;

    /// Performs scalar multiplication: returns `scalar * self`.
    fn mul_scalar(&self, scalar: &F) -> Self;

    /// Multiplies the distinguished generator: returns `scalar * G`.
    fn mul_generator(scalar: &F) -> Self;

    /// Scalar multiplication by an arbitrary-width unsigned integer.
    ///
    /// The integer is *not* reduced beforehand; because the group has order
    /// `r`, multiplying by `n` and by `n + r` yields equal points. This is
    /// the entry point for exercising that periodicity explicitly.
    fn mul_uint(&self, n: &BigUint) -> Self;

    /// Encodes this point into its fixed-width byte representation.
    ///
    /// The identity encodes as all zero bytes.
    fn to_bytes(&self) -> Self::Repr;

    /// Decodes a point from its fixed-width byte representation.
    ///
    /// Rejects wrong-length input, coordinates outside the field, points off
    /// the curve and points outside the order-r subgroup. Never falls back
    /// to the identity on bad input.
    fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError>;
}

/// Pairing target group (GT) abstraction.
///
/// GT is a multiplicative subgroup of order `r` inside an extension field.
/// Canonical elements are produced by the pairing's final exponentiation or
/// by group operations on other canonical elements; raw Miller-loop outputs
/// live in a separate type and never compare against values of this one.
pub trait TargetGroup: Clone + Send + Sync + Debug + PartialEq + 'static {
    /// Scalar field type for exponentiation.
    type Scalar: FieldElement + Copy;

    /// Byte representation for serialization.
    type Repr: AsRef<[u8]> + AsMut<[u8]> + Default + Debug + Send + Sync + Clone + 'static;

    /// Returns the identity element.
    fn identity() -> Self;

    /// Returns `e(G1, G2)` for the two distinguished generators, itself a
    /// generator of GT.
    fn generator() -> Self;

    /// Performs scalar multiplication (exponentiation in multiplicative
    /// notation).
    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self;

    /// Exponentiation by an arbitrary-width unsigned integer, unreduced; the
    /// GT analogue of [`CurvePoint::mul_uint`].
    fn mul_uint(&self, n: &BigUint) -> Self;

    /// Combines (multiplies) two target group elements.
    fn combine(&self, other: &Self) -> Self;

    /// Returns the inverse of this element.
    fn negate(&self) -> Self;

    /// Serializes this element to its byte representation.
    fn to_repr(&self) -> Self::Repr;

    /// Deserializes an element from its byte representation.
    fn from_repr(bytes: &Self::Repr) -> Result<Self, BackendError>;
}
