//! Arkworks BN254 group operations.
//!
//! Implements the [`CurvePoint`] and [`TargetGroup`] traits for the BN254
//! source groups and pairing target group:
//!
//! - **G1**: points on E(Fq), `y^2 = x^3 + 3`
//! - **G2**: points on the twist E'(Fq2)
//! - **Gt**: the order-r subgroup of Fq12, canonical pairing outputs
//!
//! The byte codec is the fixed-width big-endian affine form used by the
//! Ethereum precompiles: 32 bytes per field coordinate, G1 as `x || y`,
//! G2 with the imaginary component of each Fq2 coordinate first. The
//! identity encodes as all zero bytes.

use std::fmt;

use ark_bn254::{Bn254, Fq, Fq2, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::pairing::PairingOutput;
use ark_ec::{AffineRepr, CurveGroup, PrimeGroup};
use ark_ff::{BigInteger, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use num_bigint::BigUint;

use crate::{BackendError, CurvePoint, DecodeError, Fr, TargetGroup};

const COORD_SIZE: usize = 32;

/// G1 group element for the Arkworks BN254 backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G1(pub G1Projective);

/// G2 group element for the Arkworks BN254 backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G2(pub G2Projective);

/// Canonical target group element for the Arkworks BN254 backend.
pub type Gt = PairingOutput<Bn254>;

fn write_fq(value: &Fq, out: &mut [u8]) {
    out.copy_from_slice(&value.into_bigint().to_bytes_be());
}

fn read_fq(bytes: &[u8]) -> Result<Fq, DecodeError> {
    let value = BigUint::from_bytes_be(bytes);
    let limbs =
        <Fq as PrimeField>::BigInt::try_from(value).map_err(|_| DecodeError::OutOfRange)?;
    Fq::from_bigint(limbs).ok_or(DecodeError::OutOfRange)
}

impl CurvePoint<Fr> for G1 {
    type Affine = G1Affine;
    type Repr = [u8; 2 * COORD_SIZE];

    const ENCODED_SIZE: usize = 2 * COORD_SIZE;

    fn identity() -> Self {
        G1(G1Projective::zero())
    }

    fn generator() -> Self {
        G1(<G1Projective as PrimeGroup>::generator())
    }

    fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    fn from_affine(affine: &Self::Affine) -> Self {
        G1(affine.into_group())
    }

    fn to_affine(&self) -> Self::Affine {
        self.0.into_affine()
    }

    fn add(&self, other: &Self) -> Self {
        G1(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        G1(self.0 - other.0)
    }

    fn negate(&self) -> Self {
        G1(-self.0)
    }

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        G1(self.0 * scalar)
    }

    fn mul_generator(scalar: &Fr) -> Self {
        Self::generator().mul_scalar(scalar)
    }

    fn mul_uint(&self, n: &BigUint) -> Self {
        G1(self.0.mul_bigint(n.to_u64_digits()))
    }

    fn to_bytes(&self) -> Self::Repr {
        let mut out = [0u8; 2 * COORD_SIZE];
        if self.is_identity() {
            return out;
        }
        let affine = self.to_affine();
        write_fq(&affine.x, &mut out[..COORD_SIZE]);
        write_fq(&affine.y, &mut out[COORD_SIZE..]);
        out
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() != Self::ENCODED_SIZE {
            return Err(DecodeError::Length {
                expected: Self::ENCODED_SIZE,
                got: bytes.len(),
            });
        }
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        let x = read_fq(&bytes[..COORD_SIZE])?;
        let y = read_fq(&bytes[COORD_SIZE..])?;
        let affine = G1Affine::new_unchecked(x, y);
        if !affine.is_on_curve() {
            return Err(DecodeError::OffCurve);
        }
        if !affine.is_in_correct_subgroup_assuming_on_curve() {
            return Err(DecodeError::WrongSubgroup);
        }
        Ok(Self::from_affine(&affine))
    }
}

impl CurvePoint<Fr> for G2 {
    type Affine = G2Affine;
    type Repr = [u8; 4 * COORD_SIZE];

    const ENCODED_SIZE: usize = 4 * COORD_SIZE;

    fn identity() -> Self {
        G2(G2Projective::zero())
    }

    fn generator() -> Self {
        G2(<G2Projective as PrimeGroup>::generator())
    }

    fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    fn from_affine(affine: &Self::Affine) -> Self {
        G2(affine.into_group())
    }

    fn to_affine(&self) -> Self::Affine {
        self.0.into_affine()
    }

    fn add(&self, other: &Self) -> Self {
        G2(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        G2(self.0 - other.0)
    }

    fn negate(&self) -> Self {
        G2(-self.0)
    }

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        G2(self.0 * scalar)
    }

    fn mul_generator(scalar: &Fr) -> Self {
        Self::generator().mul_scalar(scalar)
    }

    fn mul_uint(&self, n: &BigUint) -> Self {
        G2(self.0.mul_bigint(n.to_u64_digits()))
    }

    fn to_bytes(&self) -> Self::Repr {
        let mut out = [0u8; 4 * COORD_SIZE];
        if self.is_identity() {
            return out;
        }
        let affine = self.to_affine();
        write_fq(&affine.x.c1, &mut out[..COORD_SIZE]);
        write_fq(&affine.x.c0, &mut out[COORD_SIZE..2 * COORD_SIZE]);
        write_fq(&affine.y.c1, &mut out[2 * COORD_SIZE..3 * COORD_SIZE]);
        write_fq(&affine.y.c0, &mut out[3 * COORD_SIZE..]);
        out
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() != Self::ENCODED_SIZE {
            return Err(DecodeError::Length {
                expected: Self::ENCODED_SIZE,
                got: bytes.len(),
            });
        }
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        let x_c1 = read_fq(&bytes[..COORD_SIZE])?;
        let x_c0 = read_fq(&bytes[COORD_SIZE..2 * COORD_SIZE])?;
        let y_c1 = read_fq(&bytes[2 * COORD_SIZE..3 * COORD_SIZE])?;
        let y_c0 = read_fq(&bytes[3 * COORD_SIZE..])?;
        let affine = G2Affine::new_unchecked(Fq2::new(x_c0, x_c1), Fq2::new(y_c0, y_c1));
        if !affine.is_on_curve() {
            return Err(DecodeError::OffCurve);
        }
        if !affine.is_in_correct_subgroup_assuming_on_curve() {
            return Err(DecodeError::WrongSubgroup);
        }
        Ok(Self::from_affine(&affine))
    }
}

impl fmt::Display for G1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return f.write_str("(infinity)");
        }
        let affine = self.to_affine();
        write!(f, "({}, {})", affine.x, affine.y)
    }
}

impl fmt::Display for G2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return f.write_str("(infinity)");
        }
        let affine = self.to_affine();
        write!(
            f,
            "(({}, {}), ({}, {}))",
            affine.x.c0, affine.x.c1, affine.y.c0, affine.y.c1
        )
    }
}

impl TargetGroup for Gt {
    type Scalar = Fr;
    type Repr = Vec<u8>;

    fn identity() -> Self {
        <Gt as Zero>::zero()
    }

    fn generator() -> Self {
        <Gt as PrimeGroup>::generator()
    }

    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self {
        let bigint = scalar.into_bigint();
        self.mul_bigint(bigint.as_ref())
    }

    fn mul_uint(&self, n: &BigUint) -> Self {
        self.mul_bigint(n.to_u64_digits())
    }

    fn combine(&self, other: &Self) -> Self {
        self + other
    }

    fn negate(&self) -> Self {
        -*self
    }

    fn to_repr(&self) -> Self::Repr {
        let mut bytes = Vec::new();
        self.serialize_compressed(&mut bytes)
            .expect("target serialization");
        bytes
    }

    fn from_repr(bytes: &Self::Repr) -> Result<Self, BackendError> {
        Gt::deserialize_compressed(bytes.as_slice())
            .map_err(|_| BackendError::Serialization("invalid GT bytes"))
    }
}

/// Lowercase hex form of a target group element's compressed encoding, for
/// diagnostics and logs.
pub fn gt_hex(value: &Gt) -> String {
    value
        .to_repr()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use ark_bn254::g2::Config as G2Config;
    use ark_ec::short_weierstrass::SWCurveConfig;
    use ark_ff::Field;
    use num_bigint::BigUint;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::FieldElement;

    fn scalar_field_order() -> BigUint {
        BigUint::from_bytes_be(&Fr::MODULUS.to_bytes_be())
    }

    #[test]
    fn generator_arithmetic() {
        let four = G1::mul_generator(&Fr::from_u64(4));
        let eight = G1::mul_generator(&Fr::from_u64(8));
        let twelve = G1::mul_generator(&Fr::from_u64(12));
        assert_eq!(four.add(&eight), twelve);
        assert_eq!(four.mul_scalar(&Fr::from_u64(3)), twelve);
        assert_eq!(twelve.sub(&four), eight);
        assert!(four.add(&four.negate()).is_identity());

        let four_g2 = G2::mul_generator(&Fr::from_u64(4));
        let eight_g2 = G2::mul_generator(&Fr::from_u64(8));
        assert_eq!(
            four_g2.add(&eight_g2),
            G2::mul_generator(&Fr::from_u64(12))
        );
    }

    #[test]
    fn scalar_periodicity() {
        let r = scalar_field_order();
        let k = BigUint::from(12_u32);

        let g1 = G1::generator();
        assert_eq!(g1.mul_uint(&k), g1.mul_uint(&(&k + &r)));
        assert!(g1.mul_uint(&r).is_identity());

        let g2 = G2::generator();
        assert_eq!(g2.mul_uint(&k), g2.mul_uint(&(&k + &r)));
        assert!(g2.mul_uint(&r).is_identity());

        let gt = <Gt as TargetGroup>::generator();
        assert_eq!(gt.mul_uint(&k), gt.mul_uint(&(&k + &r)));
        assert_eq!(gt.mul_uint(&r), Gt::identity());
    }

    #[test]
    fn codec_round_trip() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..8 {
            let scalar = <Fr as FieldElement>::random(&mut rng);
            let g1 = G1::mul_generator(&scalar);
            assert_eq!(G1::from_bytes(g1.to_bytes().as_ref()).expect("valid"), g1);
            let g2 = G2::mul_generator(&scalar);
            assert_eq!(G2::from_bytes(g2.to_bytes().as_ref()).expect("valid"), g2);
        }

        let id1 = G1::identity();
        assert_eq!(id1.to_bytes(), [0u8; 64]);
        assert_eq!(G1::from_bytes(&[0u8; 64]).expect("identity"), id1);
        let id2 = G2::identity();
        assert_eq!(id2.to_bytes(), [0u8; 128]);
        assert_eq!(G2::from_bytes(&[0u8; 128]).expect("identity"), id2);
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert_eq!(
            G1::from_bytes(&[0u8; 63]),
            Err(DecodeError::Length {
                expected: 64,
                got: 63
            })
        );
        assert_eq!(
            G2::from_bytes(&[0u8; 64]),
            Err(DecodeError::Length {
                expected: 128,
                got: 64
            })
        );
    }

    #[test]
    fn decode_rejects_out_of_range_coordinate() {
        let mut bytes = [0u8; 64];
        bytes[..32].fill(0xff);
        assert_eq!(G1::from_bytes(&bytes), Err(DecodeError::OutOfRange));
    }

    #[test]
    fn decode_rejects_off_curve_point() {
        // The G1 generator is (1, 2); nudging y off by one leaves the curve.
        let mut bytes = G1::generator().to_bytes();
        bytes[63] ^= 1;
        assert_eq!(G1::from_bytes(&bytes), Err(DecodeError::OffCurve));

        let mut bytes = G2::generator().to_bytes();
        bytes[127] ^= 1;
        assert_eq!(G2::from_bytes(&bytes), Err(DecodeError::OffCurve));
    }

    #[test]
    fn decode_rejects_wrong_subgroup_point() {
        // Scan small x coordinates for a twist point outside the order-r
        // subgroup; with a cofactor of ~2^254 the first on-curve hit is one.
        let mut probe = None;
        for i in 1u64..200 {
            let x = Fq2::new(Fq::from(i), Fq::zero());
            let rhs = x * x * x + G2Config::COEFF_B;
            if let Some(y) = rhs.sqrt() {
                let point = G2Affine::new_unchecked(x, y);
                if point.is_on_curve() && !point.is_in_correct_subgroup_assuming_on_curve() {
                    probe = Some(point);
                    break;
                }
            }
        }
        let point = probe.expect("small-x twist point outside the subgroup");

        let mut bytes = [0u8; 128];
        write_fq(&point.x.c1, &mut bytes[..32]);
        write_fq(&point.x.c0, &mut bytes[32..64]);
        write_fq(&point.y.c1, &mut bytes[64..96]);
        write_fq(&point.y.c0, &mut bytes[96..]);
        assert_eq!(G2::from_bytes(&bytes), Err(DecodeError::WrongSubgroup));
    }

    #[test]
    fn display_is_decimal_affine() {
        assert_eq!(G1::generator().to_string(), "(1, 2)");
        assert_eq!(G1::identity().to_string(), "(infinity)");
        assert!(G2::generator().to_string().starts_with("(("));
    }

    #[test]
    fn gt_repr_round_trip() {
        let gt = <Gt as TargetGroup>::generator();
        let repr = gt.to_repr();
        assert_eq!(Gt::from_repr(&repr).expect("valid repr"), gt);
        assert_eq!(gt_hex(&gt).len(), 2 * repr.len());
    }

    #[test]
    fn gt_identity_and_inverse() {
        let gt = <Gt as TargetGroup>::generator().mul_scalar(&Fr::from_u64(5));
        assert_eq!(gt.combine(&Gt::identity()), gt);
        assert_eq!(gt.combine(&gt.negate()), Gt::identity());
    }
}
