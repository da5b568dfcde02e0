//! BN curve parameter derivation and validation.
//!
//! Curves in the Barreto-Naehrig family are fully determined by a single
//! integer parameter `u`: the field modulus and the group order are fixed
//! degree-4 polynomials in `u`. This module evaluates those polynomials with
//! exact big-integer arithmetic and checks the results bit-for-bit against
//! externally supplied constants, so that a wrong `u` or a transcription
//! error in a trusted constant is caught before any group arithmetic runs.
//!
//! Parameters are computed once, validated, and treated as read-only
//! configuration afterwards; see [`PairingBackend::parameters`](crate::PairingBackend::parameters)
//! for the per-backend self-check run at engine construction.
//!
//! # Example
//!
//! ```rust
//! use num_bigint::BigInt;
//! use paircheck::CurveParameters;
//!
//! let params = CurveParameters::derive(BigInt::from(1));
//! assert_eq!(params.p.to_string(), "103");
//! assert_eq!(params.r.to_string(), "97");
//! ```

use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::Error;

/// Cube root of the parameter `u` of the 256-bit BN reference curve.
pub const BN256_CUBE_ROOT: i64 = 1_868_033;

/// Field modulus of the 256-bit BN reference curve, as a decimal literal.
pub const BN256_MODULUS: &str =
    "65000549695646603732796438742359905742825358107623003571877145026864184071783";

/// Group order of the 256-bit BN reference curve, as a decimal literal.
pub const BN256_ORDER: &str =
    "65000549695646603732796438742359905742570406053903786389881062969044166799969";

/// Parameters of a BN-family curve, derived from its integer parameter `u`.
///
/// The field modulus `p` and the group order `r` are uniquely determined by
/// `u`. Both are assumed prime; primality is an externally trusted
/// precondition and is not re-verified here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParameters {
    /// The BN parameter the curve is generated from.
    pub u: BigInt,
    /// Field modulus, `p(u) = 36u^4 + 36u^3 + 24u^2 + 6u + 1`.
    pub p: BigUint,
    /// Group order of G1, G2 and GT, `r(u) = 36u^4 + 36u^3 + 18u^2 + 6u + 1`.
    pub r: BigUint,
}

impl CurveParameters {
    /// Derives the parameter set for a given `u`.
    ///
    /// Evaluation is exact signed big-integer arithmetic; `u` may be zero or
    /// negative. The real parameter is around 64 bits while `p` and `r` are
    /// around 256 bits, so no fixed-width integer type is involved anywhere.
    pub fn derive(u: BigInt) -> Self {
        let u2 = &u * &u;
        let u3 = &u2 * &u;
        let u4 = &u2 * &u2;
        let p: BigInt = BigInt::from(36) * &u4
            + BigInt::from(36) * &u3
            + BigInt::from(24) * &u2
            + BigInt::from(6) * &u
            + 1;
        // r differs from p only in the quadratic coefficient: r = p - 6u^2.
        let r = &p - BigInt::from(6) * &u2;
        CurveParameters {
            u,
            p: p.to_biguint().expect("p(u) is positive for every integer u"),
            r: r.to_biguint().expect("r(u) is positive for every integer u"),
        }
    }

    /// Derives the parameter set for `u = w^3`.
    ///
    /// Some reference parameter sets are published as the cube root of `u`
    /// rather than `u` itself.
    pub fn from_cube_root(w: BigInt) -> Self {
        let u = &w * &w * w;
        Self::derive(u)
    }

    /// The validated parameter set of the 256-bit BN reference curve
    /// (`u = 1868033^3`).
    pub fn bn256() -> Result<Self, Error> {
        let params = Self::from_cube_root(BigInt::from(BN256_CUBE_ROOT));
        let p = BigUint::parse_bytes(BN256_MODULUS.as_bytes(), 10)
            .expect("hard-coded decimal constant");
        let r = BigUint::parse_bytes(BN256_ORDER.as_bytes(), 10)
            .expect("hard-coded decimal constant");
        params.ensure(&p, &r)?;
        Ok(params)
    }

    /// Structural equality of the derived values against expected constants.
    ///
    /// Never panics and never errors; `false` means at least one of the two
    /// values diverges.
    pub fn matches(&self, expected_p: &BigUint, expected_r: &BigUint) -> bool {
        &self.p == expected_p && &self.r == expected_r
    }

    /// Like [`matches`](Self::matches), but surfaces a mismatch as
    /// [`Error::ParameterMismatch`] naming the diverging constant.
    ///
    /// Used at engine load; a mismatch aborts parameter loading.
    pub fn ensure(&self, expected_p: &BigUint, expected_r: &BigUint) -> Result<(), Error> {
        if &self.p != expected_p {
            return Err(Error::ParameterMismatch {
                name: "field modulus p",
                expected: expected_p.to_string(),
                derived: self.p.to_string(),
            });
        }
        if &self.r != expected_r {
            return Err(Error::ParameterMismatch {
                name: "group order r",
                expected: expected_r.to_string(),
                derived: self.r.to_string(),
            });
        }
        trace!(u = %self.u, "curve parameters validated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_reference_parameters() {
        let params = CurveParameters::bn256().expect("reference constants");
        assert_eq!(params.u, BigInt::from(6_518_589_491_078_791_937_i64));
        assert_eq!(params.p.to_string(), BN256_MODULUS);
        assert_eq!(params.r.to_string(), BN256_ORDER);
    }

    #[test]
    fn cube_root_matches_direct_derivation() {
        let direct = CurveParameters::derive(BigInt::from(6_518_589_491_078_791_937_i64));
        let cubed = CurveParameters::from_cube_root(BigInt::from(BN256_CUBE_ROOT));
        assert_eq!(direct, cubed);
    }

    #[test]
    fn altered_constant_is_rejected() {
        let params = CurveParameters::bn256().expect("reference constants");
        // Flip the last digit of each constant in turn.
        let bad_p = BigUint::parse_bytes(
            BN256_MODULUS.replace("071783", "071784").as_bytes(),
            10,
        )
        .expect("decimal");
        let bad_r = BigUint::parse_bytes(
            BN256_ORDER.replace("799969", "799968").as_bytes(),
            10,
        )
        .expect("decimal");
        assert!(!params.matches(&bad_p, &params.r));
        assert!(!params.matches(&params.p, &bad_r));
        assert!(params.matches(&params.p, &params.r));

        let err = params.ensure(&bad_p, &params.r).unwrap_err();
        assert!(matches!(err, Error::ParameterMismatch { name: "field modulus p", .. }));
        let err = params.ensure(&params.p, &bad_r).unwrap_err();
        assert!(matches!(err, Error::ParameterMismatch { name: "group order r", .. }));
    }

    #[test]
    fn small_and_negative_u() {
        let zero = CurveParameters::derive(BigInt::from(0));
        assert_eq!(zero.p, BigUint::from(1_u32));
        assert_eq!(zero.r, BigUint::from(1_u32));

        let neg = CurveParameters::derive(BigInt::from(-1));
        assert_eq!(neg.p, BigUint::from(19_u32));
        assert_eq!(neg.r, BigUint::from(13_u32));
    }

    #[test]
    fn order_divides_curve_size() {
        // #E(Fp) = p + 1 - t with trace t = 6u^2 + 1, so p + 1 - t = r exactly.
        let params = CurveParameters::bn256().expect("reference constants");
        let u = params.u.clone();
        let trace = BigInt::from(6) * &u * &u + 1;
        let size: BigInt = BigInt::from(params.p.clone()) + 1 - trace;
        assert_eq!(size.to_biguint().expect("positive"), params.r);
    }

    #[test]
    fn serde_round_trip() {
        let params = CurveParameters::bn256().expect("reference constants");
        let json = serde_json::to_string(&params).expect("serialize");
        let back: CurveParameters = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(params, back);
    }
}
