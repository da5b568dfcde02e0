use ark_bn254::Bn254;
use ark_ec::pairing::{MillerLoopOutput, Pairing};
use num_bigint::{BigInt, BigUint};
use tracing::instrument;

use crate::{BackendError, CurveParameters, Error, Fr, Gt, PairingBackend, G1, G2};

/// BN parameter `u` of the BN254 curve.
const BN254_U: i64 = 4_965_661_367_192_848_881;

/// Trusted field modulus of BN254, as a decimal literal.
const BN254_MODULUS: &str =
    "21888242871839275222246405745257275088696311157297823662689037894645226208583";

/// Trusted group order of BN254, as a decimal literal.
const BN254_ORDER: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

#[derive(Debug)]
pub struct PairingEngine;

impl PairingBackend for PairingEngine {
    type Scalar = Fr;
    type G1 = G1;
    type G2 = G2;
    type Target = Gt;
    type Raw = MillerLoopOutput<Bn254>;

    fn parameters() -> Result<CurveParameters, Error> {
        let params = CurveParameters::derive(BigInt::from(BN254_U));
        let p = BigUint::parse_bytes(BN254_MODULUS.as_bytes(), 10)
            .expect("hard-coded decimal constant");
        let r = BigUint::parse_bytes(BN254_ORDER.as_bytes(), 10)
            .expect("hard-coded decimal constant");
        params.ensure(&p, &r)?;
        Ok(params)
    }

    fn miller_loop(g1: &Self::G1, g2: &Self::G2) -> Self::Raw {
        Bn254::miller_loop(g1.0, g2.0)
    }

    #[instrument(level = "trace", skip_all, fields(terms = g1.len()))]
    fn multi_miller_loop(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Raw, BackendError> {
        if g1.len() != g2.len() {
            return Err(BackendError::Math("pairing length mismatch"));
        }
        let g1_proj: Vec<_> = g1.iter().map(|p| p.0).collect();
        let g2_proj: Vec<_> = g2.iter().map(|p| p.0).collect();
        Ok(Bn254::multi_miller_loop(g1_proj, g2_proj))
    }

    fn combine_raw(a: Self::Raw, b: Self::Raw) -> Self::Raw {
        MillerLoopOutput(a.0 * b.0)
    }

    fn final_exponentiation(raw: Self::Raw) -> Result<Self::Target, BackendError> {
        Bn254::final_exponentiation(raw)
            .ok_or(BackendError::Math("final exponentiation of a zero element"))
    }

    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target {
        Bn254::pairing(g1.0, g2.0)
    }

    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, BackendError> {
        let raw = Self::multi_miller_loop(g1, g2)?;
        Self::final_exponentiation(raw)
    }
}
