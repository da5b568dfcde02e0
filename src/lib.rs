//! # paircheck: bilinear pairing verification
//!
//! `paircheck` is a verification engine for pairing-product equations over
//! BN-family curves: the cryptographic primitive underlying pairing-based
//! zero-knowledge proof verifiers, where a claim is accepted exactly when a
//! product of pairings such as `e(A, B) * e(C, D) * e(E, F)` equals the
//! identity of the target group.
//!
//! ## Overview
//!
//! The crate ties together three groups of prime order `r` (G1 and G2 on a
//! curve and its twist, GT inside an extension field) through the bilinear
//! map `e: G1 x G2 -> GT`. On top of the group operations it provides the
//! one contract external callers consume: assemble `(G1, G2)` term pairs
//! into a [`PairingEquation`] and ask a [`Verifier`] whether the product of
//! their pairings is the identity.
//!
//! Because the correctness of every pairing rests on the curve constants,
//! the engine also derives its parameters from the single BN parameter `u`
//! via the fixed polynomials
//! `p(u) = 36u^4 + 36u^3 + 24u^2 + 6u + 1` and
//! `r(u) = 36u^4 + 36u^3 + 18u^2 + 6u + 1`, and refuses to start if the
//! derived values do not match the trusted literal constants bit-for-bit.
//!
//! ## Architecture
//!
//! - **[`arith`](crate::CurvePoint)**: trait abstractions for field, group
//!   and pairing operations, with concrete backends selected by Cargo
//!   feature. The pairing is split into its raw Miller-loop stage and the
//!   canonicalizing final exponentiation; only finalized values compare.
//! - **[`params`](crate::CurveParameters)**: BN parameter derivation and
//!   bit-for-bit validation against trusted constants.
//! - **[`verifier`](crate::Verifier)**: the pairing-product equation
//!   evaluator, including the fixed-width byte-level entry point.
//! - **[`errors`](crate::Error)**: backend, decode, parameter and equation
//!   error types.
//!
//! ## Quick Example
//!
//! ```rust
//! use paircheck::{
//!     CurvePoint, FieldElement, Fr, PairingEngine, PairingEquation, Verifier, G1, G2,
//! };
//!
//! # fn main() -> Result<(), paircheck::Error> {
//! // Parameter derivation and validation run once, up front.
//! let verifier = Verifier::<PairingEngine>::new()?;
//!
//! // e(4*G1, 3*G2) == e(6*G1, 2*G2), checked as a two-term product
//! // against the GT identity.
//! let equation = PairingEquation::from_terms(
//!     &[
//!         G1::mul_generator(&Fr::from_u64(4)),
//!         G1::mul_generator(&Fr::from_u64(6)).negate(),
//!     ],
//!     &[
//!         G2::mul_generator(&Fr::from_u64(3)),
//!         G2::mul_generator(&Fr::from_u64(2)),
//!     ],
//! )?;
//! assert!(verifier.verify(&equation)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - **`ark_bn254`** (default): Arkworks backend for BN254
//!
//! ## Concurrency
//!
//! All operations are synchronous, deterministic, pure functions over
//! immutable values. Independent verification calls are freely parallel;
//! within one equation the per-term Miller loops are evaluated concurrently
//! with Rayon and only the final product-and-compare step is serialized.

mod arith;
mod errors;
mod params;
mod verifier;

pub use arith::*;
pub use errors::*;
pub use params::*;
pub use verifier::*;
