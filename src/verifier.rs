//! Pairing-product verification.
//!
//! The externally consumed contract of the engine: assemble a
//! [`PairingEquation`] from `(G1, G2)` term pairs, then ask a [`Verifier`]
//! whether the product of their pairings is the GT identity. Both "equality
//! of two pairings" (`e(X, Y) == e(Z, W)`, rewritten as
//! `e(X, Y) * e(-Z, W) == 1`) and longer sum-of-pairings checks reduce to
//! this single operation.
//!
//! Verification accumulates raw Miller-loop outputs (the per-term loops have
//! no data dependency on one another and run concurrently) and applies the
//! canonicalizing final exponentiation exactly once before the identity
//! comparison.
//!
//! # Example
//!
//! ```rust
//! use paircheck::{
//!     CurvePoint, FieldElement, Fr, PairingEngine, PairingEquation, Verifier, G1, G2,
//! };
//!
//! # fn main() -> Result<(), paircheck::Error> {
//! let verifier = Verifier::<PairingEngine>::new()?;
//!
//! // e(4*G1, 3*G2) * e(-(6*G1), 2*G2) == 1, since 4*3 == 6*2.
//! let mut equation = PairingEquation::new();
//! equation.push(
//!     G1::mul_generator(&Fr::from_u64(4)),
//!     G2::mul_generator(&Fr::from_u64(3)),
//! );
//! equation.push(
//!     G1::mul_generator(&Fr::from_u64(6)).negate(),
//!     G2::mul_generator(&Fr::from_u64(2)),
//! );
//! assert!(verifier.verify(&equation)?);
//! # Ok(())
//! # }
//! ```

use std::fmt::Debug;
use std::marker::PhantomData;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::instrument;

use crate::{CurveParameters, CurvePoint, Error, PairingBackend, TargetGroup};

/// An ordered sequence of `(G1, G2)` pairing terms.
///
/// Assembled transiently by a caller and consumed by
/// [`Verifier::verify`]. Every stored element is a valid group element by
/// construction: the byte-level constructor validates each encoding before
/// any pairing is computed.
pub struct PairingEquation<B: PairingBackend> {
    terms: Vec<(B::G1, B::G2)>,
}

impl<B: PairingBackend> PairingEquation<B> {
    /// Creates an empty equation.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Appends one `(G1, G2)` term.
    pub fn push(&mut self, g1: B::G1, g2: B::G2) {
        self.terms.push((g1, g2));
    }

    /// Builds an equation by zipping two slices of equal length.
    ///
    /// Returns [`Error::MalformedEquation`] when the slice lengths differ;
    /// the protocol requires pairs.
    pub fn from_terms(g1: &[B::G1], g2: &[B::G2]) -> Result<Self, Error> {
        if g1.len() != g2.len() {
            return Err(Error::MalformedEquation(format!(
                "{} G1 terms against {} G2 terms",
                g1.len(),
                g2.len()
            )));
        }
        Ok(Self {
            terms: g1.iter().copied().zip(g2.iter().copied()).collect(),
        })
    }

    /// Decodes an equation from concatenated fixed-width terms.
    ///
    /// Each term is the G1 encoding immediately followed by the G2 encoding
    /// (192 bytes per term for BN254). The input length must be an exact
    /// multiple of the term size; every element is validated on decode, so
    /// a malformed input is rejected before any pairing work happens.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let g1_size = <B::G1 as CurvePoint<B::Scalar>>::ENCODED_SIZE;
        let term_size = g1_size + <B::G2 as CurvePoint<B::Scalar>>::ENCODED_SIZE;
        if bytes.len() % term_size != 0 {
            return Err(Error::MalformedEquation(format!(
                "input length {} is not a multiple of the {}-byte term size",
                bytes.len(),
                term_size
            )));
        }
        let mut terms = Vec::with_capacity(bytes.len() / term_size);
        for chunk in bytes.chunks_exact(term_size) {
            let g1 = B::G1::from_bytes(&chunk[..g1_size])?;
            let g2 = B::G2::from_bytes(&chunk[g1_size..])?;
            terms.push((g1, g2));
        }
        Ok(Self { terms })
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the equation has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The terms in insertion order.
    pub fn terms(&self) -> &[(B::G1, B::G2)] {
        &self.terms
    }
}

impl<B: PairingBackend> Default for PairingEquation<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: PairingBackend> Clone for PairingEquation<B> {
    fn clone(&self) -> Self {
        Self {
            terms: self.terms.clone(),
        }
    }
}

impl<B: PairingBackend> Debug for PairingEquation<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PairingEquation")
            .field("terms", &self.terms)
            .finish()
    }
}

/// Pairing-product verification engine.
///
/// Construction derives and validates the backend's curve parameters; a
/// transcription error in the trusted constants surfaces here as
/// [`Error::ParameterMismatch`] and nothing further runs. The validated
/// parameters are read-only configuration for the lifetime of the value.
pub struct Verifier<B: PairingBackend> {
    params: CurveParameters,
    _backend: PhantomData<B>,
}

impl<B: PairingBackend> Verifier<B> {
    /// Creates a verifier over validated curve parameters.
    pub fn new() -> Result<Self, Error> {
        let params = B::parameters()?;
        Ok(Self {
            params,
            _backend: PhantomData,
        })
    }

    /// The validated parameters of the backing curve.
    pub fn parameters(&self) -> &CurveParameters {
        &self.params
    }

    /// Evaluates `∏ e(g1_i, g2_i) == 1` over all terms of the equation.
    ///
    /// Per-term Miller loops run in parallel, their raw outputs are
    /// multiplied, and the final exponentiation is applied exactly once to
    /// the combined product before the identity comparison. The empty
    /// equation is the empty product and verifies as `true`.
    ///
    /// `Ok(false)` is a legitimate negative proof-check result, not an
    /// error.
    #[instrument(level = "trace", skip_all, fields(terms = equation.len()))]
    pub fn verify(&self, equation: &PairingEquation<B>) -> Result<bool, Error> {
        let raw = equation
            .terms()
            .par_iter()
            .map(|(g1, g2)| B::miller_loop(g1, g2))
            .reduce_with(B::combine_raw);
        let raw = match raw {
            Some(raw) => raw,
            None => return Ok(true),
        };
        let product = B::final_exponentiation(raw)?;
        Ok(product == B::Target::identity())
    }

    /// Decodes concatenated fixed-width terms and evaluates the equation.
    pub fn verify_bytes(&self, bytes: &[u8]) -> Result<bool, Error> {
        self.verify(&PairingEquation::from_bytes(bytes)?)
    }
}
