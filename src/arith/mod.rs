//! Cryptographic group abstractions and backend implementations.
//!
//! This module defines the trait surface of the pairing engine and the
//! concrete backend that implements it, keeping the two strictly separated
//! so that the equation evaluator never depends on a particular curve
//! library.
//!
//! # Architecture
//!
//! - **[`field`]**: scalar field operations (Fr)
//! - **[`group`]**: source group (G1, G2) and target group (GT) operations,
//!   including the fixed-width byte codecs
//! - **[`pairing`]**: the bilinear map `e(G1, G2) -> GT`, split into its raw
//!   Miller-loop stage and the canonicalizing final exponentiation
//!
//! # Backend Support
//!
//! | Feature | Backend | Curve | Status |
//! |---------|---------|-------|--------|
//! | `ark_bn254` (default) | Arkworks | BN254 | Stable |
//!
//! # Example
//!
//! ```rust
//! use rand::thread_rng;
//! use paircheck::{CurvePoint, FieldElement, PairingBackend, PairingEngine};
//!
//! let mut rng = thread_rng();
//! let scalar = <PairingEngine as PairingBackend>::Scalar::random(&mut rng);
//!
//! let g1 = <PairingEngine as PairingBackend>::G1::mul_generator(&scalar);
//! let g2 = <PairingEngine as PairingBackend>::G2::generator();
//!
//! let gt = PairingEngine::pairing(&g1, &g2);
//! println!("{gt:?}");
//! ```

mod field;
pub use field::*;

mod group;
pub use group::*;

mod pairing;
pub use pairing::*;
