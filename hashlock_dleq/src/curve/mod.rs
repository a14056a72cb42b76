//! Ed25519 points in twisted Edwards form, their 32-byte compressed encoding and their image on the
//! short Weierstrass curve used by the verifier.
//!
//! Every function that depends on the curve equation takes an explicit [`CurveParameters`](params::CurveParameters).

pub mod compression;
pub mod params;
pub mod point;
pub mod weierstrass;
