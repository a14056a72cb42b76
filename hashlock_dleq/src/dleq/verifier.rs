use crate::{
    curve::{params::CurveParameters, point::CurvePoint},
    dleq::{DleqProof, DleqStatement, DleqVerificationHints},
    error::DleqError,
    hint::ScalarMulHint,
};
use alloc::vec::Vec;
use ark_std::{cfg_iter, end_timer, start_timer};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl DleqProof {
    /// Verify with untrusted `hints`. The checks happen in this order:
    /// 1. `R1` and `R2` are decompressed with the witnesses from `hints`. They and every point of the
    ///    statement must be in the prime order subgroup (`NotInPrimeOrderSubgroup`). The challenge `c'` is
    ///    recomputed from the transcript.
    /// 2. Each hint is verified against its base and scalar, `s` for `G` and `Y`, `-c` for `T` and `U`,
    ///    where `c` is the challenge in the proof.
    /// 3. Each hint is bound to its base and `Q_sG + Q_cT = R1`, `Q_sY + Q_cU = R2` is checked. A failure here
    ///    means the proof is false and is reported as `ProofInvalid`.
    /// 4. `c' = c` or `ChallengeMismatch`.
    ///
    /// Malformed encodings, witnesses or hints fail with their own errors in steps 1 and 2.
    pub fn verify(
        &self,
        statement: &DleqStatement,
        hints: &DleqVerificationHints,
        params: &CurveParameters,
    ) -> Result<(), DleqError> {
        let verify_time = start_timer!(|| "Verify DLEQ proof");
        let r1 = self.r1.decompress(&hints.r1_x, params)?;
        let r2 = self.r2.decompress(&hints.r2_x, params)?;
        statement.check_subgroup()?;
        if !r1.is_in_prime_order_subgroup() || !r2.is_in_prime_order_subgroup() {
            return Err(DleqError::NotInPrimeOrderSubgroup);
        }
        let expected_challenge = statement.transcript(&self.r1, &self.r2).challenge();

        let minus_c = -self.challenge;
        hints.s_g.verify(&statement.g, &self.response, params)?;
        hints.s_y.verify(&statement.y, &self.response, params)?;
        hints.c_t.verify(&statement.t, &minus_c, params)?;
        hints.c_u.verify(&statement.u, &minus_c, params)?;

        let s_g = bind(&hints.s_g, &statement.g, params)?;
        let s_y = bind(&hints.s_y, &statement.y, params)?;
        let c_t = bind(&hints.c_t, &statement.t, params)?;
        let c_u = bind(&hints.c_u, &statement.u, params)?;
        if s_g.add(&c_t) != r1 || s_y.add(&c_u) != r2 {
            return Err(DleqError::ProofInvalid);
        }

        if expected_challenge != self.challenge {
            return Err(DleqError::ChallengeMismatch);
        }
        end_timer!(verify_time);
        Ok(())
    }
}

fn bind(
    hint: &ScalarMulHint,
    base: &CurvePoint,
    params: &CurveParameters,
) -> Result<CurvePoint, DleqError> {
    hint.bind(base, params).map_err(|e| match e {
        DleqError::HintPointMismatch => DleqError::ProofInvalid,
        e => e,
    })
}

/// Verify independent proofs, in parallel with the `parallel` feature. Returns one result per item, in order.
pub fn verify_batch(
    items: &[(DleqStatement, DleqProof, DleqVerificationHints)],
    params: &CurveParameters,
) -> Vec<Result<(), DleqError>> {
    cfg_iter!(items)
        .map(|(statement, proof, hints)| proof.verify(statement, hints, params))
        .collect()
}
