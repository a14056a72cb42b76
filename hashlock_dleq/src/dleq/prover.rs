use crate::{
    bases::DleqBases,
    curve::{params::CurveParameters, point::CurvePoint},
    dleq::{hashlock_for_secret, DleqProof, DleqStatement, DleqVerificationHints, NONCE_SALT},
    error::DleqError,
    field::{to_le_bytes, Scalar},
    hint::ScalarMulHint,
    transcript::CONTEXT_SIZE,
};
use ark_ff::Zero;
use ark_std::{end_timer, io::Write, start_timer};
use dleq_crypto_utils::{concat_slices, hashing_utils::field_elem_from_seed};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Prover state after committing to the nonce. Holds the secret and the nonce, both are zeroized on drop.
#[derive(Clone, PartialEq, Eq, Debug, Zeroize, ZeroizeOnDrop)]
pub struct DleqProtocol {
    #[zeroize(skip)]
    pub statement: DleqStatement,
    /// Commitment `k * G`
    #[zeroize(skip)]
    pub r1: CurvePoint,
    /// Commitment `k * Y`
    #[zeroize(skip)]
    pub r2: CurvePoint,
    nonce: Scalar,
    secret: Scalar,
}

impl DleqProtocol {
    /// Compute `T = t * G`, `U = t * Y`, derive the nonce and commit to it. The nonce is an HKDF of the
    /// secret and the context so it is the same each time for the same inputs and unrelated for different ones.
    pub fn init(
        secret: Scalar,
        bases: &DleqBases,
        context: [u8; CONTEXT_SIZE],
    ) -> Result<Self, DleqError> {
        if secret.is_zero() {
            return Err(DleqError::ZeroScalar);
        }
        let t = bases.g.mul(&secret);
        let u = bases.y.mul(&secret);

        let mut secret_bytes = to_le_bytes(&secret);
        let mut seed = concat_slices!(secret_bytes, context);
        secret_bytes.zeroize();
        let nonce = field_elem_from_seed::<Scalar>(&seed, NONCE_SALT);
        seed.zeroize();

        Ok(Self {
            statement: DleqStatement::new(bases, t, u, context),
            r1: bases.g.mul(&nonce),
            r2: bases.y.mul(&nonce),
            nonce,
            secret,
        })
    }

    /// Like [`Self::init`] but also checks that `T` is the adaptor point the caller expects
    pub fn init_for_adaptor_point(
        secret: Scalar,
        expected_t: &CurvePoint,
        bases: &DleqBases,
        context: [u8; CONTEXT_SIZE],
    ) -> Result<Self, DleqError> {
        let protocol = Self::init(secret, bases, context)?;
        if protocol.statement.t != *expected_t {
            return Err(DleqError::PointMismatch);
        }
        Ok(protocol)
    }

    pub fn challenge_contribution<W: Write>(&self, writer: W) -> Result<(), DleqError> {
        self.statement
            .transcript(&self.r1.compress(), &self.r2.compress())
            .write(writer)
            .map_err(|e| DleqError::Serialization(e.into()))
    }

    pub fn compute_challenge(&self) -> Scalar {
        self.statement
            .transcript(&self.r1.compress(), &self.r2.compress())
            .challenge()
    }

    /// Response `s = k + c * t`
    pub fn gen_proof(self, challenge: &Scalar) -> DleqProof {
        DleqProof {
            r1: self.r1.compress(),
            r2: self.r2.compress(),
            challenge: *challenge,
            response: self.nonce + *challenge * self.secret,
        }
    }
}

impl DleqProof {
    /// Run the whole prover and return the statement along with the proof
    pub fn new(
        secret: Scalar,
        bases: &DleqBases,
        context: [u8; CONTEXT_SIZE],
    ) -> Result<(DleqStatement, Self), DleqError> {
        let prover_time = start_timer!(|| "Generate DLEQ proof");
        let protocol = DleqProtocol::init(secret, bases, context)?;
        let challenge = protocol.compute_challenge();
        let statement = protocol.statement;
        let proof = protocol.gen_proof(&challenge);
        end_timer!(prover_time);
        Ok((statement, proof))
    }

    /// Same as [`Self::new`] but the context must be the hashlock of the secret, fails with
    /// `HashlockMismatch` otherwise
    pub fn new_for_hashlock(
        secret: Scalar,
        bases: &DleqBases,
        hashlock: [u8; CONTEXT_SIZE],
    ) -> Result<(DleqStatement, Self), DleqError> {
        if hashlock_for_secret(&secret) != hashlock {
            return Err(DleqError::HashlockMismatch);
        }
        Self::new(secret, bases, hashlock)
    }

    /// Square root witnesses for `R1` and `R2` and the hints for `s * G`, `s * Y`, `-c * T` and `-c * U`
    pub fn verification_hints(
        &self,
        statement: &DleqStatement,
        params: &CurveParameters,
    ) -> Result<DleqVerificationHints, DleqError> {
        let hints_time = start_timer!(|| "Generate DLEQ verification hints");
        let minus_c = -self.challenge;
        let hints = DleqVerificationHints {
            r1_x: self.r1.recover_x(params)?,
            r2_x: self.r2.recover_x(params)?,
            s_g: ScalarMulHint::new(&statement.g, &self.response, params)?,
            s_y: ScalarMulHint::new(&statement.y, &self.response, params)?,
            c_t: ScalarMulHint::new(&statement.t, &minus_c, params)?,
            c_u: ScalarMulHint::new(&statement.u, &minus_c, params)?,
        };
        end_timer!(hints_time);
        Ok(hints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::{
        rand::{rngs::StdRng, SeedableRng},
        UniformRand,
    };

    #[test]
    fn prover_steps() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let bases = DleqBases::standard();
        let secret = Scalar::rand(&mut rng);
        let context = hashlock_for_secret(&secret);

        let protocol = DleqProtocol::init(secret, &bases, context).unwrap();
        assert_eq!(protocol.statement.t, bases.g.mul(&secret));
        assert_eq!(protocol.statement.u, bases.y.mul(&secret));

        let mut chal_bytes = vec![];
        protocol.challenge_contribution(&mut chal_bytes).unwrap();
        assert_eq!(chal_bytes.len(), 228);
        let challenge = protocol.compute_challenge();
        let statement = protocol.statement;
        let r1 = protocol.r1;
        let proof = protocol.gen_proof(&challenge);

        assert_eq!(proof.r1, r1.compress());
        assert_eq!(proof.challenge, challenge);
        // s * G - c * T = R1
        assert_eq!(
            bases.g.mul(&proof.response).add(&statement.t.mul(&-challenge)),
            r1
        );

        let (statement_2, proof_2) = DleqProof::new_for_hashlock(secret, &bases, context).unwrap();
        assert_eq!(statement_2, statement);
        assert_eq!(proof_2, proof);
    }

    #[test]
    fn deterministic_nonce() {
        let mut rng = StdRng::seed_from_u64(1u64);
        let bases = DleqBases::standard();
        let secret = Scalar::rand(&mut rng);
        let (_, p1) = DleqProof::new(secret, &bases, [1u8; 32]).unwrap();
        let (_, p2) = DleqProof::new(secret, &bases, [1u8; 32]).unwrap();
        assert_eq!(p1.to_bytes(), p2.to_bytes());

        // Different context or secret means a different nonce
        let (_, p3) = DleqProof::new(secret, &bases, [2u8; 32]).unwrap();
        let (_, p4) = DleqProof::new(secret + Scalar::from(1u64), &bases, [1u8; 32]).unwrap();
        assert_ne!(p1.r1, p3.r1);
        assert_ne!(p1.r1, p4.r1);
    }

    #[test]
    fn prover_errors() {
        let bases = DleqBases::standard();
        assert!(matches!(
            DleqProtocol::init(Scalar::zero(), &bases, [0u8; 32]),
            Err(DleqError::ZeroScalar)
        ));

        let secret = Scalar::from(42u64);
        let t = bases.g.mul(&secret);
        assert!(DleqProtocol::init_for_adaptor_point(secret, &t, &bases, [0u8; 32]).is_ok());
        assert!(matches!(
            DleqProtocol::init_for_adaptor_point(secret, &t.double(), &bases, [0u8; 32]),
            Err(DleqError::PointMismatch)
        ));

        assert!(matches!(
            DleqProof::new_for_hashlock(secret, &bases, [0u8; 32]),
            Err(DleqError::HashlockMismatch)
        ));
    }

    #[test]
    fn hints_match_proof() {
        let params = CurveParameters::ed25519();
        let bases = DleqBases::standard();
        let secret = Scalar::from(7u64);
        let (statement, proof): (DleqStatement, DleqProof) =
            DleqProof::new(secret, &bases, [3u8; 32]).unwrap();
        let hints = proof.verification_hints(&statement, &params).unwrap();
        assert_eq!(
            hints.s_g.bind(&bases.g, &params).unwrap(),
            bases.g.mul(&proof.response)
        );
        assert_eq!(
            hints.c_u.bind(&statement.u, &params).unwrap(),
            statement.u.mul(&-proof.challenge)
        );
        assert_eq!(
            proof.r1.decompress(&hints.r1_x, &params).unwrap(),
            bases.g.mul(&proof.response).add(&statement.t.mul(&-proof.challenge))
        );
        assert_eq!(hints.to_felts().len(), 40);
    }
}
