use ark_serialize::SerializationError;

#[derive(Debug)]
pub enum DleqError {
    /// `(x, y)` does not satisfy the curve equation, or no `x` exists for the encoded `y`
    NotOnCurve,
    PointAtInfinity,
    /// The supplied `x` does not square to `(y^2 - 1) / (d * y^2 - a)`
    SqrtHintInvalid,
    SignBitMismatch,
    DivisionByZero,
    /// `s1 + k * s2 != 0 mod l` or one of `s1`, `s2` is zero
    InvalidDecomposition,
    /// A value is not below its modulus or does not fit in its bit width
    OutOfRange,
    /// `s1 * P + s2 * Q` is not the identity, so `Q` is not `k * P`
    HintPointMismatch,
    /// The point has a component of small order, i.e. it is not in the subgroup of order `l`
    NotInPrimeOrderSubgroup,
    /// Expected 10 felts in a hint but found given number
    InvalidHintLength(usize),
    ChallengeMismatch,
    ProofInvalid,
    ZeroScalar,
    /// The adaptor point given to the prover is not `t * G`
    PointMismatch,
    /// The context is not the SHA-256 hashlock of the secret
    HashlockMismatch,
    /// Both bases are the same point or one of them is the identity
    InvalidBases,
    Serialization(SerializationError),
}

impl DleqError {
    /// `true` if the inputs were well formed but the proof is false. Every other error means the
    /// input itself was malformed.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::ProofInvalid | Self::ChallengeMismatch)
    }
}

impl From<SerializationError> for DleqError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}
