use crate::{
    error::DleqError,
    field::{divide, FieldElement},
};
use ark_ff::{Field, MontFp, One, Zero};

/// Coefficients of a twisted Edwards curve `a * x^2 + y^2 = 1 + d * x^2 * y^2` along with the
/// coefficients of its birationally equivalent Montgomery curve `B * v^2 = u^3 + A * u^2 + u` and
/// short Weierstrass curve `v^2 = u^3 + a_w * u + b_w`. Values of this type are immutable and are
/// passed explicitly to every function that needs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveParameters {
    a: FieldElement,
    d: FieldElement,
    montgomery_a: FieldElement,
    montgomery_b: FieldElement,
    weierstrass_a: FieldElement,
    weierstrass_b: FieldElement,
}

impl CurveParameters {
    /// Ed25519, `a = -1` and `d = -121665 / 121666`. The Montgomery form is Curve25519 with `A = 486662`
    /// and `B = -486664`.
    pub const fn ed25519() -> Self {
        Self {
            a: MontFp!("-1"),
            d: MontFp!(
                "37095705934669439343138083508754565189542113879843219016388785533085940283555"
            ),
            montgomery_a: MontFp!("486662"),
            montgomery_b: MontFp!(
                "57896044618658097711785492504343953926634992332820282019728792003956564333285"
            ),
            weierstrass_a: MontFp!(
                "42204101795669822316448953119945047945709099015225996174933988943478124189485"
            ),
            weierstrass_b: MontFp!(
                "13148341720542919587570920744190446479425344491440436116213316435534172959396"
            ),
        }
    }

    /// Derive the Montgomery and Weierstrass coefficients from `a` and `d`.
    /// `A = 2(a + d) / (a - d)`, `B = 4 / (a - d)`, `a_w = (3 - A^2) / 3B^2` and `b_w = (2A^3 - 9A) / 27B^3`
    pub fn from_twisted_edwards(a: FieldElement, d: FieldElement) -> Result<Self, DleqError> {
        if a.is_zero() || d.is_zero() {
            return Err(DleqError::DivisionByZero);
        }
        let a_minus_d = a - d;
        let two = FieldElement::from(2u64);
        let three = FieldElement::from(3u64);
        let montgomery_a = divide(&(two * (a + d)), &a_minus_d)?;
        let montgomery_b = divide(&FieldElement::from(4u64), &a_minus_d)?;

        let mont_a_sqr = montgomery_a.square();
        let mont_b_sqr = montgomery_b.square();
        let weierstrass_a = divide(&(three - mont_a_sqr), &(three * mont_b_sqr))?;
        let weierstrass_b = divide(
            &(two * mont_a_sqr * montgomery_a - FieldElement::from(9u64) * montgomery_a),
            &(FieldElement::from(27u64) * mont_b_sqr * montgomery_b),
        )?;
        Ok(Self {
            a,
            d,
            montgomery_a,
            montgomery_b,
            weierstrass_a,
            weierstrass_b,
        })
    }

    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    pub fn d(&self) -> &FieldElement {
        &self.d
    }

    pub fn montgomery_a(&self) -> &FieldElement {
        &self.montgomery_a
    }

    pub fn montgomery_b(&self) -> &FieldElement {
        &self.montgomery_b
    }

    pub fn weierstrass_a(&self) -> &FieldElement {
        &self.weierstrass_a
    }

    pub fn weierstrass_b(&self) -> &FieldElement {
        &self.weierstrass_b
    }

    /// `a * x^2 + y^2 == 1 + d * x^2 * y^2`
    pub fn is_on_edwards_curve(&self, x: &FieldElement, y: &FieldElement) -> bool {
        let x2 = x.square();
        let y2 = y.square();
        self.a * x2 + y2 == FieldElement::one() + self.d * x2 * y2
    }

    /// `y^2 == x^3 + a_w * x + b_w`
    pub fn is_on_weierstrass_curve(&self, x: &FieldElement, y: &FieldElement) -> bool {
        y.square() == x.square() * x + self.weierstrass_a * x + self.weierstrass_b
    }
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self::ed25519()
    }
}
