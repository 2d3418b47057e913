use subtle::Choice;

/// Constant-time equality over byte slices.
pub trait ConstantTimeEq {
    fn ct_eq(&self, other: &Self) -> bool;
}

impl ConstantTimeEq for [u8] {
    /// Walks the full length of the shorter slice before the length
    /// difference is folded in, so the running time does not depend on the
    /// position of the first mismatch.
    fn ct_eq(&self, other: &Self) -> bool {
        let shared = self.len().min(other.len());
        let mut diff = Choice::from(u8::from(self.len() != other.len()));
        for (lhs, rhs) in self[..shared].iter().zip(&other[..shared]) {
            diff |= !subtle::ConstantTimeEq::ct_eq(lhs, rhs);
        }
        (!diff).into()
    }
}
