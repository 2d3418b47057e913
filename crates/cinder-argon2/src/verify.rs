use crate::{
    context::Context,
    eq::ConstantTimeEq,
    error::{HashError, VerifyError},
    phc,
};

impl Context {
    /// Recomputes the hash for `password`/`salt` and compares it to
    /// `reference` in constant time.
    ///
    /// `Ok(true)` only on exact equality; any mismatch is `Ok(false)`. An
    /// error means the check itself could not run, never that the
    /// credentials were wrong.
    pub fn verify(
        &mut self,
        reference: &[u8],
        password: &mut [u8],
        salt: &[u8],
    ) -> Result<bool, HashError> {
        if reference.is_empty() {
            return Err(HashError::ReferenceHashEmpty);
        }
        let computed = self.hash(password, salt)?;
        Ok(computed.as_slice().ct_eq(reference))
    }
}

/// Verifies an encoded hash string against a plaintext password by decoding
/// it and recomputing with the decoded parameters.
///
/// The recompute-and-compare path is used deliberately; the primitive's own
/// verify entry point is not guaranteed constant-time.
pub fn verify_encoded(encoded: &str, password: &mut [u8]) -> Result<bool, VerifyError> {
    let (mut ctx, salt, hash) = phc::decode(encoded)?;
    Ok(ctx.verify(&hash, password, &salt)?)
}
