use tracing::debug;
use zeroize::Zeroize;

use crate::{
    context::{ClearFlags, Context},
    error::HashError,
    phc, primitive,
};

impl Context {
    /// Hashes `password` with `salt`, returning the raw hash bytes.
    ///
    /// The password is taken mutably so the [`ClearFlags::Password`] policy
    /// can zero it in place before returning (even when the primitive
    /// fails); with the flag unset the buffer is left byte-identical.
    /// [`ClearFlags::Secret`] likewise zeroes the context-owned secret, so a
    /// context reused after that wipe hashes with a zeroed secret.
    pub fn hash(&mut self, password: &mut [u8], salt: &[u8]) -> Result<Vec<u8>, HashError> {
        self.validate(password.len(), salt.len())?;

        debug!(
            mode = %self.mode,
            version = self.version.as_u32(),
            m_cost = self.memory_kib,
            t_cost = self.iterations,
            p_cost = self.parallelism,
            hash_len = self.hash_len,
            "computing hash"
        );

        let mut out = vec![0u8; self.hash_len];
        let result = primitive::hash_into(self, password, salt, &mut out);

        if self.clear.contains(ClearFlags::Password) {
            password.zeroize();
        }
        if self.clear.contains(ClearFlags::Secret) {
            if let Some(secret) = &mut self.secret {
                secret.zero_out();
            }
        }

        result.map(|()| out)
    }

    /// Hashes `password` with `salt` and returns the encoded string form.
    pub fn hash_encoded(&mut self, password: &mut [u8], salt: &[u8]) -> Result<String, HashError> {
        let hash = self.hash(password, salt)?;
        Ok(phc::encode(self, salt, &hash))
    }
}
