use bitflags::bitflags;
use secstr::SecStr;

use crate::error::ParamError;

pub const MIN_SALT_LEN: usize = 8;
pub const MIN_HASH_LEN: usize = 4;
pub const MAX_HASH_LEN: usize = 0xFFFF_FFFF;
pub const MIN_ITERATIONS: u32 = 1;
pub const MIN_MEMORY_KIB: u32 = 8;
pub const MAX_PARALLELISM: u32 = 0xFF_FFFF;
pub const MAX_SECRET_LEN: usize = 0xFFFF_FFFF;
pub const MAX_ASSOCIATED_DATA_LEN: usize = 32;

/// Argon2 variant. The lowercase token doubles as the mode segment of the
/// encoded string format.
#[derive(strum::Display, strum::EnumString, Copy, Hash, Debug, Clone, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Argon2d,
    Argon2i,
    Argon2id,
}

/// Argon2 version number, rendered in decimal (16 or 19) in the encoded
/// string format.
#[derive(Copy, Hash, Debug, Clone, Eq, PartialEq, Default)]
pub enum Version {
    V0x10 = 0x10,
    #[default]
    V0x13 = 0x13,
}

impl Version {
    pub const DEFAULT: Self = Version::V0x13;

    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            0x10 => Some(Version::V0x10),
            0x13 => Some(Version::V0x13),
            _ => None,
        }
    }
}

/// Buffers to zero once the primitive has returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearFlags(u8);
bitflags! {
    impl ClearFlags: u8 {
        /// Zero the caller's password buffer in place.
        const Password = 0b0000_0001;
        /// Zero the context-owned secret in place.
        const Secret = 0b0000_0010;
        /// Wipe the working block buffer before releasing it.
        const Memory = 0b0000_0100;
    }
}

/// Static configuration for one hash computation.
///
/// A context is a pure value: two calls with identical context, password,
/// and salt produce identical hash bytes. The only mutations are the ones
/// requested through [`ClearFlags`], which is why the hashing entry points
/// take `&mut self` and the password as `&mut [u8]` — a context with a
/// clear policy cannot be shared across concurrently executing calls.
#[derive(Debug, Clone)]
pub struct Context {
    /// Number of passes over memory (t_cost).
    pub iterations: u32,
    /// Working-set size in KiB (m_cost).
    pub memory_kib: u32,
    /// Lane count, also used as the thread count by the primitive.
    pub parallelism: u32,
    /// Desired output length in bytes.
    pub hash_len: usize,
    pub mode: Mode,
    pub version: Version,
    /// Optional key mixed into the computation; wiped when dropped.
    pub secret: Option<SecStr>,
    /// Optional non-secret context bytes bound to the output.
    pub associated_data: Option<Vec<u8>>,
    pub clear: ClearFlags,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            iterations: 3,
            memory_kib: 1 << 12,
            parallelism: 1,
            hash_len: 32,
            mode: Mode::Argon2i,
            version: Version::DEFAULT,
            secret: None,
            associated_data: None,
            clear: ClearFlags::default(),
        }
    }
}

impl Context {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Checks the context and the password/salt lengths against the
    /// documented bounds. The first failing check wins; nothing is mutated
    /// and the primitive is never reached on failure.
    pub fn validate(&self, password_len: usize, salt_len: usize) -> Result<(), ParamError> {
        if password_len == 0 {
            return Err(ParamError::PasswordEmpty);
        }
        if salt_len < MIN_SALT_LEN {
            return Err(ParamError::SaltTooShort(salt_len));
        }
        if self.hash_len < MIN_HASH_LEN || self.hash_len > MAX_HASH_LEN {
            return Err(ParamError::HashLenOutOfRange(self.hash_len));
        }
        if self.iterations < MIN_ITERATIONS {
            return Err(ParamError::IterationsTooSmall(self.iterations));
        }
        let required = MIN_MEMORY_KIB.max(self.parallelism.saturating_mul(8));
        if self.memory_kib < required {
            return Err(ParamError::MemoryTooLittle {
                required,
                actual: self.memory_kib,
            });
        }
        if self.parallelism == 0 || self.parallelism > MAX_PARALLELISM {
            return Err(ParamError::ParallelismOutOfRange(self.parallelism));
        }
        if let Some(len) = self.secret_bytes().map(<[u8]>::len) {
            if len > MAX_SECRET_LEN {
                return Err(ParamError::SecretTooLong(len));
            }
        }
        if let Some(len) = self.associated_data_bytes().map(<[u8]>::len) {
            if len > MAX_ASSOCIATED_DATA_LEN {
                return Err(ParamError::AssociatedDataTooLong(len));
            }
        }
        Ok(())
    }

    /// Absent and empty are equivalent: both mean "no secret".
    pub(crate) fn secret_bytes(&self) -> Option<&[u8]> {
        self.secret
            .as_ref()
            .map(SecStr::unsecure)
            .filter(|bytes| !bytes.is_empty())
    }

    /// Absent and empty are equivalent: both mean "no associated data".
    pub(crate) fn associated_data_bytes(&self) -> Option<&[u8]> {
        self.associated_data
            .as_deref()
            .filter(|bytes| !bytes.is_empty())
    }
}
