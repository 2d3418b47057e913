#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("password is empty")]
    PasswordEmpty,

    #[error("salt too short: got {0} bytes, need at least 8")]
    SaltTooShort(usize),

    #[error("hash length out of range: {0}")]
    HashLenOutOfRange(usize),

    #[error("iterations too small: {0}")]
    IterationsTooSmall(u32),

    #[error("memory too little: need at least {required} KiB, got {actual}")]
    MemoryTooLittle { required: u32, actual: u32 },

    #[error("parallelism out of range: {0}")]
    ParallelismOutOfRange(u32),

    #[error("secret too long: {0} bytes")]
    SecretTooLong(usize),

    #[error("associated data too long: got {0} bytes, max 32")]
    AssociatedDataTooLong(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error(transparent)]
    Params(#[from] ParamError),

    /// The primitive reported failure; the message is resolved from the
    /// opaque code by its `Display` impl.
    #[error("argon2: {0}")]
    Primitive(argon2::Error),

    #[error("reference hash is empty")]
    ReferenceHashEmpty,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed encoded hash string")]
    Malformed,

    #[error("unknown mode token: {0:?}")]
    UnknownMode(String),

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u32),
}

/// Failure of [`crate::verify_encoded`]; a password mismatch is `Ok(false)`,
/// never an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Hash(#[from] HashError),
}
