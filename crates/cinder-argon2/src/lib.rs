//! Memory-hard password hashing built on Argon2.
//!
//! A [`Context`] carries the cost parameters, mode, and version for one
//! computation; hashing and verification take the password and salt as
//! explicit buffers. Results can be returned as raw bytes, stored as a
//! PHC-style `$argon2…` string via [`Context::hash_encoded`], and checked
//! later with [`verify_encoded`].
//!
//! Argon2i is useful for protection against side-channel attacks (key
//! derivation), Argon2d provides the highest resistance against GPU
//! cracking attacks (proof-of-work), and Argon2id is the hybrid of the two.
//!
//! Hashing is synchronous and CPU/memory-bound: each call allocates its own
//! working memory of `memory_kib` KiB, used and released within that call,
//! and blocks the calling thread for the full duration. There is no
//! cancellation; a caller imposing a deadline must run the call on its own
//! thread and abandon it, accepting that the working memory is reclaimed
//! only once the abandoned call completes.

pub mod context;
pub mod eq;
pub mod error;
pub mod phc;

mod hash;
mod primitive;
mod verify;

pub use context::{
    ClearFlags, Context, Mode, Version, MAX_ASSOCIATED_DATA_LEN, MAX_HASH_LEN, MAX_PARALLELISM,
    MAX_SECRET_LEN, MIN_HASH_LEN, MIN_ITERATIONS, MIN_MEMORY_KIB, MIN_SALT_LEN,
};
pub use error::{DecodeError, HashError, ParamError, VerifyError};
pub use phc::{decode, encode};
pub use verify::verify_encoded;
