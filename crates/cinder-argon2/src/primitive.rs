//! Single point of contact with the underlying memory-hard primitive.

use argon2::{Algorithm, Argon2, AssociatedData, Block, Params, ParamsBuilder};
use zeroize::Zeroize;

use crate::{
    context::{ClearFlags, Context, Mode, Version},
    error::HashError,
};

impl From<Mode> for Algorithm {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Argon2d => Algorithm::Argon2d,
            Mode::Argon2i => Algorithm::Argon2i,
            Mode::Argon2id => Algorithm::Argon2id,
        }
    }
}

impl From<Version> for argon2::Version {
    fn from(value: Version) -> Self {
        match value {
            Version::V0x10 => argon2::Version::V0x10,
            Version::V0x13 => argon2::Version::V0x13,
        }
    }
}

/// Runs the memory-hard computation and fills `out`.
///
/// The working block buffer is allocated here, used for this one call, and
/// wiped before release when the `Memory` clear flag is set.
pub(crate) fn hash_into(
    ctx: &Context,
    password: &[u8],
    salt: &[u8],
    out: &mut [u8],
) -> Result<(), HashError> {
    let params = params(ctx, out.len()).map_err(HashError::Primitive)?;

    let primitive = match ctx.secret_bytes() {
        Some(secret) => {
            Argon2::new_with_secret(secret, ctx.mode.into(), ctx.version.into(), params.clone())
                .map_err(HashError::Primitive)?
        }
        None => Argon2::new(ctx.mode.into(), ctx.version.into(), params.clone()),
    };

    let mut blocks = vec![Block::new(); params.block_count()];
    let result = primitive
        .hash_password_into_with_memory(password, salt, out, &mut blocks)
        .map_err(HashError::Primitive);

    if ctx.clear.contains(ClearFlags::Memory) {
        blocks.zeroize();
    }

    result
}

fn params(ctx: &Context, output_len: usize) -> Result<Params, argon2::Error> {
    let mut builder = ParamsBuilder::new();
    builder
        .m_cost(ctx.memory_kib)
        .t_cost(ctx.iterations)
        .p_cost(ctx.parallelism)
        .output_len(output_len);
    if let Some(data) = ctx.associated_data_bytes() {
        builder.data(AssociatedData::new(data)?);
    }
    builder.build()
}
