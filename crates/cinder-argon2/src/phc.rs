//! Canonical `$argon2…` string encoding.
//!
//! The grammar is the PHC-style Argon2 convention, `$`-delimited with
//! unpadded standard-alphabet base64:
//!
//! ```text
//! $argon2<d|i|id>$v=<version>$m=<memoryKiB>,t=<iterations>,p=<parallelism>$<b64(salt)>$<b64(hash)>
//! ```

use std::str::FromStr;

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;

use crate::{
    context::{Context, Mode, Version},
    error::DecodeError,
};

/// Encodes a computed hash together with the parameters that produced it.
#[must_use]
pub fn encode(ctx: &Context, salt: &[u8], hash: &[u8]) -> String {
    format!(
        "${}$v={}$m={},t={},p={}${}${}",
        ctx.mode,
        ctx.version.as_u32(),
        ctx.memory_kib,
        ctx.iterations,
        ctx.parallelism,
        STANDARD_NO_PAD.encode(salt),
        STANDARD_NO_PAD.encode(hash),
    )
}

/// Parses an encoded string back into its context, salt, and hash.
///
/// Segments are matched strictly in grammar order. A missing `v=` segment is
/// read as version 16, which predates the version field. The decoded
/// parallelism is both the lane count and the thread count; the format
/// carries a single value for the two.
pub fn decode(encoded: &str) -> Result<(Context, Vec<u8>, Vec<u8>), DecodeError> {
    let mut segments = encoded.split('$');
    if segments.next() != Some("") {
        return Err(DecodeError::Malformed);
    }

    let token = segments.next().ok_or(DecodeError::Malformed)?;
    let mode = Mode::from_str(token).map_err(|_| DecodeError::UnknownMode(token.to_string()))?;

    let mut segment = segments.next().ok_or(DecodeError::Malformed)?;
    let version = match segment.strip_prefix("v=") {
        Some(raw) => {
            let number = parse_u32(raw)?;
            segment = segments.next().ok_or(DecodeError::Malformed)?;
            Version::from_u32(number).ok_or(DecodeError::UnsupportedVersion(number))?
        }
        None => Version::V0x10,
    };

    let (memory_kib, iterations, parallelism) = decode_costs(segment)?;

    let salt = decode_b64(segments.next().ok_or(DecodeError::Malformed)?)?;
    let hash = decode_b64(segments.next().ok_or(DecodeError::Malformed)?)?;
    if segments.next().is_some() {
        return Err(DecodeError::Malformed);
    }

    let ctx = Context {
        iterations,
        memory_kib,
        parallelism,
        hash_len: hash.len(),
        mode,
        version,
        ..Context::default()
    };

    Ok((ctx, salt, hash))
}

fn decode_costs(segment: &str) -> Result<(u32, u32, u32), DecodeError> {
    let mut fields = segment.split(',');
    let memory_kib = cost_field(fields.next(), "m=")?;
    let iterations = cost_field(fields.next(), "t=")?;
    let parallelism = cost_field(fields.next(), "p=")?;
    if fields.next().is_some() {
        return Err(DecodeError::Malformed);
    }
    Ok((memory_kib, iterations, parallelism))
}

fn cost_field(field: Option<&str>, key: &str) -> Result<u32, DecodeError> {
    field
        .and_then(|field| field.strip_prefix(key))
        .ok_or(DecodeError::Malformed)
        .and_then(parse_u32)
}

fn parse_u32(raw: &str) -> Result<u32, DecodeError> {
    // Stricter than str::parse: no sign, no leading '+'.
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(DecodeError::Malformed);
    }
    raw.parse().map_err(|_| DecodeError::Malformed)
}

fn decode_b64(segment: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD_NO_PAD
        .decode(segment)
        .map_err(|_| DecodeError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ClearFlags;

    const ENCODED: &str =
        "$argon2d$v=19$m=4096,t=3,p=1$c29tZXNhbHQ$THaZx86KeqT+xuygENqvxaYIk3zu4wH0UmqzBL/wrdQ";

    #[test]
    fn encoded_vector() {
        let mut ctx = Context::new(Mode::Argon2d);
        let encoded = ctx
            .hash_encoded(&mut b"somepassword".to_vec(), b"somesalt")
            .unwrap();
        assert_eq!(encoded, ENCODED);
    }

    #[test]
    fn decode_populates_context() {
        let (ctx, salt, hash) = decode(ENCODED).unwrap();
        assert_eq!(ctx.mode, Mode::Argon2d);
        assert_eq!(ctx.version, Version::V0x13);
        assert_eq!(ctx.memory_kib, 4096);
        assert_eq!(ctx.iterations, 3);
        assert_eq!(ctx.parallelism, 1);
        assert_eq!(ctx.hash_len, hash.len());
        assert!(ctx.secret.is_none());
        assert!(ctx.associated_data.is_none());
        assert_eq!(ctx.clear, ClearFlags::default());
        assert_eq!(salt, b"somesalt");
        assert_eq!(hash.len(), 32);
    }

    #[test]
    fn round_trips_every_mode_and_version() {
        let salt = b"\x00\xffsalty!!\x80";
        let hash = [0xabu8; 24];
        for mode in [Mode::Argon2d, Mode::Argon2i, Mode::Argon2id] {
            for version in [Version::V0x10, Version::V0x13] {
                let mut ctx = Context::new(mode);
                ctx.version = version;
                ctx.iterations = 7;
                ctx.memory_kib = 128;
                ctx.parallelism = 3;
                ctx.hash_len = hash.len();

                let (decoded, salt2, hash2) = decode(&encode(&ctx, salt, &hash)).unwrap();
                assert_eq!(decoded.mode, mode);
                assert_eq!(decoded.version, version);
                assert_eq!(decoded.iterations, ctx.iterations);
                assert_eq!(decoded.memory_kib, ctx.memory_kib);
                assert_eq!(decoded.parallelism, ctx.parallelism);
                assert_eq!(decoded.hash_len, hash.len());
                assert_eq!(salt2, salt);
                assert_eq!(hash2, hash);
            }
        }
    }

    #[test]
    fn missing_version_segment_reads_as_v16() {
        let (ctx, salt, _) = decode("$argon2i$m=4096,t=3,p=1$c29tZXNhbHQ$AAAAAAAA").unwrap();
        assert_eq!(ctx.version, Version::V0x10);
        assert_eq!(salt, b"somesalt");
    }

    #[test]
    fn unknown_mode_token() {
        let err = decode("$argon2x$v=19$m=4096,t=3,p=1$c29tZXNhbHQ$AAAAAAAA").unwrap_err();
        assert_eq!(err, DecodeError::UnknownMode("argon2x".to_string()));
    }

    #[test]
    fn unsupported_version_number() {
        let err = decode("$argon2i$v=18$m=4096,t=3,p=1$c29tZXNhbHQ$AAAAAAAA").unwrap_err();
        assert_eq!(err, DecodeError::UnsupportedVersion(18));
    }

    #[test]
    fn malformed_inputs() {
        let cases = [
            "",
            "argon2i$v=19$m=4096,t=3,p=1$c29tZXNhbHQ$AAAAAAAA",
            "$argon2i$v=19$m=4096,t=3$c29tZXNhbHQ$AAAAAAAA",
            "$argon2i$v=19$t=3,m=4096,p=1$c29tZXNhbHQ$AAAAAAAA",
            "$argon2i$v=19$m=4096,t=3,p=1,x=0$c29tZXNhbHQ$AAAAAAAA",
            "$argon2i$v=19$m=40z6,t=3,p=1$c29tZXNhbHQ$AAAAAAAA",
            "$argon2i$v=+19$m=4096,t=3,p=1$c29tZXNhbHQ$AAAAAAAA",
            "$argon2i$v=19$m=4096,t=3,p=1$c29tZXNhbHQ=$AAAAAAAA",
            "$argon2i$v=19$m=4096,t=3,p=1$c29tZXNhbHQ$AAAA!AAA",
            "$argon2i$v=19$m=4096,t=3,p=1$c29tZXNhbHQ",
            "$argon2i$v=19$m=4096,t=3,p=1$c29tZXNhbHQ$AAAAAAAA$extra",
        ];
        for case in cases {
            let err = decode(case).unwrap_err();
            assert_eq!(err, DecodeError::Malformed, "case: {case:?}");
        }
    }
}
