//! `IdentityBytes`: the canonical byte form of a search value.
//!
//! Fingerprints, graph records and digests all hash these bytes, so two values
//! that compare equal must produce identical bytes. Integers encode
//! little-endian at their full width.

/// Canonical byte encoding of a state or action.
///
/// # Contract
///
/// - `a == b` implies `a.identity_bytes() == b.identity_bytes()`.
/// - The encoding is fixed-width for a given type, so concatenations stay
///   unambiguous.
pub trait IdentityBytes {
    /// Serialize to canonical bytes.
    fn identity_bytes(&self) -> Vec<u8>;
}

macro_rules! impl_identity_bytes_le {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IdentityBytes for $ty {
                fn identity_bytes(&self) -> Vec<u8> {
                    self.to_le_bytes().to_vec()
                }
            }
        )+
    };
}

impl_identity_bytes_le!(u8, u16, u32, u64);

impl<T: IdentityBytes> IdentityBytes for &T {
    fn identity_bytes(&self) -> Vec<u8> {
        (**self).identity_bytes()
    }
}
