//! Typed domain separators for canonical hashing.
//!
//! Every hash in the workspace selects a domain via [`HashDomain`], so a state
//! fingerprint can never collide with a graph digest over the same bytes.
//! The enum, `as_bytes()`, `ALL`, and `Display` come from one macro list.

macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Each variant maps to a unique, null-terminated prefix fed to
        /// SHA-256 ahead of the payload.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    // Search

    /// State fingerprints (dedup keys recorded in the search graph).
    SearchNode => b"FERRY::SEARCH_NODE::V1\0",

    /// Search graph digest over canonical JSON bytes.
    SearchGraph => b"FERRY::SEARCH_GRAPH::V1\0",

    // Harness

    /// Policy snapshot digest.
    PolicySnapshot => b"FERRY::POLICY_SNAPSHOT::V1\0",

    /// Run report digest.
    RunReport => b"FERRY::RUN_REPORT::V1\0",

    // Benchmarks

    /// Benchmark input hashing.
    BenchInput => b"FERRY::BENCH_INPUT::V1\0",
}
