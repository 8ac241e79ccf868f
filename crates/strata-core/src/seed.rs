use sha2::{Digest, Sha256};

/// A 32-byte digest used to seed every randomized stage of a generation
/// call. Derived from an ordered token list; identical tokens always yield
/// the identical seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed([u8; 32]);

impl Seed {
    /// Derive a seed from an ordered sequence of tokens. Tokens are joined
    /// with `|` before hashing so that `["ab", "c"]` and `["a", "bc"]`
    /// digest differently.
    pub fn derive(tokens: &[&str]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(tokens.join("|").as_bytes());
        Self(hasher.finalize().into())
    }

    /// Derive a labeled child seed, isolating one randomness stream from
    /// its siblings (e.g. geometry vs. palette).
    pub fn child(&self, label: &str) -> Self {
        Self::derive(&[&self.to_hex(), label])
    }

    /// Hex rendering, used for child derivation and diagnostics.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(2 + 64);
        out.push_str("0x");
        for byte in &self.0 {
            out.push_str(&format!("{byte:02x}"));
        }
        out
    }

    /// The first sixteen digest bytes as four big-endian 32-bit words,
    /// the initial state of the random stream.
    pub fn words(&self) -> [u32; 4] {
        let mut words = [0u32; 4];
        for (i, word) in words.iter_mut().enumerate() {
            let off = i * 4;
            *word = u32::from_be_bytes([
                self.0[off],
                self.0[off + 1],
                self.0[off + 2],
                self.0[off + 3],
            ]);
        }
        words
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Hash an arbitrary key to a uniform value in [0, 1].
///
/// Used for cosmetic per-chunk variation so that styling never draws from
/// the shared random stream.
pub fn hash_unit(key: &str) -> f64 {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    let digest = hasher.finalize();
    let word = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    word as f64 / u32::MAX as f64
}
