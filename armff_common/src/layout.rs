//! Fixed binary layout of the gain set.
//!
//! Four little-endian `f64` values in the order `ks, kg, kv, ka`, 32 bytes
//! total. The schema string describes the same layout for consumers that
//! decode by schema rather than by type.

use static_assertions::const_assert_eq;
use thiserror::Error;

use crate::gains::ArmFeedforwardGains;

/// Errors raised while unpacking a packed gain set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Input holds fewer bytes than the layout requires.
    #[error("buffer too short for {type_name}: need {needed} bytes, got {actual}")]
    BufferTooShort {
        type_name: &'static str,
        needed: usize,
        actual: usize,
    },
}

/// Packed gain set: 4 × f64 = 32 bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct ArmFeedforwardLayout {
    /// Static friction gain [V].
    pub ks: f64,
    /// Gravity gain [V].
    pub kg: f64,
    /// Velocity gain [V/(rad/s)].
    pub kv: f64,
    /// Acceleration gain [V/(rad/s²)].
    pub ka: f64,
}

const_assert_eq!(core::mem::size_of::<ArmFeedforwardLayout>(), 32);

impl ArmFeedforwardLayout {
    /// Type name advertised alongside the schema.
    pub const TYPE_NAME: &'static str = "ArmFeedforward";

    /// Field schema, one `double` per gain in layout order.
    pub const SCHEMA: &'static str = "double ks;double kg;double kv;double ka";

    /// Packed size in bytes.
    pub const SIZE: usize = 32;

    /// Pack into little-endian bytes.
    pub fn pack(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        for (chunk, value) in out
            .chunks_exact_mut(8)
            .zip([self.ks, self.kg, self.kv, self.ka])
        {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        out
    }

    /// Unpack from the first [`Self::SIZE`] bytes of `bytes`.
    ///
    /// Trailing bytes are ignored.
    pub fn unpack(bytes: &[u8]) -> Result<Self, LayoutError> {
        if bytes.len() < Self::SIZE {
            return Err(LayoutError::BufferTooShort {
                type_name: Self::TYPE_NAME,
                needed: Self::SIZE,
                actual: bytes.len(),
            });
        }

        let mut values = [0.0f64; 4];
        for (value, chunk) in values.iter_mut().zip(bytes[..Self::SIZE].chunks_exact(8)) {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(chunk);
            *value = f64::from_le_bytes(raw);
        }

        Ok(Self::from(ArmFeedforwardGains::from_array(values)))
    }
}

impl From<ArmFeedforwardGains> for ArmFeedforwardLayout {
    fn from(g: ArmFeedforwardGains) -> Self {
        Self {
            ks: g.ks,
            kg: g.kg,
            kv: g.kv,
            ka: g.ka,
        }
    }
}

impl From<ArmFeedforwardLayout> for ArmFeedforwardGains {
    fn from(l: ArmFeedforwardLayout) -> Self {
        ArmFeedforwardGains::new(l.ks, l.kg, l.kv, l.ka)
    }
}
