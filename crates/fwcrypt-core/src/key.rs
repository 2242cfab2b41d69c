//! Key and round-key-schedule types.

use crate::block::Block;

/// Length in bytes of a cipher key.
pub const KEY_LEN: usize = 16;

/// Number of entries in an expanded round-key schedule.
pub const SCHEDULE_LEN: usize = 11;

/// A 16-byte firmware encryption key.
///
/// Keys arrive as configuration strings; the framing layer validates the
/// UTF-8 byte length before constructing this type, so holders of a
/// `CipherKey` always carry exactly 16 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CipherKey(pub [u8; KEY_LEN]);

impl From<[u8; KEY_LEN]> for CipherKey {
    fn from(value: [u8; KEY_LEN]) -> Self {
        Self(value)
    }
}

/// Expanded schedule of eleven 16-byte round keys.
///
/// Entry 0 is a copy of the raw key; entries 1..=10 are derived, each from
/// only the immediately preceding entry. Built once per encryption
/// invocation and dropped on return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeySchedule(pub [Block; SCHEDULE_LEN]);

impl RoundKeySchedule {
    /// Returns the schedule entry at the requested index (0..=10).
    #[inline]
    pub fn get(&self, index: usize) -> &Block {
        &self.0[index]
    }
}
