// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Labels: 16-byte global identifiers for metadata types.

use std::fmt;

/// Number of bytes in a label.
pub const LABEL_LEN: usize = 16;

/// A 16-byte globally unique identifier, compared byte for byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(pub [u8; LABEL_LEN]);

impl Label {
    /// Wrap a 16-byte array.
    pub const fn new(bytes: [u8; LABEL_LEN]) -> Label {
        return Label(bytes);
    }

    /// Copy a label out of a slice, which must be exactly 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Option<Label> {
        let array: [u8; LABEL_LEN] = bytes.try_into().ok()?;
        return Some(Label(array));
    }

    /// The raw bytes of this label.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; LABEL_LEN] {
        return &self.0;
    }
}

impl From<[u8; LABEL_LEN]> for Label {
    fn from(bytes: [u8; LABEL_LEN]) -> Label {
        return Label(bytes);
    }
}

fn hex(bytes: &[u8]) -> String {
    return bytes.iter().map(|b| format!("{:02x}", b)).collect();
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        return Ok(());
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "Label({})", hex(&self.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_requires_sixteen_bytes() {
        assert!(Label::from_slice(&[0u8; 15]).is_none());
        assert!(Label::from_slice(&[0u8; 17]).is_none());
        assert_eq!(Label::from_slice(&[7u8; 16]), Some(Label([7u8; 16])));
    }

    #[test]
    fn ordering_is_bytewise() {
        let mut low = [0u8; 16];
        let mut high = [0u8; 16];
        low[15] = 0xff;
        high[0] = 0x01;
        assert!(Label(low) < Label(high));
    }

    #[test]
    fn display_is_dotted_hex() {
        let label = Label([
            0x06, 0x0e, 0x2b, 0x34, 0x02, 0x05, 0x01, 0x01,
            0x0d, 0x01, 0x02, 0x01, 0x01, 0x05, 0x01, 0x00,
        ]);
        assert_eq!(label.to_string(), "06.0e.2b.34.02.05.01.01.0d.01.02.01.01.05.01.00");
        assert_eq!(format!("{:?}", label), "Label(060e2b34020501010d01020101050100)");
    }
}
