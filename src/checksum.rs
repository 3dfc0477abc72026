//! CRC-32 (IEEE 802.3, reflected) used to catch transcription errors.

/// Checksum size in bytes
pub const CHECKSUM_SIZE: usize = 4;

const POLYNOMIAL: u32 = 0xEDB8_8320;

const TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ POLYNOMIAL
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Compute the CRC-32 of `data`
pub fn crc32(data: &[u8]) -> u32 {
    let crc = data.iter().fold(0xFFFF_FFFFu32, |crc, &byte| {
        TABLE[((crc ^ byte as u32) & 0xFF) as usize] ^ (crc >> 8)
    });
    !crc
}

/// CRC-32 of `data` as 4 bytes, most significant first
pub fn checksum_bytes(data: &[u8]) -> [u8; CHECKSUM_SIZE] {
    crc32(data).to_be_bytes()
}

/// Return `data` with its checksum appended: data || crc32(data)
pub fn append_checksum(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len() + CHECKSUM_SIZE);
    result.extend_from_slice(data);
    result.extend_from_slice(&checksum_bytes(data));
    result
}

/// Split a checksummed buffer into (body, trailer).
/// Returns None if the buffer is too short to carry a checksum.
pub fn split_checksum(buffer: &[u8]) -> Option<(&[u8], [u8; CHECKSUM_SIZE])> {
    if buffer.len() < CHECKSUM_SIZE {
        return None;
    }

    let (body, trailer) = buffer.split_at(buffer.len() - CHECKSUM_SIZE);
    let mut stored = [0u8; CHECKSUM_SIZE];
    stored.copy_from_slice(trailer);
    Some((body, stored))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc32_check_value() {
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn test_crc32_empty() {
        assert_eq!(crc32(&[]), 0);
    }

    #[test]
    fn test_crc32_single_zero_byte() {
        assert_eq!(crc32(&[0x00]), 0xD202_EF8D);
        assert_eq!(checksum_bytes(&[0x00]), [0xD2, 0x02, 0xEF, 0x8D]);
    }

    #[test]
    fn test_crc32_text() {
        assert_eq!(crc32(b"Hello, World!"), 0xEC4A_C3D0);
    }

    #[test]
    fn test_append_checksum() {
        let buffer = append_checksum(&[0x00]);
        assert_eq!(buffer, vec![0x00, 0xD2, 0x02, 0xEF, 0x8D]);

        let empty = append_checksum(&[]);
        assert_eq!(empty, vec![0u8; CHECKSUM_SIZE]);
    }

    #[test]
    fn test_split_checksum() {
        let buffer = append_checksum(b"payload");
        let (body, trailer) = split_checksum(&buffer).unwrap();
        assert_eq!(body, b"payload");
        assert_eq!(u32::from_be_bytes(trailer), crc32(b"payload"));
    }

    #[test]
    fn test_split_checksum_too_short() {
        assert!(split_checksum(&[1, 2, 3]).is_none());
        let (body, _) = split_checksum(&[0, 0, 0, 0]).unwrap();
        assert!(body.is_empty());
    }
}
