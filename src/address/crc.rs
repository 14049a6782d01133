//! CRC16/XMODEM checksum used by friendly addresses

const POLY: u16 = 0x1021;

/// CRC16/XMODEM (poly 0x1021, init 0, no reflection)
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLY
            } else {
                crc << 1
            };
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value() {
        assert_eq!(crc16(b"123456789"), 0x31c3);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(crc16(&[]), 0);
    }
}
