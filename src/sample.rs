//! Deterministic demo buffer generation.
//!
//! Used when no input file is given: a buffer with recognizable byte
//! patterns plus a handful of JSON payloads planted at fixed offsets, so
//! both layouts have something interesting to show.

/// JSON payloads planted into the demo buffer.
const SAMPLE_PAYLOADS: [&str; 5] = [
    r#"{"id":1,"name":"Test Object","active":true,"values":[1,2,3]}"#,
    r#"{"id":2,"type":"user","metadata":{"role":"admin","created_at":"2024-03-22"}}"#,
    r#"[1,2,3,{"test":"nested"}]"#,
    r#"{"nested":{"objects":{"are":{"fun":true}}}}"#,
    r#"{"error":null,"result":{"status":"ok","count":42}}"#,
];

/// Byte offsets where the payloads land (when the buffer is big enough).
const PAYLOAD_OFFSETS: [usize; 5] = [600, 1024, 1800, 2500, 3200];

/// Generate a demo buffer of `size` bytes.
///
/// First 256 bytes count 0–255, the next 256 cycle the printable ASCII
/// range, the remainder is deterministic noise; payloads that fit are
/// copied in over the noise.
pub fn generate(size: usize) -> Vec<u8> {
    let mut data: Vec<u8> = (0..size)
        .map(|i| match i {
            0..=255 => i as u8,
            256..=511 => 32 + (i % 95) as u8,
            _ => noise(i),
        })
        .collect();

    for (payload, &offset) in SAMPLE_PAYLOADS.iter().zip(PAYLOAD_OFFSETS.iter()) {
        let bytes = payload.as_bytes();
        if offset + bytes.len() < size {
            data[offset..offset + bytes.len()].copy_from_slice(bytes);
        }
    }

    data
}

/// Deterministic byte noise; a fixed-point hash of the index so repeated
/// runs (and tests) see the same buffer.
fn noise(i: usize) -> u8 {
    let x = (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    ((x >> 32) ^ x) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_size() {
        assert_eq!(generate(0).len(), 0);
        assert_eq!(generate(100).len(), 100);
        assert_eq!(generate(4096).len(), 4096);
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate(4096), generate(4096));
    }

    #[test]
    fn leading_bytes_are_sequential() {
        let data = generate(512);
        assert_eq!(&data[..4], &[0, 1, 2, 3]);
        assert_eq!(data[255], 255);
    }

    #[test]
    fn payloads_are_planted_when_they_fit() {
        let data = generate(4096);
        let first = SAMPLE_PAYLOADS[0].as_bytes();
        assert_eq!(&data[600..600 + first.len()], first);
    }

    #[test]
    fn small_buffer_skips_payloads_that_do_not_fit() {
        // 600 + payload length exceeds 256, so nothing gets planted.
        let data = generate(256);
        assert_eq!(data.len(), 256);
        assert_eq!(data[0], 0);
    }
}
