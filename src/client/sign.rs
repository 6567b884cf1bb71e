//! HMAC-SHA256 request signing.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Sign a query-string payload with the API secret, returning the
/// hex-encoded signature the exchange expects in the `signature` parameter.
pub(crate) fn signature(secret: &[u8], payload: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_is_deterministic_hex() {
        let sig = signature(b"secret", "symbol=BTCUSDT&timestamp=1");
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(sig, signature(b"secret", "symbol=BTCUSDT&timestamp=1"));
        assert_ne!(sig, signature(b"other", "symbol=BTCUSDT&timestamp=1"));
    }
}
