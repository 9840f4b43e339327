//! Hardcoded inputs of the generator.
//!
//! The payload is a PIX "Copia e Cola" test string (CPF key). It is an
//! EMV-QR tag-length-value text carrying merchant account info, currency,
//! amount, country, merchant name and city, and a CRC16 suffix, but it is
//! held here as an opaque constant and never parsed or rebuilt.

/// PIX test payload, scannable as-is by a banking app.
pub const PIX_PAYLOAD: &str = "00020126330014BR.GOV.BCB.PIX011112345678900520400005303986540525.505802BR5911AGC PARKING6009SAO PAULO62150511AGC1234567863045C43";

/// Where the rendered PNG is written.
pub const OUTPUT_PATH: &str = "/home/ubuntu/Parking-System-AGC-24h/qrcode_pix_test.png";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_length_matches_reported_size() {
        assert_eq!(PIX_PAYLOAD.len(), 128);
        // ASCII only, so byte length and character count agree
        assert_eq!(PIX_PAYLOAD.chars().count(), 128);
    }

    #[test]
    fn output_path_is_an_absolute_png() {
        assert!(std::path::Path::new(OUTPUT_PATH).is_absolute());
        assert!(OUTPUT_PATH.ends_with(".png"));
    }
}
