use anyhow::{Context, Result};
use image::{ImageBuffer, Luma};
use qrcode::{Color, EcLevel, QrCode};
use std::fs;
use std::path::Path;

/*---- Rendering parameters ----*/

/// Quiet zone around the symbol, in modules.
pub const BORDER: i32 = 4;

/// Edge length of one module in the rendered image, in pixels.
pub const MODULE_SCALE: u32 = 10;

/*---- Encoding ----*/

/// Encodes text into a QR code at error correction level Low.
///
/// The smallest version that fits the data is selected automatically.
///
/// # Example
///
/// ```rust
/// use pix_qr_gen::helper::encode;
///
/// let qr = encode("Hello, World!").unwrap();
/// assert!(qr.width() >= 21);
/// ```
pub fn encode(content: &str) -> Result<QrCode> {
    QrCode::with_error_correction_level(content, EcLevel::L)
        .with_context(|| format!("failed to encode {} bytes as a QR code", content.len()))
}

/*---- Rendering ----*/

// Renders the QR code as console text. Each module becomes two block
// characters so the symbol stays roughly square in a terminal font.
pub fn qr_to_string(qr: &QrCode) -> String {
    let size = qr.width() as i32;
    let modules = qr.to_colors();
    let mut result = String::new();
    for y in -BORDER..size + BORDER {
        for x in -BORDER..size + BORDER {
            let dark = x >= 0
                && y >= 0
                && x < size
                && y < size
                && modules[(y * size + x) as usize] == Color::Dark;
            let c: char = if dark { '█' } else { ' ' };
            result.push(c);
            result.push(c);
        }
        result.push('\n');
    }
    result
}

/// Prints the given QrCode object to the console.
pub fn print_qr(qr: &QrCode) {
    print!("{}", qr_to_string(qr));
    println!();
}

/// Renders the QR code into a grayscale image buffer.
///
/// Each module covers [`MODULE_SCALE`] pixels per side and the symbol is
/// surrounded by a [`BORDER`]-module quiet zone, black on white.
pub fn qr_to_image_buffer(qr: &QrCode) -> ImageBuffer<Luma<u8>, Vec<u8>> {
    let size = qr.width() as i32;
    let modules = qr.to_colors();
    let side = (size + 2 * BORDER) as u32 * MODULE_SCALE;
    let mut img = ImageBuffer::new(side, side);

    for (px, py, pixel) in img.enumerate_pixels_mut() {
        let x = (px / MODULE_SCALE) as i32 - BORDER;
        let y = (py / MODULE_SCALE) as i32 - BORDER;
        let dark = x >= 0
            && y >= 0
            && x < size
            && y < size
            && modules[(y * size + x) as usize] == Color::Dark;
        *pixel = if dark {
            Luma([0u8]) // Black
        } else {
            Luma([255u8]) // White
        };
    }

    img
}

/// Converts a QR Code object to an image and saves it to a file.
///
/// The parent directory is created when it does not exist yet.
///
/// # Errors
///
/// Fails when the directory cannot be created or the image cannot be
/// written.
///
/// # Example
///
/// ```no_run
/// use pix_qr_gen::helper::{encode, qr_to_image_and_save};
/// use std::path::Path;
///
/// let qr = encode("Hello, World!").unwrap();
/// qr_to_image_and_save(&qr, Path::new("generated/qr_code.png")).unwrap();
/// ```
pub fn qr_to_image_and_save(qr: &QrCode, path: &Path) -> Result<()> {
    let img = qr_to_image_buffer(qr);

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create directory {}", dir.display()))?;
        }
    }

    img.save(path)
        .with_context(|| format!("failed to save QR image to {}", path.display()))
}
