//! # pix-qr-gen
//!
//! Generates the PIX "Copia e Cola" test QR code for the AGC parking system.
//!
//! The binary prints the payload and its character count, writes the QR code
//! as a PNG image, and renders the same code as ASCII art on the console.
//! Encoding is delegated to the [`qrcode`] crate; pixels go through the
//! [`image`] crate.
//!
//! ## Modules
//!
//! - [`payload`]: the hardcoded PIX payload and output path.
//! - [`helper`]: encoding and rendering utilities.

pub mod payload;
pub mod helper;
