use anyhow::Result;
use pix_qr_gen::helper;
use pix_qr_gen::payload::{OUTPUT_PATH, PIX_PAYLOAD};
use std::path::Path;

fn main() -> Result<()> {
    println!("=== GERADOR DE QR CODE PIX ===\n");
    println!("Payload: {}", PIX_PAYLOAD);
    println!("Tamanho: {} caracteres\n", PIX_PAYLOAD.len());

    let qr = helper::encode(PIX_PAYLOAD)?;

    helper::qr_to_image_and_save(&qr, Path::new(OUTPUT_PATH))?;
    println!("✓ QR Code gerado com sucesso!");
    println!("✓ Arquivo salvo em: {}\n", OUTPUT_PATH);

    println!("QR Code (ASCII):");
    helper::print_qr(&qr);

    println!("=== CÓDIGO COPIA E COLA ===");
    println!("{}", PIX_PAYLOAD);
    println!("\n=== INSTRUÇÕES ===");
    println!("1. Abra o arquivo qrcode_pix_test.png para ver o QR Code");
    println!("2. Escaneie com um app de banco para testar");
    println!("3. Ou copie o código acima e cole no app (Pix Copia e Cola)");

    Ok(())
}
