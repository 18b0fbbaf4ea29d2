//! QR codes for quick entry: print them and stick them on the physical
//! achievement box.

use colored::Colorize;
use qrcode::QrCode;
use qrcode::render::unicode;

pub fn run(base_url: &str) -> Result<(), String> {
    let base = base_url.trim_end_matches('/');
    print_code("New Quest", &format!("{base}/quests/new"))?;
    println!();
    print_code("New Achievement", &format!("{base}/achievements/new"))?;
    Ok(())
}

fn print_code(label: &str, url: &str) -> Result<(), String> {
    let code = QrCode::new(url.as_bytes()).map_err(|e| format!("qr encoding failed: {e}"))?;
    let image = code.render::<unicode::Dense1x2>().build();

    println!("{}", label.bold());
    println!("{image}");
    println!("{}", url.dimmed());
    Ok(())
}
