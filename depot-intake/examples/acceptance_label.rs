//! Acceptance desk walkthrough
//!
//! Generates an acceptance code, renders its QR label to a PNG next to the
//! working directory, and (on Windows, when a payload and printer are given)
//! sends a raw payload to the spooler:
//!
//! Run: cargo run --example acceptance_label [label.prn "Printer Name"]

use depot_intake::{AcceptanceCodeGenerator, qr};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let code = AcceptanceCodeGenerator::generate();
    let payload = qr::payload_now(qr::ACCEPTANCE_TAG, &code);
    println!("Acceptance code: {code}");
    println!("QR payload:      {payload}");

    let png_path = format!("QR_{code}.png");
    qr::save_png(&payload, &png_path)?;
    println!("Label image:     {png_path}");

    #[cfg(windows)]
    {
        use depot_intake::PrintOrchestrator;
        use depot_printer::WinSpooler;

        let mut args = std::env::args().skip(1);
        if let (Some(prn), Some(printer)) = (args.next(), args.next()) {
            let mut orchestrator = PrintOrchestrator::new(WinSpooler::new());
            println!("Installed printers: {:?}", orchestrator.installed_printers()?);

            orchestrator.load_payload(&prn)?;
            let printed = orchestrator.submit(&printer)?;
            println!(
                "Printed {} bytes on {}",
                printed.bytes_sent, printed.printer
            );
        } else {
            println!("No payload/printer arguments; skipping print step.");
        }
    }

    Ok(())
}
