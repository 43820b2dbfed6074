use gauthenticator::config::{DEFAULT_DISCREPANCY, DEFAULT_SECRET_LENGTH};
use gauthenticator::{qr, Authenticator, Result};
use std::process;

const LABEL: &str = "MyAppName";

fn run() -> Result<()> {
    let authenticator = Authenticator::default();

    let secret = authenticator.create_secret(DEFAULT_SECRET_LENGTH)?;
    println!("Generated Secret: {}", secret);

    let code = authenticator.get_code(&secret, 0)?;
    println!("Generated Code: {}", code);

    let is_valid = authenticator.verify_code(&secret, &code, DEFAULT_DISCREPANCY, 0);
    println!("Is the code valid? {}", is_valid);

    let uri = authenticator.provisioning_uri(LABEL, &secret);
    println!("Provisioning URI: {}", uri);
    println!("{}", qr::render_terminal(&uri)?);

    let base64_qr_code = authenticator.generate_qr_code(LABEL, &secret)?;
    println!("Base64 QR Code: {}", base64_qr_code);

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
