use std::path::PathBuf;

use anyhow::Context;
use cs_core::CrackRequest;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // CLI argument: crack request file
    let request_path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("Usage: cs-app <request.json>"))?;

    let request = CrackRequest::load(&request_path)
        .with_context(|| format!("failed to load request {}", request_path.display()))?;
    log::info!(
        "Loaded request: {} / {} from {}",
        request.scheme,
        request.language.label(),
        request.input.display()
    );

    let ciphertext = request.read_input()?;
    log::info!("Read {} characters of ciphertext", ciphertext.chars().count());

    let outcome = match request.execute(&ciphertext) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("Cracking failed: {}", e);
            return Err(e.into());
        }
    };

    if let Some(ranking) = &outcome.key_length_ranking {
        println!("Top {} candidates for key length:", ranking.len());
        for (length, votes) in ranking {
            println!("{:>4}: {}", length, votes);
        }
        println!();
    }

    println!("Encryption key: {}", outcome.key);

    if let Some(plaintext) = &outcome.plaintext {
        println!("\nDecrypted message:");
        println!("{}", plaintext);
    }

    Ok(())
}
