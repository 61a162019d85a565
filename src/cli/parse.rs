use crate::error::{GastosError, Result};
use crate::fmt::money;
use crate::settings::load_settings;
use crate::voice::parse_command_with;

pub fn run(transcript: &[String], compose: bool, json: bool) -> Result<()> {
    let settings = load_settings();
    let policy = super::effective_policy(&settings, compose);
    let text = transcript.join(" ");

    let intent = parse_command_with(&text, policy)?;

    if json {
        let out = serde_json::to_string(&intent).map_err(|e| GastosError::Other(e.to_string()))?;
        println!("{out}");
    } else {
        println!("Tipo:   {}", intent.kind().label());
        println!("Monto:  {}", money(intent.amount()));
    }
    Ok(())
}
