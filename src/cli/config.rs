use crate::error::{GastosError, Result};
use crate::settings::{load_settings, save_settings, settings_path};
use crate::voice::NumberPolicy;

fn parse_policy(policy: &str) -> Result<NumberPolicy> {
    match policy {
        "literal" => Ok(NumberPolicy::Literal),
        "compose" => Ok(NumberPolicy::Compose),
        other => Err(GastosError::Settings(format!(
            "Política numérica desconocida: {other} (usa literal o compose)"
        ))),
    }
}

pub fn run(policy: Option<&str>, user_id: Option<&str>, demo: Option<bool>) -> Result<()> {
    let mut settings = load_settings();
    let changed = policy.is_some() || user_id.is_some() || demo.is_some();

    if let Some(p) = policy {
        settings.number_policy = parse_policy(p)?;
    }
    if let Some(u) = user_id {
        if u.trim().is_empty() {
            return Err(GastosError::Settings("el id de usuario no puede estar vacío".to_string()));
        }
        settings.user_id = u.trim().to_string();
    }
    if let Some(d) = demo {
        settings.seed_demo = d;
    }

    if changed {
        let path = save_settings(&settings)?;
        println!("Guardado en {}", path.display());
    } else {
        println!("Ajustes:     {}", settings_path().display());
    }
    println!("Usuario:     {}", settings.user_id);
    println!("Números:     {}", settings.number_policy);
    println!("Datos demo:  {}", if settings.seed_demo { "sí" } else { "no" });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy() {
        assert_eq!(parse_policy("compose").unwrap(), NumberPolicy::Compose);
        assert_eq!(parse_policy("literal").unwrap(), NumberPolicy::Literal);
        assert!(parse_policy("sum").is_err());
    }
}
