pub mod add;
pub mod config;
pub mod parse;
pub mod session;
pub mod summary;
pub mod view;

use clap::{Parser, Subcommand};

use crate::ledger::Ledger;
use crate::settings::Settings;
use crate::voice::NumberPolicy;

/// `--compose` on the command line wins over the configured policy.
pub(crate) fn effective_policy(settings: &Settings, compose: bool) -> NumberPolicy {
    if compose {
        NumberPolicy::Compose
    } else {
        settings.number_policy
    }
}

/// Starting ledger for a run: the sample transactions unless disabled.
pub(crate) fn starting_ledger(settings: &Settings, empty: bool) -> Ledger {
    if empty || !settings.seed_demo {
        Ledger::new(&settings.user_id)
    } else {
        Ledger::with_demo_data(&settings.user_id)
    }
}

#[derive(Parser)]
#[command(name = "gastos", about = "Registra ingresos y gastos con comandos de voz en español.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analiza una transcripción, p. ej. `gastos parse gasto cincuenta euros`.
    Parse {
        /// Palabras de la transcripción (se unen con espacios)
        #[arg(required = true, num_args = 1..)]
        transcript: Vec<String>,
        /// Suma las palabras numéricas en lugar de concatenar sus dígitos
        #[arg(long)]
        compose: bool,
        /// Muestra el comando reconocido como JSON
        #[arg(long)]
        json: bool,
    },
    /// Lee transcripciones de stdin, una por línea, en un libro en memoria.
    Session {
        /// Empieza sin las transacciones de ejemplo
        #[arg(long)]
        empty: bool,
        /// Suma las palabras numéricas en lugar de concatenar sus dígitos
        #[arg(long)]
        compose: bool,
    },
    /// Muestra el resumen financiero del libro de ejemplo.
    Summary {
        /// Ancho de la vista en píxeles (por defecto: ancho del terminal)
        #[arg(long)]
        width: Option<u32>,
    },
    /// Lista el libro de ejemplo, lo más reciente primero.
    List,
    /// Añade una transacción a mano y muestra el registro resultante.
    Add {
        /// Tipo: ingreso o gasto (también income/expense)
        #[arg(long = "type")]
        kind: String,
        /// Monto; el signo lo decide el tipo
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        /// Descripción libre
        #[arg(long, default_value = "")]
        description: String,
        /// Fecha: AAAA-MM-DD (por defecto: hoy)
        #[arg(long)]
        date: Option<String>,
    },
    /// Muestra o cambia los ajustes.
    Config {
        /// Política numérica: literal o compose
        #[arg(long)]
        policy: Option<String>,
        /// Id de usuario asignado a las transacciones nuevas
        #[arg(long = "user-id")]
        user_id: Option<String>,
        /// Si cada ejecución empieza con las transacciones de ejemplo
        #[arg(long)]
        demo: Option<bool>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_flag_overrides_settings() {
        let settings = Settings::default();
        assert_eq!(effective_policy(&settings, false), NumberPolicy::Literal);
        assert_eq!(effective_policy(&settings, true), NumberPolicy::Compose);
    }

    #[test]
    fn test_starting_ledger() {
        let mut settings = Settings::default();
        assert_eq!(starting_ledger(&settings, false).len(), 3);
        assert!(starting_ledger(&settings, true).is_empty());
        settings.seed_demo = false;
        assert!(starting_ledger(&settings, false).is_empty());
    }

    #[test]
    fn test_cli_parses_transcript_words() {
        let cli = Cli::try_parse_from(["gastos", "parse", "gasto", "cincuenta", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Parse { transcript, json, compose }) => {
                assert_eq!(transcript, vec!["gasto", "cincuenta"]);
                assert!(json);
                assert!(!compose);
            }
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn test_add_accepts_negative_amount() {
        let cli = Cli::try_parse_from(["gastos", "add", "--type", "expense", "--amount", "-5"]).unwrap();
        match cli.command {
            Some(Commands::Add { kind, amount, .. }) => {
                assert_eq!(kind, "expense");
                assert_eq!(amount, -5.0);
            }
            _ => panic!("expected add command"),
        }
    }
}
