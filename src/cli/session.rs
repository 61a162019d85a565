use std::io::{BufRead, IsTerminal, Write};

use chrono::{Local, NaiveDate};
use colored::Colorize;

use crate::error::{GastosError, Result};
use crate::fmt::created_message;
use crate::layout::Layout;
use crate::ledger::Ledger;
use crate::models::{NewTransaction, Transaction};
use crate::settings::load_settings;
use crate::voice::{parse_command_with, NumberPolicy};

use super::view;

enum Step {
    Reply(String),
    Quiet,
    Quit,
}

/// One session: the ledger being built and how transcripts are read.
pub struct Session {
    pub ledger: Ledger,
    policy: NumberPolicy,
    layout: Layout,
    today: NaiveDate,
}

impl Session {
    pub fn new(ledger: Ledger, policy: NumberPolicy, layout: Layout, today: NaiveDate) -> Self {
        Self {
            ledger,
            policy,
            layout,
            today,
        }
    }

    fn handle(&mut self, line: &str) -> Step {
        let line = line.trim();
        match line {
            "" => return Step::Quiet,
            "salir" | "exit" | "quit" => return Step::Quit,
            "resumen" => return Step::Reply(view::format_ledger(&self.ledger, self.layout)),
            "lista" => return Step::Reply(view::format_register(&self.ledger)),
            _ => {}
        }

        if let Some(rest) = line.strip_prefix("editar ") {
            let rest = rest.trim();
            let (id, description) = rest.split_once(' ').unwrap_or((rest, ""));
            return match self.describe(id, description.trim()) {
                Ok(t) => Step::Reply(format!("Editado #{}: {}", t.id, t.description)),
                Err(e) => Step::Reply(format!("Error: {e}").red().to_string()),
            };
        }

        if let Some(id) = line.strip_prefix("borrar ") {
            return match self.ledger.delete(id.trim()) {
                Ok(t) => Step::Reply(format!("Borrado #{}", t.id)),
                Err(e) => Step::Reply(format!("Error: {e}").red().to_string()),
            };
        }

        match parse_command_with(line, self.policy) {
            Ok(intent) => {
                let txn = self.ledger.add(NewTransaction::from_intent(&intent, self.today));
                Step::Reply(created_message(txn.kind, txn.amount).green().to_string())
            }
            Err(e) => Step::Reply(format!("Error: {e}").red().to_string()),
        }
    }

    /// Set the description of transaction `id`, keeping everything else.
    fn describe(&mut self, id: &str, description: &str) -> Result<&Transaction> {
        let mut new = self
            .ledger
            .get(id)
            .map(NewTransaction::from)
            .ok_or_else(|| GastosError::UnknownTransaction(id.to_string()))?;
        new.description = description.to_string();
        self.ledger.edit(id, new)
    }

    /// Process every line of `input`, writing one reply per command.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W, prompt: bool) -> Result<()> {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        for line in input.lines() {
            match self.handle(&line?) {
                Step::Quit => break,
                Step::Quiet => {}
                Step::Reply(msg) => writeln!(out, "{msg}")?,
            }
            if prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
        }
        Ok(())
    }
}

pub fn run(empty: bool, compose: bool) -> Result<()> {
    let settings = load_settings();
    let ledger = super::starting_ledger(&settings, empty);
    let policy = super::effective_policy(&settings, compose);
    let today = Local::now().date_naive();

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("Di \"ingreso\" o \"gasto\" y el monto, p. ej. \"gasto cincuenta\". \"salir\" para terminar.");
        println!("Otros comandos: resumen, lista, editar <id> <descripción>, borrar <id>.");
    }

    let mut session = Session::new(ledger, policy, Layout::for_terminal(), today);
    let mut stdout = std::io::stdout();
    session.run(stdin.lock(), &mut stdout, interactive)?;
    log::info!(
        "session for {} ended with {} transactions",
        session.ledger.user_id(),
        session.ledger.len()
    );
    Ok(())
}
