use crate::error::Result;
use crate::layout::Layout;
use crate::settings::load_settings;

use super::view;

pub fn run(width: Option<u32>) -> Result<()> {
    let settings = load_settings();
    let ledger = super::starting_ledger(&settings, false);
    let layout = width.map(Layout::for_width).unwrap_or_else(Layout::for_terminal);
    log::debug!("rendering {layout:?} view");
    println!("{}", view::format_ledger(&ledger, layout));
    Ok(())
}

pub fn list() -> Result<()> {
    let settings = load_settings();
    let ledger = super::starting_ledger(&settings, false);
    println!("{}", view::format_register(&ledger));
    Ok(())
}
