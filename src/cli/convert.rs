use colored::Colorize;

use crate::currency::{convert_checked, symbol};
use crate::error::Result;

pub fn run(amount: f64, from: &str, to: &str) -> Result<()> {
    let (from, to) = (from.to_uppercase(), to.to_uppercase());
    let result = convert_checked(amount, &from, &to)?;
    let sym = symbol(&to).unwrap_or(&to);
    println!("{} {sym} {result:.2}", "Result:".bold());
    Ok(())
}
