//! Landing pages.

use std::io::Write;

use crate::dispatch::{expect_arity, Handler, InvocationError};

#[derive(Debug, Default)]
pub struct SiteController;

impl Handler for SiteController {
    fn invoke(&mut self, action: &str, args: &[String], out: &mut dyn Write) -> Result<(), InvocationError> {
        match action {
            "actionIndex" => {
                expect_arity(action, args, 0)?;
                writeln!(out, "Welcome")?;
            }
            "actionEcho" => {
                writeln!(out, "{}", args.join(" "))?;
            }
            _ => return Err(InvocationError::UnknownAction(action.to_string())),
        }
        Ok(())
    }
}
