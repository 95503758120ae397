//! User lookups backed by a shared [`UserDirectory`].

use std::collections::BTreeMap;
use std::io::Write;
use std::sync::Arc;

use crate::dispatch::{expect_arity, Handler, InvocationError};
use crate::resource::Resource;

#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: BTreeMap<u64, String>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, id: u64, name: impl Into<String>) -> Self {
        self.users.insert(id, name.into());
        self
    }

    pub fn get(&self, id: u64) -> Option<&str> {
        self.users.get(&id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> {
        self.users.iter().map(|(id, name)| (*id, name.as_str()))
    }
}

#[derive(Debug)]
pub struct UserController {
    users: Arc<Resource<UserDirectory>>,
}

impl UserController {
    pub fn new(users: Arc<Resource<UserDirectory>>) -> Self {
        Self { users }
    }

    fn directory(&self) -> Result<&UserDirectory, InvocationError> {
        self.users.get().map_err(|e| InvocationError::Failed(e.to_string()))
    }
}

impl Handler for UserController {
    fn invoke(&mut self, action: &str, args: &[String], out: &mut dyn Write) -> Result<(), InvocationError> {
        match action {
            "actionShow" => {
                expect_arity(action, args, 1)?;
                let id: u64 = args[0]
                    .parse()
                    .map_err(|_| InvocationError::Failed(format!("'{}' is not a user id", args[0])))?;
                match self.directory()?.get(id) {
                    Some(name) => writeln!(out, "User #{id}: {name}")?,
                    None => writeln!(out, "User #{id} not found")?,
                }
            }
            "actionList" => {
                expect_arity(action, args, 0)?;
                for (id, name) in self.directory()?.iter() {
                    writeln!(out, "{id}\t{name}")?;
                }
            }
            _ => return Err(InvocationError::UnknownAction(action.to_string())),
        }
        Ok(())
    }
}
