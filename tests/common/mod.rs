//! Shared utilities for integration tests.

use std::io::Write;
use std::sync::{Arc, Mutex};

use front_controller::config::DispatchConfig;
use front_controller::controllers::registry_key;
use front_controller::dispatch::{Dispatcher, Handler, HandlerRegistry, InvocationError};
use front_controller::routing::{RouteEntry, RouteTable};

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub handler: String,
    pub action: String,
    pub args: Vec<String>,
}

/// Everything the recording handlers saw.
#[derive(Debug, Default)]
pub struct Journal {
    pub instances: Mutex<usize>,
    pub calls: Mutex<Vec<Call>>,
}

impl Journal {
    pub fn instances(&self) -> usize {
        *self.instances.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

/// Accepts every action except `actionMissing`, recording each call.
pub struct Recorder {
    name: &'static str,
    journal: Arc<Journal>,
}

impl Handler for Recorder {
    fn invoke(&mut self, action: &str, args: &[String], out: &mut dyn Write) -> Result<(), InvocationError> {
        if action == "actionMissing" {
            return Err(InvocationError::UnknownAction(action.to_string()));
        }
        self.journal.calls.lock().unwrap().push(Call {
            handler: self.name.to_string(),
            action: action.to_string(),
            args: args.to_vec(),
        });
        write!(out, "{}.{}({})", self.name, action, args.join(","))?;
        Ok(())
    }
}

/// Dispatcher whose registry holds a recorder for each of `segments`
/// (`"user"` registers `UserController`).
#[allow(dead_code)]
pub fn recording_dispatcher(routes: &[(&str, &str)], segments: &[&'static str]) -> (Dispatcher, Arc<Journal>) {
    let conventions = DispatchConfig::default();
    let journal = Arc::new(Journal::default());
    let mut registry = HandlerRegistry::new();

    for segment in segments {
        let journal = journal.clone();
        let name = *segment;
        registry.register(registry_key(name, &conventions), move || {
            *journal.instances.lock().unwrap() += 1;
            Recorder {
                name,
                journal: journal.clone(),
            }
        });
    }

    let table = RouteTable::from_entries(routes.iter().map(|(p, t)| RouteEntry::new(*p, *t)));
    let dispatcher = Dispatcher::new(Arc::new(table), Arc::new(registry), conventions);
    (dispatcher, journal)
}
