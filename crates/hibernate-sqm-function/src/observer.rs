//! Contribution logging hooks

use parking_lot::Mutex;
use std::fmt;

/// Receives notifications while contributors run
pub trait ContributionObserver: fmt::Debug + Send + Sync {
    /// A contributor is about to register type handlers
    fn type_contributions(&self, contributor: &str);

    /// A contributor is about to register functions
    fn function_contributions(&self, contributor: &str);

    fn function_registered(&self, _name: &str, _alt_name: Option<&str>) {}
}

/// Observer that forwards to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ContributionObserver for LogObserver {
    fn type_contributions(&self, contributor: &str) {
        log::info!("Registering type contributions from {}", contributor);
    }

    fn function_contributions(&self, contributor: &str) {
        log::info!("Registering function contributions from {}", contributor);
    }

    fn function_registered(&self, name: &str, alt_name: Option<&str>) {
        match alt_name {
            Some(alt) => log::debug!("registered function {} (alternate key {})", name, alt),
            None => log::debug!("registered function {}", name),
        }
    }
}

/// One observed notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContributionEvent {
    TypeContributions(String),
    FunctionContributions(String),
    FunctionRegistered { name: String, alt_name: Option<String> },
}

/// Observer that keeps every notification, for inspection after bootstrap
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ContributionEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ContributionEvent> {
        self.events.lock().clone()
    }

    /// Names passed to `function_registered`, in order
    pub fn registered_functions(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                ContributionEvent::FunctionRegistered { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}

impl ContributionObserver for RecordingObserver {
    fn type_contributions(&self, contributor: &str) {
        self.events
            .lock()
            .push(ContributionEvent::TypeContributions(contributor.to_string()));
    }

    fn function_contributions(&self, contributor: &str) {
        self.events
            .lock()
            .push(ContributionEvent::FunctionContributions(contributor.to_string()));
    }

    fn function_registered(&self, name: &str, alt_name: Option<&str>) {
        self.events.lock().push(ContributionEvent::FunctionRegistered {
            name: name.to_string(),
            alt_name: alt_name.map(str::to_string),
        });
    }
}
