//! Test helpers shared by the router and integration tests.
//!
//! [`RecordingRegistry`] stands in for a host shell: every tab it hands out
//! appends its `(tab, path)` loads to one log shared by the whole registry, so
//! tests can assert on the global order of loads across tabs.
//!
//! [`capture_logs`] records the tracing output of a closure as plain text.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use tracing::Level;

use crate::registry::{Tab, TabRegistry};

type LoadLog = Rc<RefCell<Vec<(String, String)>>>;

pub struct RecordingTab {
    name: String,
    log: LoadLog,
}

impl Tab for RecordingTab {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&mut self, path: &str) {
        self.log.borrow_mut().push((self.name.clone(), path.to_string()));
    }
}

pub struct RecordingRegistry {
    tabs: Vec<RecordingTab>,
    log: LoadLog,
    lookups: Vec<String>,
}

impl RecordingRegistry {
    pub fn with_tabs<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let log: LoadLog = Rc::new(RefCell::new(Vec::new()));
        let tabs = names
            .into_iter()
            .map(|name| RecordingTab {
                name: name.into(),
                log: Rc::clone(&log),
            })
            .collect();
        Self {
            tabs,
            log,
            lookups: Vec::new(),
        }
    }

    /// Every load issued so far, in order
    pub fn calls(&self) -> Vec<(String, String)> {
        self.log.borrow().clone()
    }

    /// Every tab name looked up so far, in order
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.clone()
    }

    pub fn clear(&mut self) {
        self.log.borrow_mut().clear();
        self.lookups.clear();
    }
}

impl TabRegistry for RecordingRegistry {
    fn tab_by_name(&mut self, name: &str) -> Option<&mut dyn Tab> {
        self.lookups.push(name.to_string());
        self.tabs
            .iter_mut()
            .find(|t| t.name == name)
            .map(|t| t as &mut dyn Tab)
    }
}

/// Build an expected load log from string pairs
pub fn load_calls(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(tab, path)| (tab.to_string(), path.to_string()))
        .collect()
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return its result and log output
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let output = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (result, output)
}
