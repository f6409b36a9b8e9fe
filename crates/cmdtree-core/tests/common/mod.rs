use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use cmdtree_core::{
    CommandNode, CommandRegistry, CommandSender, Invocation, NoopRegistry, Registration,
    RegistryError,
};

/// Sender that records every message it receives
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingSender {
    pub name: String,
    pub permissions: HashSet<String>,
    pub player: bool,
    messages: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingSender {
    pub fn console() -> Self {
        Self {
            name: "CONSOLE".to_string(),
            ..Self::default()
        }
    }

    pub fn player(name: &str) -> Self {
        Self {
            name: name.to_string(),
            player: true,
            ..Self::default()
        }
    }

    pub fn with_permission(mut self, permission: &str) -> Self {
        self.permissions.insert(permission.to_string());
        self
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.messages.lock().unwrap().clear();
    }
}

impl CommandSender for RecordingSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    fn is_player(&self) -> bool {
        self.player
    }

    fn send_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Registry that remembers what it was handed
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingRegistry {
    pub registrations: Mutex<Vec<Registration>>,
    pub refuse: bool,
}

#[allow(dead_code)]
impl RecordingRegistry {
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn count(&self) -> usize {
        self.registrations.lock().unwrap().len()
    }

    pub fn labels(&self) -> Vec<String> {
        self.registrations
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.label().to_string())
            .collect()
    }
}

impl CommandRegistry for RecordingRegistry {
    fn register(&self, registration: Registration) -> Result<(), RegistryError> {
        if self.refuse {
            return Err(RegistryError::Rejected {
                reason: "host is shutting down".to_string(),
            });
        }
        self.registrations.lock().unwrap().push(registration);
        Ok(())
    }
}

/// Handler arguments captured by `recording_leaf`
#[allow(dead_code)]
pub type Calls = Arc<Mutex<Vec<Vec<String>>>>;

/// Subcommand whose handler records the args it saw and returns `result`
#[allow(dead_code)]
pub fn recording_leaf(result: bool) -> (Arc<CommandNode>, Calls) {
    let calls: Calls = Arc::default();
    let seen = calls.clone();
    let node = CommandNode::builder()
        .subcommand()
        .executor_fn(move |inv: &Invocation<'_>| {
            seen.lock()
                .unwrap()
                .push(inv.args.iter().map(|a| a.to_string()).collect());
            result
        })
        .build(&NoopRegistry)
        .unwrap();
    (node, calls)
}

/// Handler that counts its invocations
#[allow(dead_code)]
pub fn counter() -> (Arc<AtomicUsize>, impl Fn(&Invocation<'_>) -> bool + Send + Sync) {
    let count = Arc::new(AtomicUsize::new(0));
    let inner = count.clone();
    (count, move |_: &Invocation<'_>| {
        inner.fetch_add(1, Ordering::SeqCst);
        true
    })
}

/// Dispatch `args` into `node` as if typed under `label`
#[allow(dead_code)]
pub fn run(node: &CommandNode, sender: &dyn CommandSender, label: &str, args: &[&str]) -> bool {
    let identity = cmdtree_core::CommandIdentity::new("test", node.label().unwrap_or(label));
    node.dispatch(&Invocation::new(sender, &identity, label, args))
}
