//! Example command tree demo
//!
//! Builds the `example` command (aliases `ex`, `e`) with one `subcommand`
//! child, registers it in an in-memory host table and runs a few
//! invocations from senders with different permissions.
//!
//! Run with `cargo run --example example_command_demo`.

use std::collections::HashSet;

use cmdtree_core::logging_facility::{init, Profile};
use cmdtree_core::{CommandNode, CommandSender, ConfigError, InMemoryRegistry, Invocation};

struct ConsoleSender {
    name: &'static str,
    permissions: HashSet<&'static str>,
    player: bool,
}

impl CommandSender for ConsoleSender {
    fn name(&self) -> &str {
        self.name
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    fn is_player(&self) -> bool {
        self.player
    }

    fn send_message(&self, message: &str) {
        println!("  [{}] {}", self.name, message);
    }
}

fn main() -> Result<(), ConfigError> {
    init(Profile::Development);

    let registry = InMemoryRegistry::new();

    let subcommand = CommandNode::builder()
        .subcommand()
        .usage("/ex subcommand")
        .permission("plugin.command.example.subcommand")
        .executor_fn(|inv: &Invocation<'_>| {
            inv.sender
                .send_message(&format!("this is a sub command executor {:?}", inv.args));
            true
        })
        .build(&registry)?;

    CommandNode::builder()
        .name("example")
        .aliases(["ex", "e"])
        .namespace("plugin")
        .usage("/<command>")
        .permission("plugin.command.example")
        .description("example command")
        .executor_fn(|inv: &Invocation<'_>| {
            inv.sender.send_message("this is a command executor");
            true
        })
        .child(subcommand, ["subcommand", "sc"])?
        .build(&registry)?;

    let admin = ConsoleSender {
        name: "admin",
        permissions: HashSet::from([
            "plugin.command.example",
            "plugin.command.example.subcommand",
        ]),
        player: true,
    };
    let guest = ConsoleSender {
        name: "guest",
        permissions: HashSet::from(["plugin.command.example"]),
        player: true,
    };

    let runs: [(&ConsoleSender, &str, &[&str]); 4] = [
        (&admin, "example", &[]),
        (&admin, "ex", &["sc", "x", "y"]),
        (&guest, "e", &["SC", "x"]),
        (&guest, "plugin:example", &["other"]),
    ];

    for (sender, label, args) in runs {
        println!("{} > /{} {}", sender.name, label, args.join(" "));
        match registry.execute(sender, label, args) {
            Some(handled) => println!("  handled: {handled}"),
            None => println!("  unknown command"),
        }
    }

    println!("\nHelp:");
    if let Some(registration) = registry.get("example") {
        for line in registration.node().describe().usage_lines("example") {
            println!("  {line}");
        }
    }

    Ok(())
}
