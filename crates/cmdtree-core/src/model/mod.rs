pub mod alias;
pub mod descriptor;
pub mod node;

pub use alias::AliasSet;
pub use descriptor::{ChildDescriptor, CommandDescriptor};
pub use node::{ChildEntry, CommandNode};
