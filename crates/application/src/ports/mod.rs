pub mod resolver;

pub use resolver::{ResolveError, Resolver};
