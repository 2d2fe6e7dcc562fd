//! Scoped diagnostic tracing
//!
//! A [`Tracer`] turns begin/state/end events into rows of a
//! [`TraceSink`](david_domain::ports::TraceSink). Operations open a
//! [`TraceScope`] on entry; the scope writes its End row exactly once when it
//! is closed or dropped, whichever way the operation exits.
//!
//! ```text
//! begin_scope()  ──►  B row
//!     │ add_end_info(..)
//!     ▼
//! drop / close() ──►  E row (end info in the order added)
//! ```

mod scope;
mod tracer;

pub use scope::TraceScope;
pub use tracer::Tracer;
