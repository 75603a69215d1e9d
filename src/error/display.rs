use std::fmt::{self, Write};

use super::{read, Base, Cause, Node, SError};

/// The errors currently being rendered along one path of a cause chain.
///
/// Carried down the render call stack so a cause that is already being
/// rendered further up is skipped instead of recursed into.
pub(crate) struct RenderGuard {
    active: Vec<*const Node>,
}

impl RenderGuard {
    pub(crate) fn new(root: &SError) -> Self {
        let mut active = Vec::with_capacity(8);
        active.push(root.node());
        Self { active }
    }

    pub(crate) fn contains(&self, err: &SError) -> bool {
        let node = err.node();
        self.active.iter().rev().any(|active| *active == node)
    }

    pub(crate) fn push(&mut self, err: &SError) {
        self.active.push(err.node());
    }

    fn pop(&mut self) {
        let _ = self.active.pop();
    }
}

impl SError {
    /// Writes the message, attributes and, guarded, the cause.
    fn render(&self, w: &mut dyn Write, guard: &mut RenderGuard) -> fmt::Result {
        self.render_head(w)?;
        let cause = match self.current_cause() {
            Some(Cause::Structured(cause)) => {
                if guard.contains(cause) {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        error = %self.message(),
                        cause = %cause.message(),
                        "skipped rendering of cyclic cause"
                    );
                    return Ok(());
                }
                let mut rendered = String::new();
                guard.push(cause);
                let result = cause.render(&mut rendered, guard);
                guard.pop();
                result?;
                rendered
            }
            Some(Cause::Foreign(cause)) => cause.to_string(),
            None => return Ok(()),
        };
        if cause.is_empty() {
            Ok(())
        } else {
            w.write_str("; ")?;
            w.write_str(&cause)
        }
    }

    fn render_head(&self, w: &mut dyn Write) -> fmt::Result {
        match &self.0.base {
            Some(Base::Message(message)) => w.write_str(message)?,
            Some(Base::Foreign(err)) => write!(w, "{}", err)?,
            None => {}
        }
        for pair in read(&self.0.args).chunks_exact(2) {
            write!(w, " [{}={}]", pair[0].plain(), pair[1])?;
        }
        Ok(())
    }
}

/// Renders `message [key=value]...; <cause>`.
///
/// A cause already being rendered further up the chain contributes nothing.
impl fmt::Display for SError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut guard = RenderGuard::new(self);
        self.render(f, &mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    #[test]
    fn test_guard() {
        let a = SError::new("a");
        let b = SError::new("b");
        let mut guard = RenderGuard::new(&a);
        assert!(guard.contains(&a));
        assert!(guard.contains(&a.clone()));
        assert!(!guard.contains(&b));
        guard.push(&b);
        assert!(guard.contains(&b));
        guard.pop();
        assert!(!guard.contains(&b));
    }

    #[test]
    fn test_render_head() {
        let mut out = String::new();
        let err = SError::new("m").args(args!["a", 1, "s", "x"]);
        err.render_head(&mut out).unwrap();
        assert_eq!(out, "m [a=1] [s='x']");
    }

    #[test]
    fn test_render_nil() {
        assert_eq!(SError::nil().to_string(), "");
        assert_eq!(SError::wrap(SError::nil(), "outer").to_string(), "outer");
    }

    #[test]
    fn test_render_self_cycle() {
        let err = SError::new("loop").args(args!["n", 1]);
        let err = err.clone().err(err);
        assert_eq!(err.to_string(), "loop [n=1]");
    }

    #[test]
    fn test_render_two_cycle() {
        let a = SError::new("a");
        let b = SError::wrap(a.clone(), "b");
        let a = a.err(b.clone());
        assert_eq!(a.to_string(), "a; b");
        assert_eq!(b.to_string(), "b; a");
    }
}
