// src/confirm.rs
/// Yes/no gate asked before anything is overwritten or deleted.
/// Frontends (GUI/CLI) implement this to put the question in front of the user.
pub trait Confirm {
    /// Return `true` to go ahead.
    fn confirm(&mut self, title: &str, question: &str) -> bool;
}

/// Fixed answer, for tests and `--yes`.
#[derive(Clone, Copy, Debug)]
pub struct Always(pub bool);

impl Confirm for Always {
    fn confirm(&mut self, _title: &str, _question: &str) -> bool { self.0 }
}

/// Any `FnMut(title, question) -> bool` works as a gate.
impl<F> Confirm for F
where
    F: FnMut(&str, &str) -> bool,
{
    fn confirm(&mut self, title: &str, question: &str) -> bool {
        self(title, question)
    }
}

/// Result of a gated action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Done(T),
    Declined,
}

impl<T> Outcome<T> {
    pub fn is_done(&self) -> bool { matches!(self, Outcome::Done(_)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_see_the_question() {
        let mut seen = Vec::new();
        let mut gate = |title: &str, q: &str| {
            seen.push(format!("{title}: {q}"));
            false
        };
        assert!(!gate.confirm("Confirm", "Delete?"));
        assert_eq!(seen, vec!["Confirm: Delete?"]);
        assert!(Always(true).confirm("x", "y"));
    }
}
