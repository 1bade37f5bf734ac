//! Output sink for user-facing lines.
//!
//! Observers, decorators and the scenario runner never call `println!` directly.
//! They write through a shared [`Console`] so the transcript can be captured and
//! asserted on in tests. Diagnostic logging goes through the `log` facade instead.

#[cfg(test)]
use mockall::automock;

/// Destination of user-facing output lines.
#[cfg_attr(test, automock)]
pub trait Console {
    /// Writes a single line of output.
    fn emit(&self, line: &str);
}

/// Console that prints every line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::Console;

    /// Console keeping every emitted line in memory.
    #[derive(Default)]
    pub struct Transcript {
        lines: RefCell<Vec<String>>,
    }

    impl Transcript {
        pub fn lines(&self) -> Vec<String> {
            self.lines.borrow().clone()
        }
    }

    impl Console for Transcript {
        fn emit(&self, line: &str) {
            self.lines.borrow_mut().push(line.to_owned());
        }
    }
}
