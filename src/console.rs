//! Line-oriented console output shared by the demonstrations.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Clone)]
enum Target {
    Stdout,
    Capture(Rc<RefCell<Vec<String>>>),
}

/// Destination for the text lines a demonstration prints.
///
/// Cloning a console yields a handle to the same destination, so a subject
/// and all of its subscribers can share one captured transcript.
///
/// # Examples
///
/// ```rust
/// use pattern_demos::console::Console;
///
/// let console = Console::capture();
/// console.println("hello");
/// assert_eq!(console.lines(), vec!["hello".to_string()]);
/// ```
#[derive(Clone)]
pub struct Console {
    target: Target,
}

impl Console {
    /// Console that writes each line to standard output.
    pub fn stdout() -> Self {
        Self {
            target: Target::Stdout,
        }
    }

    /// Console that records lines in memory instead of printing them.
    pub fn capture() -> Self {
        Self {
            target: Target::Capture(Rc::new(RefCell::new(Vec::new()))),
        }
    }

    /// Write one line.
    pub fn println(&self, line: impl fmt::Display) {
        match &self.target {
            Target::Stdout => println!("{}", line),
            Target::Capture(lines) => lines.borrow_mut().push(line.to_string()),
        }
    }

    /// Lines recorded so far. Always empty for a stdout console.
    pub fn lines(&self) -> Vec<String> {
        match &self.target {
            Target::Stdout => Vec::new(),
            Target::Capture(lines) => lines.borrow().clone(),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Target::Stdout => f.write_str("Console(stdout)"),
            Target::Capture(lines) => write!(f, "Console(capture, {} lines)", lines.borrow().len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_records_in_order() {
        let console = Console::capture();
        console.println("first");
        console.println(2);
        assert_eq!(console.lines(), vec!["first", "2"]);
    }

    #[test]
    fn test_clones_share_transcript() {
        let console = Console::capture();
        let other = console.clone();
        other.println("from clone");
        assert_eq!(console.lines(), vec!["from clone"]);
    }

    #[test]
    fn test_stdout_has_no_transcript() {
        let console = Console::stdout();
        assert!(console.lines().is_empty());
    }
}
