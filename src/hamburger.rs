//! Builder pattern: assemble a hamburger one topping at a time.

use crate::console::Console;
use std::fmt;

/// A finished hamburger. Only obtainable through [`HamburgerBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hamburger {
    cheese: bool,
    beef: bool,
    onions: bool,
}

impl Hamburger {
    /// Start building a hamburger with every topping off.
    pub fn builder() -> HamburgerBuilder {
        HamburgerBuilder::new()
    }

    /// Whether cheese was added.
    pub fn cheese(&self) -> bool {
        self.cheese
    }

    /// Whether beef was added.
    pub fn beef(&self) -> bool {
        self.beef
    }

    /// Whether onions were added.
    pub fn onions(&self) -> bool {
        self.onions
    }
}

impl fmt::Display for Hamburger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.cheese, self.beef, self.onions)
    }
}

/// Consuming builder for [`Hamburger`].
///
/// # Examples
///
/// ```rust
/// use pattern_demos::hamburger::Hamburger;
///
/// let burger = Hamburger::builder().cheese(true).onions(true).build();
/// assert_eq!(burger.to_string(), "true false true");
/// ```
#[derive(Debug, Clone, Default)]
pub struct HamburgerBuilder {
    cheese: bool,
    beef: bool,
    onions: bool,
}

impl HamburgerBuilder {
    /// Create a builder with every topping off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cheese.
    pub fn cheese(mut self, value: bool) -> Self {
        self.cheese = value;
        self
    }

    /// Set beef.
    pub fn beef(mut self, value: bool) -> Self {
        self.beef = value;
        self
    }

    /// Set onions.
    pub fn onions(mut self, value: bool) -> Self {
        self.onions = value;
        self
    }

    /// Finish the hamburger.
    pub fn build(self) -> Hamburger {
        Hamburger {
            cheese: self.cheese,
            beef: self.beef,
            onions: self.onions,
        }
    }
}

/// Build a cheese-and-onion hamburger and print it.
pub fn run(console: &Console) {
    let hamburger = Hamburger::builder().cheese(true).onions(true).build();
    console.println(hamburger);
}
