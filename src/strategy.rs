//! Strategy pattern: characters whose fighting behaviour can be swapped.

use crate::console::Console;
use std::fmt;

/// A fighting strategy.
pub trait Weapon {
    /// The line printed when this weapon is used.
    fn use_weapon(&self) -> &'static str;
}

/// Sword strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sword;

/// Knife strategy. Every character starts with one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Knife;

/// Axe strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Axe;

/// Gun strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gun;

impl Weapon for Sword {
    fn use_weapon(&self) -> &'static str {
        "Sword"
    }
}

impl Weapon for Knife {
    fn use_weapon(&self) -> &'static str {
        "Knife"
    }
}

impl Weapon for Axe {
    fn use_weapon(&self) -> &'static str {
        "Axe"
    }
}

impl Weapon for Gun {
    fn use_weapon(&self) -> &'static str {
        "Gun"
    }
}

/// What a character is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// King
    King,
    /// Queen
    Queen,
    /// Knight
    Knight,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::King => "King",
            Role::Queen => "Queen",
            Role::Knight => "Knight",
        };
        f.write_str(name)
    }
}

/// A character holding one weapon strategy at a time.
pub struct Character {
    role: Role,
    weapon: Box<dyn Weapon>,
    console: Console,
}

impl Character {
    /// Create a character armed with a [`Knife`].
    pub fn new(role: Role, console: Console) -> Self {
        Self {
            role,
            weapon: Box::new(Knife),
            console,
        }
    }

    /// Swap the fighting strategy.
    pub fn set_weapon(&mut self, weapon: impl Weapon + 'static) {
        self.weapon = Box::new(weapon);
    }

    /// Fight with the current weapon.
    pub fn fight(&self) {
        self.console.println(self.weapon.use_weapon());
    }

    /// Print the character's role.
    pub fn display(&self) {
        self.console.println(self.role);
    }
}

impl fmt::Debug for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Character")
            .field("role", &self.role)
            .field("weapon", &self.weapon.use_weapon())
            .finish()
    }
}

/// The queen swaps to an axe, the king to a gun.
pub fn run(console: &Console) {
    let mut queen = Character::new(Role::Queen, console.clone());
    queen.display();
    queen.fight();
    queen.set_weapon(Axe);
    queen.fight();

    console.println("---------");

    let mut king = Character::new(Role::King, console.clone());
    king.display();
    king.fight();
    king.set_weapon(Gun);
    king.fight();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_knife() {
        let console = Console::capture();
        let knight = Character::new(Role::Knight, console.clone());
        knight.display();
        knight.fight();
        assert_eq!(console.lines(), vec!["Knight", "Knife"]);
    }

    #[test]
    fn test_swap_strategy() {
        let console = Console::capture();
        let mut knight = Character::new(Role::Knight, console.clone());
        knight.set_weapon(Sword);
        knight.fight();
        assert_eq!(console.lines(), vec!["Sword"]);
    }

    #[test]
    fn test_debug_shows_role_and_current_weapon() {
        let mut queen = Character::new(Role::Queen, Console::capture());
        queen.set_weapon(Gun);
        assert_eq!(
            format!("{:?}", queen),
            r#"Character { role: Queen, weapon: "Gun" }"#
        );
    }

    #[test]
    fn test_run_output() {
        let console = Console::capture();
        run(&console);
        assert_eq!(
            console.lines(),
            vec!["Queen", "Knife", "Axe", "---------", "King", "Knife", "Gun"]
        );
    }
}
