//! Interactive session over the fruit inventory

use std::io::{BufRead, Write};

use log::info;

use super::prompt::Prompt;
use crate::error::{Error, Result};
use crate::inventory::{Inventory, InventoryStore, Item};

pub const FRUIT_MENU: &str = "
------------------------------------------------
Menu Options
------------------------------------------------
1. Add a fruit
2. Show number of fruits
3. Search for a fruit
4. List all fruit names
5. Show all fruit info
6. Update fruit quantity and price
7. Calculate total cost of all fruits
8. Remove a fruit by name
9. Clear all fruits
10. Exit program
------------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FruitAction {
    Add,
    Count,
    Search,
    ListNames,
    ShowAll,
    Update,
    TotalValue,
    Remove,
    Clear,
    Exit,
}

impl FruitAction {
    /// Maps a menu number (1 to 10) to its action
    pub fn from_choice(choice: u32) -> Option<Self> {
        let action = match choice {
            1 => FruitAction::Add,
            2 => FruitAction::Count,
            3 => FruitAction::Search,
            4 => FruitAction::ListNames,
            5 => FruitAction::ShowAll,
            6 => FruitAction::Update,
            7 => FruitAction::TotalValue,
            8 => FruitAction::Remove,
            9 => FruitAction::Clear,
            10 => FruitAction::Exit,
            _ => return None,
        };
        Some(action)
    }
}

/// Inventory session that saves to its store after every action but exit
#[derive(Debug)]
pub struct FruitSession<S> {
    inventory: Inventory,
    store: S,
}

impl<S: InventoryStore> FruitSession<S> {
    /// Loads the inventory from `store`, falling back to `starter` items when
    /// the store holds nothing
    pub fn open(store: S, starter: &[Item]) -> Result<Self> {
        let mut inventory = store.load()?;
        if inventory.is_empty() {
            inventory = Inventory::from_items(starter.to_vec())?;
            info!("starting with {} starter items", inventory.len());
        }
        Ok(Self { inventory, store })
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn show_all<R: BufRead, W: Write>(&self, prompt: &mut Prompt<R, W>) -> Result<()> {
        for item in self.inventory.items() {
            prompt.say(&item.to_string())?;
        }
        Ok(())
    }

    /// Runs the menu loop until the exit action or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, prompt: &mut Prompt<R, W>) -> Result<()> {
        if !self.inventory.is_empty() {
            self.show_all(prompt)?;
        }

        loop {
            prompt.say(FRUIT_MENU)?;
            let Some(action) = Self::ask_choice(prompt)? else {
                return Ok(());
            };
            if action == FruitAction::Exit {
                prompt.say("Exiting program...")?;
                return Ok(());
            }

            if !self.perform(action, prompt)? {
                return Ok(());
            }
            self.store.save(&self.inventory)?;
        }
    }

    fn ask_choice<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<Option<FruitAction>> {
        loop {
            let Some(answer) = prompt.ask("Choose 1-10: ")? else {
                return Ok(None);
            };
            if let Some(action) = answer.parse().ok().and_then(FruitAction::from_choice) {
                return Ok(Some(action));
            }
            prompt.say("Invalid input. Please enter a number between 1 and 10.")?;
        }
    }

    /// Reads `(amount, price)`; `Ok(None)` when either does not parse
    fn ask_amount_price<R: BufRead, W: Write>(
        prompt: &mut Prompt<R, W>,
        amount_label: &str,
        price_label: &str,
    ) -> Result<Option<Option<(i64, f64)>>> {
        let Some(amount) = prompt.ask(amount_label)? else {
            return Ok(None);
        };
        let Ok(amount) = amount.parse::<i64>() else {
            return Ok(Some(None));
        };
        let Some(price) = prompt.ask(price_label)? else {
            return Ok(None);
        };
        Ok(Some(price.parse::<f64>().ok().map(|price| (amount, price))))
    }

    /// Performs one action. Returns `false` when input ran out mid-action.
    pub fn perform<R: BufRead, W: Write>(
        &mut self,
        action: FruitAction,
        prompt: &mut Prompt<R, W>,
    ) -> Result<bool> {
        match action {
            FruitAction::Add => {
                let Some(name) = prompt.ask("Name: ")? else {
                    return Ok(false);
                };
                if self.inventory.contains(&name) {
                    prompt.say(&format!("{} already exists.", name))?;
                    return Ok(true);
                }
                match Self::ask_amount_price(prompt, "Amount: ", "Price: ")? {
                    None => return Ok(false),
                    Some(None) => prompt.say(
                        "Invalid input. Amount must be integer, price must be float.",
                    )?,
                    Some(Some((amount, price))) => {
                        self.inventory.add(Item::new(name.clone(), amount, price))?;
                        prompt.say(&format!("{} added.", name))?;
                    }
                }
            }
            FruitAction::Count => {
                prompt.say(&format!("Total fruits: {}", self.inventory.len()))?;
            }
            FruitAction::Search => {
                let Some(name) = prompt.ask("Enter fruit name to search: ")? else {
                    return Ok(false);
                };
                match self.inventory.get(&name) {
                    Some(item) => prompt.say(&item.to_string())?,
                    None => prompt.say("Fruit not found.")?,
                }
            }
            FruitAction::ListNames => {
                for name in self.inventory.names() {
                    prompt.say(name)?;
                }
            }
            FruitAction::ShowAll => self.show_all(prompt)?,
            FruitAction::Update => {
                let Some(name) = prompt.ask("Enter fruit name to update: ")? else {
                    return Ok(false);
                };
                if !self.inventory.contains(&name) {
                    prompt.say(&format!("{} not found.", name))?;
                    return Ok(true);
                }
                match Self::ask_amount_price(prompt, "New amount: ", "New price: ")? {
                    None => return Ok(false),
                    Some(None) => prompt.say("Invalid input.")?,
                    Some(Some((amount, price))) => {
                        let item = self.inventory.update(&name, amount, price)?;
                        prompt.say(&format!("Updated:\n{}", item))?;
                    }
                }
            }
            FruitAction::TotalValue => {
                prompt.say(&format!(
                    "Total cost of all fruits: {:.2} kr",
                    self.inventory.total_value()
                ))?;
            }
            FruitAction::Remove => {
                let Some(name) = prompt.ask("Enter fruit name to remove: ")? else {
                    return Ok(false);
                };
                match self.inventory.remove(&name) {
                    Ok(_) => prompt.say(&format!("{} removed.", name))?,
                    Err(Error::KeyNotFound(_)) => prompt.say(&format!("{} not found.", name))?,
                    Err(err) => return Err(err),
                }
            }
            FruitAction::Clear => {
                self.inventory.clear();
                prompt.say("All fruits cleared.")?;
            }
            FruitAction::Exit => {}
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::MemoryStore;

    fn starter() -> Vec<Item> {
        vec![Item::new("Äpple", 6, 10.0), Item::new("Kiwi", 10, 15.0)]
    }

    fn run_script(script: &str) -> (FruitSession<MemoryStore>, String) {
        let mut session = FruitSession::open(MemoryStore::new(), &starter()).unwrap();
        let mut prompt = Prompt::new(script.as_bytes(), Vec::new());
        session.run(&mut prompt).unwrap();
        let output = String::from_utf8(prompt.into_output()).unwrap();
        (session, output)
    }

    #[test]
    fn test_choice_mapping() {
        assert_eq!(FruitAction::from_choice(1), Some(FruitAction::Add));
        assert_eq!(FruitAction::from_choice(10), Some(FruitAction::Exit));
        assert_eq!(FruitAction::from_choice(0), None);
        assert_eq!(FruitAction::from_choice(11), None);
    }

    #[test]
    fn test_add_then_total() {
        let (session, output) = run_script("1\nMango\n2\n12.5\n7\n10\n");
        assert_eq!(session.inventory().len(), 3);
        assert!(output.contains("Mango added."));
        assert!(output.contains("Total cost of all fruits: 235.00 kr"));
        // one save per action, none on exit
        assert_eq!(session.store().saves(), 2);
    }

    #[test]
    fn test_invalid_input_keeps_going() {
        let (session, output) = run_script("abc\n1\nPear\nmany\n3\nKiwi\n10\n");
        assert!(output.contains("Please enter a number between 1 and 10."));
        assert!(output.contains("Amount must be integer"));
        assert!(output.contains("Name: Kiwi\nAmount: 10\nPrice: 15 kr"));
        assert!(!session.inventory().contains("Pear"));
    }

    #[test]
    fn test_update_remove_clear() {
        let (session, output) = run_script("6\nKiwi\n1\n2\n8\nÄpple\n8\nÄpple\n9\n10\n");
        assert!(output.contains("Updated:\nName: Kiwi\nAmount: 1\nPrice: 2 kr"));
        assert!(output.contains("Äpple removed."));
        assert!(output.contains("Äpple not found."));
        assert!(session.inventory().is_empty());
        assert!(session.store().load().unwrap().is_empty());
    }

    #[test]
    fn test_reopen_uses_saved_items() {
        let mut store = MemoryStore::new();
        let saved = Inventory::from_items(vec![Item::new("Plum", 1, 3.0)]).unwrap();
        store.save(&saved).unwrap();

        let session = FruitSession::open(store, &starter()).unwrap();
        assert_eq!(session.inventory().names(), vec!["Plum"]);
    }
}
