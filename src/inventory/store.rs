use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use super::{Inventory, Item};
use crate::error::Result;

/// Loads and saves a whole inventory at once
pub trait InventoryStore {
    fn load(&self) -> Result<Inventory>;

    fn save(&mut self, inventory: &Inventory) -> Result<()>;
}

fn bincode_config() -> bincode::config::Configuration {
    bincode::config::standard()
}

/// Encodes the items, in order, with bincode
pub fn encode(inventory: &Inventory) -> Result<Vec<u8>> {
    Ok(bincode::encode_to_vec(inventory.items().to_vec(), bincode_config())?)
}

pub fn decode(bytes: &[u8]) -> Result<Inventory> {
    let (items, _): (Vec<Item>, usize) = bincode::decode_from_slice(bytes, bincode_config())?;
    Inventory::from_items(items)
}

/// Inventory kept in a single bincode file
#[derive(Debug, Clone)]
pub struct BincodeFileStore {
    path: PathBuf,
}

impl BincodeFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventoryStore for BincodeFileStore {
    /// A missing or empty file loads as an empty inventory
    fn load(&self) -> Result<Inventory> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no inventory file at {}", self.path.display());
                return Ok(Inventory::new());
            }
            Err(err) => return Err(err.into()),
        };

        if bytes.is_empty() {
            return Ok(Inventory::new());
        }
        decode(&bytes)
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        fs::write(&self.path, encode(inventory)?)?;
        debug!(
            "saved {} items to {}",
            inventory.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// In-memory store holding the last saved encoding
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    bytes: Option<Vec<u8>>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed saves
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl InventoryStore for MemoryStore {
    fn load(&self) -> Result<Inventory> {
        match &self.bytes {
            Some(bytes) => decode(bytes),
            None => Ok(Inventory::new()),
        }
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        self.bytes = Some(encode(inventory)?);
        self.saves += 1;
        Ok(())
    }
}
