//! # Item Store
//!
//! In-memory lost and found collections behind the [`ItemProvider`] trait,
//! so a real backend can replace [`MemoryStore`] without touching the query layer.

use std::fmt;

use chrono::NaiveDate;
use log::debug;

use crate::core::item::{Category, Item, ItemStatus, ItemType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An item with this id already exists in either collection.
    DuplicateId(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateId(id) => write!(f, "duplicate item id: {id}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Source of listings.
pub trait ItemProvider: Send + Sync {
    /// All items of one kind, in listing order.
    fn list_items(&self, kind: ItemType) -> Vec<Item>;

    /// Looks an item up by id across both collections.
    fn find_item(&self, id: &str) -> Option<Item>;

    /// Files a new item under its `kind`.
    fn add_item(&mut self, item: Item) -> Result<(), StoreError>;
}

/// Two fixed in-memory collections, seeded at startup.
#[derive(Debug, Default)]
pub struct MemoryStore {
    lost: Vec<Item>,
    found: Vec<Item>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the six campus seed listings.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for item in seed_items() {
            match item.kind {
                ItemType::Lost => store.lost.push(item),
                ItemType::Found => store.found.push(item),
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.lost.len() + self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ItemProvider for MemoryStore {
    fn list_items(&self, kind: ItemType) -> Vec<Item> {
        match kind {
            ItemType::Lost => self.lost.clone(),
            ItemType::Found => self.found.clone(),
        }
    }

    fn find_item(&self, id: &str) -> Option<Item> {
        self.lost
            .iter()
            .chain(self.found.iter())
            .find(|item| item.id == id)
            .cloned()
    }

    fn add_item(&mut self, item: Item) -> Result<(), StoreError> {
        if self.find_item(&item.id).is_some() {
            return Err(StoreError::DuplicateId(item.id));
        }
        debug!("Filing item {} under {:?}", item.id, item.kind);
        // Newest first, matching how the seed lists are ordered by date
        match item.kind {
            ItemType::Lost => self.lost.insert(0, item),
            ItemType::Found => self.found.insert(0, item),
        }
        Ok(())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    title: &str,
    description: &str,
    category: Category,
    location: &str,
    listed: NaiveDate,
    contact: (&str, &str, &str),
    status: ItemStatus,
    kind: ItemType,
) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        location: location.to_string(),
        date: listed,
        image: None,
        contact_name: contact.0.to_string(),
        contact_email: contact.1.to_string(),
        contact_phone: contact.2.to_string(),
        status,
        kind,
    }
}

/// The campus seed listings: ids 1-3 lost, 4-6 found.
pub fn seed_items() -> Vec<Item> {
    vec![
        seed(
            "1",
            "Silver AirPods Pro",
            "Lost in the library on Monday afternoon. Still has the charging case.",
            Category::Electronics,
            "Central Library - 3rd Floor",
            date(2026, 2, 24),
            ("Alex Johnson", "alex.j@university.edu", "+1-555-0101"),
            ItemStatus::Active,
            ItemType::Lost,
        ),
        seed(
            "2",
            "Blue Backpack",
            "College backpack with laptop inside. Very important documents.",
            Category::Bags,
            "Science Building Cafeteria",
            date(2026, 2, 23),
            ("Jordan Smith", "jordan.s@university.edu", "+1-555-0102"),
            ItemStatus::Active,
            ItemType::Lost,
        ),
        seed(
            "3",
            "Black Winter Jacket",
            "Thick black parka, lost after sports event.",
            Category::Clothing,
            "Athletic Center - Gym 2",
            date(2026, 2, 22),
            ("Casey Lee", "casey.lee@university.edu", "+1-555-0103"),
            ItemStatus::Resolved,
            ItemType::Lost,
        ),
        seed(
            "4",
            "Red Water Bottle",
            "Found a YETI branded water bottle near the quad. Has initials \"MB\" on it.",
            Category::Accessories,
            "Central Quad - Near Fountain",
            date(2026, 2, 26),
            ("Morgan Brown", "morgan.b@university.edu", "+1-555-0201"),
            ItemStatus::Active,
            ItemType::Found,
        ),
        seed(
            "5",
            "Student ID Card",
            "Found an ID card in the student center. Name is visible but kept for safety.",
            Category::Documents,
            "Student Center - Main Hall",
            date(2026, 2, 25),
            ("Riley Davis", "riley.d@university.edu", "+1-555-0202"),
            ItemStatus::Active,
            ItemType::Found,
        ),
        seed(
            "6",
            "Gold Ring",
            "Beautiful gold ring found in dorm common area. Appears to be valuable.",
            Category::Jewelry,
            "East Dorm - Common Room",
            date(2026, 2, 24),
            ("Taylor Martinez", "taylor.m@university.edu", "+1-555-0203"),
            ItemStatus::Active,
            ItemType::Found,
        ),
    ]
}
