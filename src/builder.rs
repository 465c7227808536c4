use crate::instance::{Item, KnapsackInstance};

pub struct InstanceBuilder {
    items: Vec<Item>,
    capacity: u64,
}

impl InstanceBuilder {
    pub fn new(capacity: u64) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }
    pub fn item(mut self, weight: u64, value: u64) -> Self {
        self.items.push(Item::new(weight, value));
        self
    }
    pub fn build(self) -> KnapsackInstance {
        KnapsackInstance::new(self.items, self.capacity)
    }
}
