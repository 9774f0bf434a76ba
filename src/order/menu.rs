//! The fixed menu: pizzas and build-your-own toppings
//!
//! Prices live here and nowhere else; line items snapshot them at add time.

use thiserror::Error;

use super::item::{CustomBuild, LineItem, LineItemError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("unknown menu item: {0}")]
    UnknownItem(String),
    #[error("unknown topping: {0}")]
    UnknownTopping(String),
    #[error(transparent)]
    Item(#[from] LineItemError),
}

/// A pizza (or drink) on the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub name: &'static str,
    /// Smallest currency unit
    pub price: u64,
}

/// An add-on for build-your-own pizzas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topping {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u64,
}

/// The restaurant's fixed catalog
#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
    toppings: Vec<Topping>,
}

impl Menu {
    pub fn house_menu() -> Self {
        Self {
            items: vec![
                MenuItem { id: "margherita", name: "Margherita", price: 9500 },
                MenuItem { id: "napolitana", name: "Napolitana", price: 11500 },
                MenuItem { id: "fugazzeta", name: "Fugazzeta", price: 12000 },
                MenuItem { id: "calabresa", name: "Calabresa", price: 12500 },
                MenuItem { id: "soda", name: "Soda 1.5L", price: 2500 },
            ],
            toppings: vec![
                Topping { id: "extra-cheese", name: "Extra cheese", price: 1500 },
                Topping { id: "ham", name: "Ham", price: 1800 },
                Topping { id: "peppers", name: "Roasted peppers", price: 1200 },
                Topping { id: "olives", name: "Olives", price: 800 },
                Topping { id: "egg", name: "Egg", price: 1000 },
                Topping { id: "anchovies", name: "Anchovies", price: 2200 },
            ],
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn topping(&self, id: &str) -> Option<&Topping> {
        self.toppings.iter().find(|t| t.id == id)
    }

    /// Line item for a straight catalog pick
    pub fn catalog_line(&self, id: &str, quantity: u32) -> Result<LineItem, MenuError> {
        let item = self
            .item(id)
            .ok_or_else(|| MenuError::UnknownItem(id.to_string()))?;
        Ok(LineItem::new(item.id, item.name, item.price, quantity)?)
    }

    /// Line item for a build-your-own pizza: base price plus each add-on,
    /// keeping the add-ons in the order the customer picked them
    pub fn custom_line(
        &self,
        base_id: &str,
        addon_ids: &[&str],
        quantity: u32,
    ) -> Result<LineItem, MenuError> {
        let base = self
            .item(base_id)
            .ok_or_else(|| MenuError::UnknownItem(base_id.to_string()))?;

        let mut price = base.price;
        let mut addons = Vec::with_capacity(addon_ids.len());
        for &id in addon_ids {
            let topping = self
                .topping(id)
                .ok_or_else(|| MenuError::UnknownTopping(id.to_string()))?;
            price += topping.price;
            addons.push(topping.id.to_string());
        }

        let build = CustomBuild {
            base: base.id.to_string(),
            addons,
        };
        Ok(LineItem::custom(
            format!("custom-{}", base.id),
            format!("Custom {}", base.name),
            price,
            quantity,
            build,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_line_snapshots_price() {
        let menu = Menu::house_menu();
        let line = menu.catalog_line("napolitana", 2).unwrap();
        assert_eq!(line.unit_price, 11500);
        assert_eq!(line.line_total(), 23000);
    }

    #[test]
    fn test_unknown_item() {
        let menu = Menu::house_menu();
        assert_eq!(
            menu.catalog_line("calzone", 1),
            Err(MenuError::UnknownItem("calzone".into()))
        );
    }

    #[test]
    fn test_custom_line_sums_addons() {
        let menu = Menu::house_menu();
        let line = menu
            .custom_line("margherita", &["ham", "olives"], 1)
            .unwrap();
        // 9500 + 1800 + 800
        assert_eq!(line.unit_price, 12100);
        assert!(line.is_custom());
        let build = line.custom.as_ref().unwrap();
        assert_eq!(build.base, "margherita");
        assert_eq!(build.addons, vec!["ham", "olives"]);
    }

    #[test]
    fn test_custom_line_unknown_topping() {
        let menu = Menu::house_menu();
        assert_eq!(
            menu.custom_line("margherita", &["pineapple"], 1),
            Err(MenuError::UnknownTopping("pineapple".into()))
        );
    }

    #[test]
    fn test_zero_quantity_propagates() {
        let menu = Menu::house_menu();
        assert_eq!(
            menu.catalog_line("margherita", 0),
            Err(MenuError::Item(LineItemError::ZeroQuantity))
        );
    }
}
