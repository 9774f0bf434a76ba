//! Checkout: order summary text and the WhatsApp deep link
//!
//! There is no backend - placing an order means opening a chat with the
//! restaurant, pre-filled with the rendered summary. The line order and the
//! presence rules below are what the kitchen staff reads, so they stay
//! fixed: header, customer/method/address block (GPS only when a pin was
//! dropped, notes only when non-empty), itemized lines, totals block with
//! the coupon line only when one is applied, closing prompt.

use crate::order::{Cart, FulfillmentMethod};

/// Customer details collected at checkout time
#[derive(Debug, Clone, Default)]
pub struct CheckoutDetails {
    pub customer_name: String,
}

/// Render an amount in the smallest currency unit as `$1,234.50`
pub fn format_money(amount: u64) -> String {
    let dollars = (amount / 100).to_string();
    let cents = amount % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, c) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${grouped}.{cents:02}")
}

/// Render the human-readable order summary for the chat message
pub fn order_summary(cart: &Cart, details: &CheckoutDetails) -> String {
    let total = cart.total();
    let mut out = String::new();

    out.push_str("*New order - Brick Oven Pizzeria*\n\n");
    out.push_str(&format!("Customer: {}\n", details.customer_name));

    match cart.fulfillment.method {
        FulfillmentMethod::Delivery => {
            out.push_str("Method: Delivery\n");
            out.push_str(&format!("Address: {}\n", cart.fulfillment.address.trim()));
            if let Some(geo) = cart.fulfillment.geo {
                out.push_str(&format!(
                    "GPS: https://www.google.com/maps?q={},{}\n",
                    geo.lat, geo.lon
                ));
            }
        }
        FulfillmentMethod::Pickup => {
            out.push_str("Method: Pickup\n");
        }
    }
    let instructions = cart.fulfillment.instructions.trim();
    if !instructions.is_empty() {
        out.push_str(&format!("Notes: {instructions}\n"));
    }

    out.push_str("\nOrder:\n");
    for item in &cart.items {
        let name = match &item.custom {
            Some(build) if !build.addons.is_empty() => {
                format!("{} ({})", item.name, build.addons.join(", "))
            }
            _ => item.name.clone(),
        };
        out.push_str(&format!(
            "{}x {} - {}\n",
            item.quantity(),
            name,
            format_money(item.line_total())
        ));
    }

    out.push_str(&format!("\nSubtotal: {}\n", format_money(total.subtotal)));
    if total.delivery_fee > 0 {
        out.push_str(&format!(
            "Delivery fee: {}\n",
            format_money(total.delivery_fee)
        ));
    }
    if let Some(coupon) = cart.coupon() {
        out.push_str(&format!(
            "Coupon {} ({}%): -{}\n",
            coupon.code(),
            coupon.percent(),
            format_money(total.discount)
        ));
    }
    out.push_str(&format!("Total: {}\n", format_money(total.grand_total)));

    out.push_str("\nPlease confirm my order. Thank you!");
    out
}

/// Deep link that opens the chat app with the summary pre-filled
pub fn whatsapp_link(phone: &str, summary: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}?text={}", urlencoding::encode(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{CouponCatalog, FulfillmentMethod, GeoPoint, LineItem};

    fn checkout() -> CheckoutDetails {
        CheckoutDetails {
            customer_name: "Ana".into(),
        }
    }

    fn delivery_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(LineItem::new("margherita", "Margherita", 9500, 1).unwrap());
        cart.add_item(LineItem::new("napolitana", "Napolitana", 11500, 2).unwrap());
        cart.fulfillment.method = FulfillmentMethod::Delivery;
        cart.fulfillment.address = "Via Roma 1234".into();
        cart
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0), "$0.00");
        assert_eq!(format_money(205), "$2.05");
        assert_eq!(format_money(29625), "$296.25");
        assert_eq!(format_money(123_456_789), "$1,234,567.89");
    }

    #[test]
    fn test_summary_totals_block() {
        let mut cart = delivery_cart();
        cart.apply_coupon("PIZZAFAN15", &CouponCatalog::house_catalog());

        let summary = order_summary(&cart, &checkout());
        assert!(summary.contains("Customer: Ana"));
        assert!(summary.contains("Method: Delivery"));
        assert!(summary.contains("Address: Via Roma 1234"));
        assert!(summary.contains("1x Margherita - $95.00"));
        assert!(summary.contains("2x Napolitana - $230.00"));
        assert!(summary.contains("Subtotal: $325.00"));
        assert!(summary.contains("Delivery fee: $20.00"));
        assert!(summary.contains("Coupon PIZZAFAN15 (15%): -$48.75"));
        assert!(summary.contains("Total: $296.25"));
    }

    #[test]
    fn test_conditional_lines_absent() {
        let mut cart = delivery_cart();
        cart.fulfillment.method = FulfillmentMethod::Pickup;

        let summary = order_summary(&cart, &checkout());
        assert!(summary.contains("Method: Pickup"));
        assert!(!summary.contains("Address:"));
        assert!(!summary.contains("GPS:"));
        assert!(!summary.contains("Notes:"));
        assert!(!summary.contains("Coupon"));
        assert!(!summary.contains("Delivery fee:"));
    }

    #[test]
    fn test_gps_and_notes_lines_present() {
        let mut cart = delivery_cart();
        cart.fulfillment.geo = Some(GeoPoint {
            lat: -25.3,
            lon: -57.6,
        });
        cart.fulfillment.instructions = "ring twice".into();

        let summary = order_summary(&cart, &checkout());
        assert!(summary.contains("GPS: https://www.google.com/maps?q=-25.3,-57.6"));
        assert!(summary.contains("Notes: ring twice"));
    }

    #[test]
    fn test_custom_build_lists_addons() {
        let mut cart = Cart::new();
        let menu = crate::order::Menu::house_menu();
        cart.add_item(menu.custom_line("margherita", &["ham", "olives"], 1).unwrap());

        let summary = order_summary(&cart, &checkout());
        assert!(summary.contains("1x Custom Margherita (ham, olives) - $121.00"));
    }

    #[test]
    fn test_whatsapp_link_is_encoded() {
        let link = whatsapp_link("+595 991 234-567", "hello world\nline two");
        assert!(link.starts_with("https://wa.me/595991234567?text="));
        assert!(link.contains("hello%20world%0Aline%20two"));
        assert!(!link.contains(' '));
    }
}
