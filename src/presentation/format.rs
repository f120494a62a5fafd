//! Text and markup formatting for the storefront page.

use crate::model::Product;

/// Formats an amount as a currency string with exactly two decimals, e.g. `$12.99`.
pub fn format_currency(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Quantity badge text for a product that appears `count` times in the cart.
///
/// A single unit shows no badge.
pub fn quantity_badge(count: usize) -> String {
    if count > 1 {
        format!("{}x", count)
    } else {
        String::new()
    }
}

/// Escapes text for use inside markup content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Markup for one product card in the catalog grid.
pub fn product_card(symbol: &str, product: &Product) -> String {
    format!(
        concat!(
            "<div class=\"dessert-card\">\n",
            "  <h2>{name}</h2>\n",
            "  <p class=\"dessert-price\">{price}</p>\n",
            "  <p class=\"product-category\">Category: {category}</p>\n",
            "  <button id=\"{id}\" class=\"btn add-to-cart-btn\">Add to cart</button>\n",
            "</div>\n",
        ),
        name = escape_html(&product.name),
        price = escape_html(&format_currency(symbol, product.price)),
        category = escape_html(&product.category),
        id = product.id,
    )
}

/// Markup for the whole catalog grid, cards in catalog order.
pub fn product_grid<'a>(symbol: &str, products: impl IntoIterator<Item = &'a Product>) -> String {
    products
        .into_iter()
        .map(|product| product_card(symbol, product))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_always_two_decimals() {
        assert_eq!(format_currency("$", 12.99), "$12.99");
        assert_eq!(format_currency("$", 0.0), "$0.00");
        assert_eq!(format_currency("$", 32.44), "$32.44");
        assert_eq!(format_currency("€", 5.5), "€5.50");
    }

    #[test]
    fn test_quantity_badge() {
        assert_eq!(quantity_badge(1), "");
        assert_eq!(quantity_badge(2), "2x");
        assert_eq!(quantity_badge(10), "10x");
    }

    #[test]
    fn test_product_card_shows_price_category_and_button() {
        let product = Product::new(4, "Chocolate Cupcake", 5.99, "Cupcake");
        let card = product_card("$", &product);
        assert!(card.contains("<h2>Chocolate Cupcake</h2>"));
        assert!(card.contains("$5.99"));
        assert!(card.contains("Category: Cupcake"));
        assert!(card.contains("id=\"4\""));
    }

    #[test]
    fn test_product_card_escapes_text() {
        let product = Product::new(9, "Fudge <b>&</b> \"Co\"", 1.0, "Sweets & Treats");
        let card = product_card("$", &product);
        assert!(card.contains("<h2>Fudge &lt;b&gt;&amp;&lt;/b&gt; &quot;Co&quot;</h2>"));
        assert!(card.contains("Category: Sweets &amp; Treats"));
        assert!(!card.contains("<b>"));
    }

    #[test]
    fn test_product_grid_keeps_order() {
        let products = vec![
            Product::new(1, "First", 1.0, "A"),
            Product::new(2, "Second", 2.0, "B"),
        ];
        let grid = product_grid("$", &products);
        let first = grid.find("First").unwrap();
        let second = grid.find("Second").unwrap();
        assert!(first < second);
    }
}
