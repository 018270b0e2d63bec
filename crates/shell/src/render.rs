//! Plain-text rendering of catalog views.

use std::fmt::Write as _;

use shopfront_catalog::{CartBadge, Notification, NotificationLevel, ProductCard, ProductView, RenderMode};

pub fn render_card(card: &ProductCard) -> String {
    let mut out = format!("[{}] {}  {} {}\n", card.id, card.name, card.stars, card.rating);
    match &card.old_price {
        Some(old) => {
            let _ = writeln!(out, "    {}  (was {})", card.current_price, old);
        }
        None => {
            let _ = writeln!(out, "    {}", card.current_price);
        }
    }
    let _ = writeln!(out, "    {}", card.image_url);
    out
}

/// Render a view. Replace mode starts with a separator line so the reader can
/// tell the list was redrawn; append mode only continues it.
pub fn render_view(view: &ProductView) -> String {
    let mut out = String::new();

    if view.mode == RenderMode::Replace {
        let _ = writeln!(out, "== {} product(s) ==", view.total);
        if view.cards.is_empty() {
            out.push_str("no products match the current filters\n");
        }
    }

    for card in &view.cards {
        out.push_str(&render_card(card));
    }

    if view.has_more {
        out.push_str("-- type `more` to load more --\n");
    }
    out
}

pub fn render_categories(categories: &[String]) -> String {
    if categories.is_empty() {
        return "no categories\n".to_string();
    }
    let mut out = String::from("categories:\n");
    for category in categories {
        let _ = writeln!(out, "  [ ] {category}");
    }
    out
}

pub fn render_badge(badge: CartBadge) -> String {
    format!("🛒 {badge}\n")
}

pub fn render_notification(notification: &Notification) -> String {
    let level = match notification.level {
        NotificationLevel::Info => "info",
        NotificationLevel::Success => "success",
        NotificationLevel::Error => "error",
    };
    format!("({level}) {}\n", notification.message)
}

#[cfg(test)]
mod tests {
    use shopfront_core::ProductId;

    use super::*;

    fn card(id: u64, old_price: Option<&str>) -> ProductCard {
        ProductCard {
            id: ProductId::new(id),
            name: format!("Item {id}"),
            image_url: format!("/img/{id}.png"),
            rating: 4.0,
            stars: "★★★★☆".to_string(),
            current_price: "60 ₽".to_string(),
            old_price: old_price.map(str::to_string),
        }
    }

    #[test]
    fn card_shows_struck_price_when_present() {
        let text = render_card(&card(2, Some("80 ₽")));
        assert_eq!(text, "[2] Item 2  ★★★★☆ 4\n    60 ₽  (was 80 ₽)\n    /img/2.png\n");
    }

    #[test]
    fn replace_view_has_header_and_more_hint() {
        let view = ProductView {
            cards: vec![card(1, None)],
            has_more: true,
            mode: RenderMode::Replace,
            total: 3,
        };
        let text = render_view(&view);
        assert!(text.starts_with("== 3 product(s) ==\n[1] Item 1"));
        assert!(text.ends_with("-- type `more` to load more --\n"));
    }

    #[test]
    fn append_view_has_no_header() {
        let view = ProductView {
            cards: vec![card(4, None)],
            has_more: false,
            mode: RenderMode::Append,
            total: 4,
        };
        assert!(render_view(&view).starts_with("[4] Item 4"));
    }

    #[test]
    fn empty_replace_view_says_so() {
        let view = ProductView {
            cards: vec![],
            has_more: false,
            mode: RenderMode::Replace,
            total: 0,
        };
        assert_eq!(render_view(&view), "== 0 product(s) ==\nno products match the current filters\n");
    }

    #[test]
    fn notifications_and_badge() {
        assert_eq!(render_notification(&Notification::success("Item added to cart")), "(success) Item added to cart\n");
        assert_eq!(render_badge(CartBadge { count: 2 }), "🛒 Cart (2)\n");
        assert_eq!(render_categories(&[]), "no categories\n");
    }
}
