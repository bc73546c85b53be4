//! Text rendering for the storefront surfaces: product grid, category tabs
//! and order cards, with vi-VN currency and date formatting.

use shopfront_core::catalog::CatalogView;
use shopfront_core::domain::category::Category;
use shopfront_core::domain::order::Order;
use shopfront_core::domain::product::Product;
use shopfront_core::locale;

pub fn render_catalog(view: &CatalogView) -> String {
    match view {
        CatalogView::Grouped(groups) => {
            let mut out = String::new();
            for (name, products) in groups {
                out.push_str(&format!("== {name} ==\n"));
                for product in products {
                    out.push_str(&render_product(product));
                }
                out.push('\n');
            }
            out.trim_end().to_string()
        }
        CatalogView::Flat(products) => {
            if products.is_empty() {
                return "Không có sản phẩm nào".to_string();
            }
            let rendered: String = products.iter().map(render_product).collect();
            rendered.trim_end().to_string()
        }
    }
}

fn render_product(product: &Product) -> String {
    let mut line = format!("  [{}] {} - {}", product.id, product.name, locale::format_vnd(product.price));
    if let Some(description) = &product.description {
        line.push_str(&format!(" ({description})"));
    }
    line.push('\n');
    line
}

pub fn render_categories(categories: &[Category]) -> String {
    let mut out = String::from("Tất cả (all)\n");
    for category in categories {
        out.push_str(&format!("{} ({})\n", category.name, category.id));
    }
    out.trim_end().to_string()
}

pub fn render_order(order: &Order) -> String {
    let mut out = format!(
        "Mã đơn: {}\nNgày đặt: {}\nTrạng thái: {}\nKhách hàng: {} - {}\n",
        order.id,
        locale::format_date(order.created_at),
        order.status.label(),
        order.customer.name,
        order.customer.phone,
    );
    for item in &order.items {
        out.push_str(&format!(
            "  {} x{} - {}\n",
            item.product_name,
            item.quantity,
            locale::format_vnd(item.unit_price),
        ));
    }
    out.push_str(&format!("Tổng tiền: {}\n", locale::format_vnd(order.total_amount)));
    out
}
