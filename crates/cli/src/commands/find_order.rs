use shopfront_core::finder;
use shopfront_core::Dataset;
use tracing::info;

use super::CommandResult;
use crate::render;

pub fn run(dataset: &Dataset, phone: &str) -> CommandResult {
    match finder::find(&dataset.orders, phone) {
        Ok(orders) => {
            info!(event_name = "order_lookup.hit", matches = orders.len(), "order lookup matched");
            let cards: Vec<String> = orders.iter().map(render::render_order).collect();
            CommandResult::success(cards.join("\n"))
        }
        Err(error) => {
            info!(event_name = "order_lookup.miss", error = %error, "order lookup failed");
            CommandResult::failure(error.user_message(), 1)
        }
    }
}
