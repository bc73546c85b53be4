use shopfront_core::catalog;
use shopfront_core::Dataset;

use super::CommandResult;
use crate::render;

pub fn run(dataset: &Dataset, active_category: &str, search_term: &str) -> CommandResult {
    let view = catalog::filter(&dataset.products, &dataset.categories, active_category, search_term);
    CommandResult::success(render::render_catalog(&view))
}
