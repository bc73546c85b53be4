use shopfront_core::Dataset;

use super::CommandResult;
use crate::render;

pub fn run(dataset: &Dataset) -> CommandResult {
    CommandResult::success(render::render_categories(&dataset.categories))
}

#[cfg(test)]
mod tests {
    use shopfront_core::Dataset;

    #[test]
    fn tab_bar_starts_with_the_all_sentinel() {
        let dataset = Dataset::from_json_strs(
            r#"{"orders":[]}"#,
            r#"{"products":[]}"#,
            r#"{"categories":[{"id":"drinks","name":"Đồ uống","slug":"do-uong"}]}"#,
        )
        .expect("fixtures parse");

        let result = super::run(&dataset);
        let lines: Vec<&str> = result.output.lines().collect();
        assert_eq!(lines, ["Tất cả (all)", "Đồ uống (drinks)"]);
    }
}
