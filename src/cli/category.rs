//! Category CLI commands
//!
//! Lists the report categories the planner knows about.

use crate::models::ReportCategory;

/// Format the known categories as an aligned list
pub fn format_category_list() -> String {
    let categories = ReportCategory::KNOWN;

    let tag_width = categories
        .iter()
        .map(|c| c.tag().len())
        .max()
        .unwrap_or(8)
        .max(8);
    let title_width = categories
        .iter()
        .map(|c| c.title().len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<tag_width$}  {:<title_width$}  {}\n",
        "Category",
        "Title",
        "Description",
        tag_width = tag_width,
        title_width = title_width,
    ));
    output.push_str(&format!(
        "{:-<tag_width$}  {:-<title_width$}  {:-<11}\n",
        "",
        "",
        "",
        tag_width = tag_width,
        title_width = title_width,
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<tag_width$}  {:<title_width$}  {}\n",
            category.tag(),
            category.title(),
            category.description(),
            tag_width = tag_width,
            title_width = title_width,
        ));
    }

    output
}

/// Print the known categories
pub fn handle_categories_command() {
    print!("{}", format_category_list());
}
