use crossterm::style::{ContentStyle, Stylize};

/// Application title
pub fn title_style() -> ContentStyle {
    ContentStyle::new().red()
}

/// "All Lists:" heading
pub fn lists_heading_style() -> ContentStyle {
    ContentStyle::new().cyan().bold()
}

/// Heading of a single list view
pub fn list_heading_style() -> ContentStyle {
    ContentStyle::new().yellow().bold()
}

/// Selected list or task row
pub fn selected_style() -> ContentStyle {
    ContentStyle::new().underlined()
}

/// Completed task row
pub fn completed_style() -> ContentStyle {
    ContentStyle::new().dim()
}

/// Completed and selected task row
pub fn completed_selected_style() -> ContentStyle {
    ContentStyle::new().dim().underlined()
}

/// Command help and input prompts
pub fn hint_style() -> ContentStyle {
    ContentStyle::new().blue()
}

/// Error message style
pub fn error_style() -> ContentStyle {
    ContentStyle::new().red().bold()
}
