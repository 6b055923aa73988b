// SPDX-License-Identifier: MPL-2.0
//! Display options of a confirmation request.

/// Default dialog title.
pub const DEFAULT_TITLE: &str = "Confirm Action";
/// Default dialog message.
pub const DEFAULT_MESSAGE: &str = "Are you sure you want to proceed?";
/// Default label of the confirm button.
pub const DEFAULT_CONFIRM_TEXT: &str = "Confirm";
/// Default label of the cancel button.
pub const DEFAULT_CANCEL_TEXT: &str = "Cancel";
/// Item type used by the delete/update presets when none is given.
pub const DEFAULT_ITEM_TYPE: &str = "item";

/// Visual weight of the confirm button. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

/// What the dialog shows. Every field is optional and falls back to a default.
///
/// # Example
///
/// ```
/// use dashboard_feedback::ui::confirm::{ConfirmOptions, Variant};
///
/// let options = ConfirmOptions::new()
///     .message("Archive the 2023 intake?")
///     .variant(Variant::Secondary)
///     .detail("Students", "42");
///
/// assert_eq!(options.title_text(), "Confirm Action");
/// assert_eq!(options.message_text(), "Archive the 2023 intake?");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmOptions {
    title: Option<String>,
    message: Option<String>,
    confirm_text: Option<String>,
    cancel_text: Option<String>,
    variant: Variant,
    details: Vec<(String, String)>,
    item_name: Option<String>,
}

impl ConfirmOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for destructive deletes.
    #[must_use]
    pub fn delete(item_name: impl Into<String>, item_type: Option<&str>) -> Self {
        let item_type = item_type.unwrap_or(DEFAULT_ITEM_TYPE);
        Self::new()
            .title(format!("Delete {item_type}"))
            .message(format!(
                "Are you sure you want to delete this {item_type}? This action cannot be undone."
            ))
            .confirm_text("Delete")
            .variant(Variant::Danger)
            .item_name(item_name)
    }

    /// Preset for non-destructive updates.
    #[must_use]
    pub fn update(item_name: impl Into<String>, item_type: Option<&str>) -> Self {
        let item_type = item_type.unwrap_or(DEFAULT_ITEM_TYPE);
        Self::new()
            .title(format!("Update {item_type}"))
            .message(format!("Are you sure you want to update this {item_type}?"))
            .confirm_text("Update")
            .variant(Variant::Secondary)
            .item_name(item_name)
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Appends a `label: value` line; lines keep insertion order.
    #[must_use]
    pub fn detail(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.push((label.into(), value.into()));
        self
    }

    #[must_use]
    pub fn item_name(mut self, item_name: impl Into<String>) -> Self {
        self.item_name = Some(item_name.into());
        self
    }

    #[must_use]
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    #[must_use]
    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_MESSAGE)
    }

    #[must_use]
    pub fn confirm_label(&self) -> &str {
        self.confirm_text.as_deref().unwrap_or(DEFAULT_CONFIRM_TEXT)
    }

    #[must_use]
    pub fn cancel_label(&self) -> &str {
        self.cancel_text.as_deref().unwrap_or(DEFAULT_CANCEL_TEXT)
    }

    #[must_use]
    pub fn variant_kind(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn details(&self) -> &[(String, String)] {
        &self.details
    }

    #[must_use]
    pub fn item(&self) -> Option<&str> {
        self.item_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_options_use_defaults() {
        let options = ConfirmOptions::new();
        assert_eq!(options.title_text(), "Confirm Action");
        assert_eq!(options.message_text(), "Are you sure you want to proceed?");
        assert_eq!(options.confirm_label(), "Confirm");
        assert_eq!(options.cancel_label(), "Cancel");
        assert_eq!(options.variant_kind(), Variant::Primary);
        assert!(options.details().is_empty());
        assert!(options.item().is_none());
    }

    #[test]
    fn delete_preset_is_destructive() {
        let options = ConfirmOptions::delete("Course A", Some("course"));
        assert_eq!(options.title_text(), "Delete course");
        assert!(options.message_text().contains("delete this course"));
        assert_eq!(options.confirm_label(), "Delete");
        assert_eq!(options.cancel_label(), "Cancel");
        assert_eq!(options.variant_kind(), Variant::Danger);
        assert_eq!(options.item(), Some("Course A"));
    }

    #[test]
    fn update_preset_is_secondary() {
        let options = ConfirmOptions::update("Jane Doe", Some("instructor"));
        assert_eq!(options.title_text(), "Update instructor");
        assert!(options.message_text().contains("update this instructor"));
        assert_eq!(options.confirm_label(), "Update");
        assert_eq!(options.variant_kind(), Variant::Secondary);
        assert_eq!(options.item(), Some("Jane Doe"));
    }

    #[test]
    fn presets_default_item_type() {
        assert_eq!(ConfirmOptions::delete("x", None).title_text(), "Delete item");
        assert_eq!(ConfirmOptions::update("x", None).title_text(), "Update item");
    }

    #[test]
    fn details_keep_insertion_order_next_to_item_name() {
        let options = ConfirmOptions::delete("Session 3", Some("session"))
            .detail("Course", "Welding")
            .detail("Starts", "2024-09-02")
            .detail("Enrolled", "18");

        let labels: Vec<&str> = options.details().iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["Course", "Starts", "Enrolled"]);
        assert_eq!(options.item(), Some("Session 3"));
    }
}
