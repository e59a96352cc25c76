//! ClickUp custom field type tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The `type` tag ClickUp reports for a custom field.
///
/// Tags this crate has never seen are kept verbatim in [`FieldKind::Other`]
/// so schema evolution on the remote side surfaces as an unsupported kind
/// instead of a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    /// Single-select dropdown (`drop_down`).
    DropDown,
    /// Multi-select label set (`labels`).
    Labels,
    /// `short_text`.
    ShortText,
    /// `text`.
    Text,
    /// `email`.
    Email,
    /// `phone`.
    Phone,
    /// `url`.
    Url,
    /// `date`, written as epoch milliseconds.
    Date,
    /// `number`.
    Number,
    /// `currency`.
    Currency,
    /// `checkbox`.
    Checkbox,
    /// `emoji` (rating).
    Emoji,
    /// `users`.
    Users,
    /// `tasks`.
    Tasks,
    /// `location`.
    Location,
    /// `formula`.
    Formula,
    /// `attachment`.
    Attachment,
    /// `manual_progress`.
    ManualProgress,
    /// `automatic_progress`.
    AutomaticProgress,
    /// Any tag not listed above.
    Other(String),
}

/// The two field kinds that carry an option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    /// One option id per value.
    SingleSelect,
    /// An array of option ids per value.
    MultiSelect,
}

impl FieldKind {
    /// Parses a ClickUp type tag. Never fails; unknown tags become `Other`.
    ///
    /// `single_select` and `multi_select` are accepted as aliases for
    /// `drop_down` and `labels`.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag {
            "drop_down" | "single_select" => Self::DropDown,
            "labels" | "multi_select" => Self::Labels,
            "short_text" => Self::ShortText,
            "text" => Self::Text,
            "email" => Self::Email,
            "phone" => Self::Phone,
            "url" => Self::Url,
            "date" => Self::Date,
            "number" => Self::Number,
            "currency" => Self::Currency,
            "checkbox" => Self::Checkbox,
            "emoji" => Self::Emoji,
            "users" => Self::Users,
            "tasks" => Self::Tasks,
            "location" => Self::Location,
            "formula" => Self::Formula,
            "attachment" => Self::Attachment,
            "manual_progress" => Self::ManualProgress,
            "automatic_progress" => Self::AutomaticProgress,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire tag for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::DropDown => "drop_down",
            Self::Labels => "labels",
            Self::ShortText => "short_text",
            Self::Text => "text",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Url => "url",
            Self::Date => "date",
            Self::Number => "number",
            Self::Currency => "currency",
            Self::Checkbox => "checkbox",
            Self::Emoji => "emoji",
            Self::Users => "users",
            Self::Tasks => "tasks",
            Self::Location => "location",
            Self::Formula => "formula",
            Self::Attachment => "attachment",
            Self::ManualProgress => "manual_progress",
            Self::AutomaticProgress => "automatic_progress",
            Self::Other(tag) => tag,
        }
    }

    /// Returns the choice kind when this field has an option set the
    /// matcher and mapper can work with.
    #[must_use]
    pub const fn choice(&self) -> Option<ChoiceKind> {
        match self {
            Self::DropDown => Some(ChoiceKind::SingleSelect),
            Self::Labels => Some(ChoiceKind::MultiSelect),
            Self::ShortText
            | Self::Text
            | Self::Email
            | Self::Phone
            | Self::Url
            | Self::Date
            | Self::Number
            | Self::Currency
            | Self::Checkbox
            | Self::Emoji
            | Self::Users
            | Self::Tasks
            | Self::Location
            | Self::Formula
            | Self::Attachment
            | Self::ManualProgress
            | Self::AutomaticProgress
            | Self::Other(_) => None,
        }
    }
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tags() {
        assert_eq!(FieldKind::parse("drop_down"), FieldKind::DropDown);
        assert_eq!(FieldKind::parse("labels"), FieldKind::Labels);
        assert_eq!(FieldKind::parse("date"), FieldKind::Date);
    }

    #[test]
    fn select_aliases_map_to_choice_kinds() {
        assert_eq!(FieldKind::parse("single_select"), FieldKind::DropDown);
        assert_eq!(FieldKind::parse("multi_select"), FieldKind::Labels);
    }

    #[test]
    fn unknown_tag_is_kept() {
        let kind = FieldKind::parse("voting");
        assert_eq!(kind, FieldKind::Other("voting".into()));
        assert_eq!(kind.as_str(), "voting");
        assert_eq!(kind.choice(), None);
    }

    #[test]
    fn only_dropdown_and_labels_are_choices() {
        assert_eq!(FieldKind::DropDown.choice(), Some(ChoiceKind::SingleSelect));
        assert_eq!(FieldKind::Labels.choice(), Some(ChoiceKind::MultiSelect));
        assert_eq!(FieldKind::ShortText.choice(), None);
        assert_eq!(FieldKind::Date.choice(), None);
    }

    #[test]
    fn serializes_as_wire_tag() {
        let json = serde_json::to_string(&FieldKind::Labels).unwrap();
        assert_eq!(json, "\"labels\"");
        let back: FieldKind = serde_json::from_str("\"drop_down\"").unwrap();
        assert_eq!(back, FieldKind::DropDown);
    }
}
