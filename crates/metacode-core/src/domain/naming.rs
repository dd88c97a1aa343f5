//! Name derivation rules.
//!
//! Pure string functions used to derive test-class names, instance names
//! and GUI component names from what the user typed.

use std::fmt;

/// Convert `CamelCase` to `snake_case`.
///
/// Two passes, mirroring the usual regex recipe:
/// 1. split before an uppercase letter that starts a lowercase run
///    ("HTTPServer" → "HTTP_Server")
/// 2. split between a lowercase letter or digit and an uppercase letter
///    ("myApp" → "my_App")
///
/// An underscore already in place is never doubled.
pub fn camel_case_to_underscore(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();

    // Pass 1: (.)([A-Z][a-z]+) → \1_\2
    let mut first = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        let starts_word = c.is_uppercase()
            && chars.get(i + 1).is_some_and(|n| n.is_lowercase())
            && i > 0
            && chars[i - 1] != '_';
        if starts_word {
            first.push('_');
        }
        first.push(c);
    }

    // Pass 2: ([a-z0-9])([A-Z]) → \1_\2
    let chars: Vec<char> = first.chars().collect();
    let mut out = String::with_capacity(first.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            if prev.is_lowercase() || prev.is_ascii_digit() {
                out.push('_');
            }
        }
        out.push(c);
    }

    out.to_lowercase()
}

/// Convert `snake_case` to `CamelCase`.
///
/// Each segment is capitalized: first letter upper, the rest lower.
pub fn underscore_to_camel_case(name: &str) -> String {
    name.split('_').map(capitalize).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

// ============================================================================
// GUI component names
// ============================================================================

/// The kinds of GUI component that can be added to an existing GUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuiComponent {
    Window,
    Widget,
    Dialog,
}

impl GuiComponent {
    /// Conventional lowercase suffix of module names.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Widget => "widget",
            Self::Dialog => "dialog",
        }
    }

    /// Separator placed between stem and suffix in module names.
    fn separator(self) -> &'static str {
        match self {
            Self::Window => "",
            Self::Widget | Self::Dialog => "_",
        }
    }

    /// Template rendering the component's module.
    pub fn template_name(self) -> &'static str {
        match self {
            Self::Window => "gui_window.py",
            Self::Widget => "gui_widget.py",
            Self::Dialog => "gui_dialog.py",
        }
    }

    /// Derive the module and class names for a component called `name`.
    ///
    /// The suffix is added when missing (compared case-insensitively):
    /// `test` becomes `testwindow`/`TestWindow` for a window and
    /// `test_widget`/`TestWidget` for a widget.
    pub fn names(self, name: &str) -> GuiNames {
        let suffix = self.suffix();
        let lowered = name.to_lowercase();
        let cut = name.len().saturating_sub(suffix.len());
        let stem = if lowered.ends_with(suffix) && name.is_char_boundary(cut) {
            &name[..cut]
        } else {
            name
        };
        let stem = camel_case_to_underscore(stem.trim_end_matches('_'));

        let module = if stem.is_empty() {
            suffix.to_string()
        } else {
            format!("{stem}{}{suffix}", self.separator())
        };
        let class = format!("{}{}", underscore_to_camel_case(&stem), capitalize(suffix));

        GuiNames { module, class }
    }
}

impl fmt::Display for GuiComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Module and class name of a GUI component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuiNames {
    pub module: String,
    pub class: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Case conversion
    // ========================================================================

    #[test]
    fn camel_to_underscore_basic() {
        assert_eq!(camel_case_to_underscore("FooBar"), "foo_bar");
        assert_eq!(camel_case_to_underscore("myApp"), "my_app");
        assert_eq!(camel_case_to_underscore("Foo"), "foo");
    }

    #[test]
    fn camel_to_underscore_acronyms() {
        assert_eq!(camel_case_to_underscore("HTTPServer"), "http_server");
        assert_eq!(camel_case_to_underscore("getHTTPResponseCode"), "get_http_response_code");
    }

    #[test]
    fn camel_to_underscore_digits_and_existing_underscores() {
        assert_eq!(camel_case_to_underscore("Vector3D"), "vector3_d");
        assert_eq!(camel_case_to_underscore("Foo_Bar"), "foo_bar");
        assert_eq!(camel_case_to_underscore("already_snake"), "already_snake");
    }

    #[test]
    fn underscore_to_camel() {
        assert_eq!(underscore_to_camel_case("my_function"), "MyFunction");
        assert_eq!(underscore_to_camel_case("foo"), "Foo");
        assert_eq!(underscore_to_camel_case("myHTTP_x"), "MyhttpX");
    }

    // ========================================================================
    // GUI component names
    // ========================================================================

    #[test]
    fn window_names_have_no_separator() {
        let names = GuiComponent::Window.names("test");
        assert_eq!(names.module, "testwindow");
        assert_eq!(names.class, "TestWindow");
    }

    #[test]
    fn widget_and_dialog_names_use_underscore() {
        let widget = GuiComponent::Widget.names("test");
        assert_eq!(widget.module, "test_widget");
        assert_eq!(widget.class, "TestWidget");

        let dialog = GuiComponent::Dialog.names("settings");
        assert_eq!(dialog.module, "settings_dialog");
        assert_eq!(dialog.class, "SettingsDialog");
    }

    #[test]
    fn existing_suffix_is_not_repeated() {
        assert_eq!(GuiComponent::Widget.names("file_widget").module, "file_widget");
        assert_eq!(GuiComponent::Widget.names("FileWidget").class, "FileWidget");
        assert_eq!(GuiComponent::Window.names("MainWindow").module, "mainwindow");
        assert_eq!(GuiComponent::Dialog.names("AboutDIALOG").class, "AboutDialog");
    }

    #[test]
    fn camel_case_stems_are_split() {
        let names = GuiComponent::Widget.names("DataBrowser");
        assert_eq!(names.module, "data_browser_widget");
        assert_eq!(names.class, "DataBrowserWidget");
    }
}
