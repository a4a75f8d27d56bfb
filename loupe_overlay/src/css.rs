// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class and custom property naming.

/// Prefix of every class name and custom property.
pub const CSS_PREFIX: &str = "loupe__";

/// Returns the prefixed class name for `name`.
///
/// ```
/// assert_eq!(loupe_overlay::css::css_class("portal"), "loupe__portal");
/// ```
#[must_use]
pub fn css_class(name: &str) -> String {
    format!("{CSS_PREFIX}{name}")
}

/// Returns the prefixed custom property name for `name`.
///
/// ```
/// assert_eq!(
///     loupe_overlay::css::css_var("scrollbar-width"),
///     "--loupe__scrollbar-width"
/// );
/// ```
#[must_use]
pub fn css_var(name: &str) -> String {
    format!("--{CSS_PREFIX}{name}")
}

/// Joins the present, non-empty class names with single spaces.
#[must_use]
pub fn clsx<'a>(classes: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let mut joined = String::new();
    for class in classes.into_iter().flatten().filter(|class| !class.is_empty()) {
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(class);
    }
    joined
}
