/// Labels for well-known dashboard fields, returned verbatim.
pub const FIELD_LABELS: &[(&str, &str)] = &[
    ("email", "Email"),
    ("username", "Username"),
    ("firstName", "First Name"),
    ("lastName", "Last Name"),
    ("fullName", "Full Name"),
    ("phone", "Phone"),
    ("phoneNumber", "Phone Number"),
    ("name", "Name"),
    ("title", "Title"),
    ("description", "Description"),
    ("status", "Status"),
    ("role", "Role"),
    ("author", "Author"),
    ("category", "Category"),
    ("brand", "Brand"),
    ("catalog", "Catalog"),
    ("repliedByUser", "Replied By"),
    ("createdByUser", "Created By"),
    ("updatedByUser", "Updated By"),
    ("active", "Active"),
    ("verified", "Verified"),
    ("emailVerified", "Email Verified"),
    ("price", "Price"),
    ("stock", "Stock"),
    ("imageUrl", "Image URL"),
    ("avatarUrl", "Avatar URL"),
    ("lastLoginAt", "Last Login"),
    ("createdAt", "Created At"),
    ("updatedAt", "Updated At"),
    ("deletedAt", "Deleted At"),
];

pub const UNKNOWN_FIELD: &str = "Unknown";

pub fn field_label_override(key: &str) -> Option<&'static str> {
    FIELD_LABELS
        .iter()
        .find(|(field, _)| *field == key)
        .map(|(_, label)| *label)
}

/// `firstName` → `First Name`, `HTTPServer` → `HTTP Server`,
/// `created_at` → `Created At`, `field1Name` → `Field1 Name`.
pub fn humanize(key: &str) -> String {
    if let Some(label) = field_label_override(key) {
        return label.to_string();
    }

    let chars: Vec<char> = key.chars().collect();
    let mut spaced = String::with_capacity(key.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        spaced.push(if c == '_' { ' ' } else { c });
        let Some(&next) = chars.get(i + 1) else {
            break;
        };
        let after_next = chars.get(i + 2).copied();

        let camel_hump = c.is_lowercase() && next.is_uppercase();
        let acronym_end = c.is_uppercase()
            && next.is_uppercase()
            && after_next.is_some_and(char::is_lowercase);
        let digit_then_letter = c.is_ascii_digit() && next.is_alphabetic();

        if camel_hump || acronym_end || digit_then_letter {
            spaced.push(' ');
        }
    }

    let label = spaced
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ");

    if label.is_empty() {
        UNKNOWN_FIELD.to_string()
    } else {
        label
    }
}

// Acronyms (`HTTP`, `ID`) keep their case.
fn capitalize_word(word: &str) -> String {
    let letters = || word.chars().filter(|c| c.is_alphabetic());
    if letters().count() > 1 && letters().all(char::is_uppercase) {
        return word.to_string();
    }
    capitalize_first(&word.to_lowercase())
}

/// Upper-cases the first character only.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
