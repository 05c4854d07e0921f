/// Structure of a raw label, determined once and used to drive the layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelShape {
    /// Label containing a closing parenthesis, e.g. `16-3-A)`:
    /// a primary part followed by a smaller, raised annotation
    Annotated { primary: String, secondary: String },
    /// Label containing a hyphen, e.g. `51-2`:
    /// a primary part followed by a smaller suffix on the same baseline
    Split { primary: String, secondary: String },
    /// Any other label, rendered as a single segment
    Simple(String),
}

impl LabelShape {
    /// Classifies a raw label. A closing parenthesis takes precedence over a hyphen.
    pub fn classify(raw: &str) -> Self {
        if raw.contains(')') {
            let (primary, secondary) = split_at_first_hyphen(&raw.replace(')', ""));
            LabelShape::Annotated { primary, secondary }
        } else if raw.contains('-') {
            let (primary, secondary) = split_at_first_hyphen(raw);
            LabelShape::Split { primary, secondary }
        } else {
            LabelShape::Simple(raw.to_owned())
        }
    }

    pub fn primary(&self) -> &str {
        match self {
            LabelShape::Annotated { primary, .. } | LabelShape::Split { primary, .. } => primary,
            LabelShape::Simple(text) => text,
        }
    }

    pub fn secondary(&self) -> Option<&str> {
        match self {
            LabelShape::Annotated { secondary, .. } | LabelShape::Split { secondary, .. } => {
                Some(secondary)
            }
            LabelShape::Simple(_) => None,
        }
    }
}

/// Everything before the first hyphen, and everything after it with the remaining hyphens removed
fn split_at_first_hyphen(s: &str) -> (String, String) {
    match s.split_once('-') {
        Some((primary, rest)) => (primary.to_owned(), rest.replace('-', "")),
        None => (s.to_owned(), String::new()),
    }
}
