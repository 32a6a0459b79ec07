/// Colour family of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

const SUCCESS: &[&str] = &["approved", "active", "completed", "confirmed"];
const WARNING: &[&str] = &["pending", "submitted", "upcoming"];
const DANGER: &[&str] = &["rejected", "blocked", "cancelled", "failed"];
const INFO: &[&str] = &["processing", "in progress"];

impl StatusTone {
    /// Classify a status label, ignoring case and surrounding whitespace
    pub fn classify(status: &str) -> Self {
        let status = status.trim().to_lowercase();
        let status = status.as_str();

        if SUCCESS.contains(&status) {
            StatusTone::Success
        } else if WARNING.contains(&status) {
            StatusTone::Warning
        } else if DANGER.contains(&status) {
            StatusTone::Danger
        } else if INFO.contains(&status) {
            StatusTone::Info
        } else {
            StatusTone::Neutral
        }
    }

    pub fn color(&self) -> comfy_table::Color {
        use comfy_table::Color;
        match self {
            StatusTone::Success => Color::Green,
            StatusTone::Warning => Color::Yellow,
            StatusTone::Danger => Color::Red,
            StatusTone::Info => Color::Blue,
            StatusTone::Neutral => Color::Grey,
        }
    }
}
