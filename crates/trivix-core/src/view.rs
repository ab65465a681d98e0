//! Button presentation shared by the wallet and form state machines.

/// Colour treatment applied on top of a button's own styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Success,
    Failure,
}

impl Tone {
    pub const ALL_CLASSES: [&'static str; 4] = [
        "bg-green-600",
        "hover:bg-green-700",
        "bg-red-600",
        "hover:bg-red-700",
    ];

    pub fn classes(self) -> &'static [&'static str] {
        match self {
            Tone::Neutral => &[],
            Tone::Success => &["bg-green-600", "hover:bg-green-700"],
            Tone::Failure => &["bg-red-600", "hover:bg-red-700"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub icon: &'static str,
    pub label: String,
    pub spinning: bool,
    pub disabled: bool,
    pub tone: Tone,
}

impl ButtonView {
    pub fn new(icon: &'static str, label: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
            spinning: false,
            disabled: false,
            tone: Tone::Neutral,
        }
    }

    pub fn busy(label: impl Into<String>) -> Self {
        Self {
            spinning: true,
            disabled: true,
            ..Self::new("loader-2", label)
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Icon placeholder plus label. Labels are produced by this crate, never
    /// from user input.
    pub fn html(&self) -> String {
        let class = if self.spinning {
            r#" class="animate-spin""#
        } else {
            ""
        };
        format!(
            r#"<i data-lucide="{}"{}></i> {}"#,
            self.icon, class, self.label
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_view_spins_and_disables() {
        let view = ButtonView::busy("Connecting...");
        assert!(view.disabled);
        assert_eq!(
            view.html(),
            r#"<i data-lucide="loader-2" class="animate-spin"></i> Connecting..."#
        );
    }

    #[test]
    fn plain_view_has_no_spinner_class() {
        let view = ButtonView::new("check", "Connected").tone(Tone::Success);
        assert_eq!(view.html(), r#"<i data-lucide="check"></i> Connected"#);
        assert_eq!(view.tone.classes(), &["bg-green-600", "hover:bg-green-700"]);
    }
}
