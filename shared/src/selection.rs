/// Which country, if any, the user has picked on the map. Countries are
/// identified by display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected(String),
}

impl Selection {
    /// Clicking the selected shape toggles it off; any other shape takes over.
    pub fn click_shape(&self, name: &str) -> Selection {
        match self {
            Selection::Selected(current) if current == name => Selection::Idle,
            _ => Selection::Selected(name.to_string()),
        }
    }

    pub fn click_background(&self) -> Selection {
        Selection::Idle
    }

    /// Close button, backdrop click or Escape.
    pub fn close(&self) -> Selection {
        Selection::Idle
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            Selection::Idle => None,
            Selection::Selected(name) => Some(name),
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected() == Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;

    #[test]
    fn click_selects_then_toggles_off() {
        let state = Selection::default().click_shape("Peru");
        assert_eq!(state, Selection::Selected("Peru".to_string()));
        assert_eq!(state.click_shape("Peru"), Selection::Idle);
    }

    #[test]
    fn click_other_shape_switches_directly() {
        let state = Selection::Selected("Peru".to_string()).click_shape("Chile");
        assert_eq!(state.selected(), Some("Chile"));
        assert!(!state.is_selected("Peru"));
    }

    #[test]
    fn background_and_close_return_to_idle() {
        let state = Selection::Selected("Peru".to_string());
        assert_eq!(state.click_background(), Selection::Idle);
        assert_eq!(state.close(), Selection::Idle);
        assert_eq!(Selection::Idle.click_background(), Selection::Idle);
    }
}
