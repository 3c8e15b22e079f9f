use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::widgets::FocusContext;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

struct Binding {
    context: Option<FocusContext>,
    key: KeyEvent,
    action: Action,
    label: &'static str,
    visible_in_bar: bool,
}

/// Key to action table per focus context.
pub struct CommandRegistry {
    bindings: Vec<Binding>,
}

impl Default for CommandRegistry {
    #[allow(clippy::too_many_lines)]
    fn default() -> Self {
        let mut bindings = Vec::new();

        let mut register = |context: Option<FocusContext>,
                            code: KeyCode,
                            modifiers: KeyModifiers,
                            action: Action,
                            label: &'static str,
                            visible_in_bar: bool| {
            bindings.push(Binding {
                context,
                key: KeyEvent::new(code, modifiers),
                action,
                label,
                visible_in_bar,
            });
        };

        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let input = Some(FocusContext::AppName);
        let list = Some(FocusContext::AppList);
        let confirm = Some(FocusContext::Confirmation);

        register(None, KeyCode::Char('c'), ctrl, Action::Quit, "Quit", false);

        register(input, KeyCode::Enter, none, Action::Deploy, "Deploy", true);
        register(input, KeyCode::Char('u'), ctrl, Action::ClearInput, "Clear", true);
        register(input, KeyCode::Tab, none, Action::ToggleFocus, "Apps", true);
        register(input, KeyCode::Esc, none, Action::ToggleFocus, "Apps", false);
        register(input, KeyCode::Char('n'), ctrl, Action::NextFact, "Info", true);
        register(input, KeyCode::Char('c'), ctrl, Action::Quit, "Quit", true);

        register(list, KeyCode::Up, none, Action::SelectPrevious, "Up", false);
        register(list, KeyCode::Char('k'), none, Action::SelectPrevious, "Up", false);
        register(list, KeyCode::Down, none, Action::SelectNext, "Down", false);
        register(list, KeyCode::Char('j'), none, Action::SelectNext, "Down", false);
        register(list, KeyCode::Char('r'), none, Action::SendRequest, "Request", true);
        register(list, KeyCode::Char('+'), none, Action::ScaleUp, "Scale+", true);
        register(list, KeyCode::Char('='), none, Action::ScaleUp, "Scale+", false);
        register(list, KeyCode::Char('-'), none, Action::ScaleDown, "Scale-", true);
        register(list, KeyCode::Char('s'), none, Action::Stop, "Stop", true);
        register(list, KeyCode::Char('d'), none, Action::Delete, "Delete", true);
        register(list, KeyCode::Delete, none, Action::Delete, "Delete", false);
        register(list, KeyCode::Char('n'), none, Action::NextFact, "Info", true);
        register(list, KeyCode::Char('n'), ctrl, Action::NextFact, "Info", false);
        register(list, KeyCode::Tab, none, Action::ToggleFocus, "New app", true);
        register(list, KeyCode::Char('q'), none, Action::Quit, "Quit", true);
        register(list, KeyCode::Esc, none, Action::Quit, "Quit", false);

        register(confirm, KeyCode::Char('y'), none, Action::Confirm, "Delete", true);
        register(confirm, KeyCode::Enter, none, Action::Confirm, "Delete", false);
        register(confirm, KeyCode::Char('n'), none, Action::Cancel, "Keep", true);
        register(confirm, KeyCode::Esc, none, Action::Cancel, "Keep", false);

        Self { bindings }
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `key` in `context`; context-free bindings apply everywhere.
    pub fn find_action(&self, context: FocusContext, key: KeyEvent) -> Option<Action> {
        let (code, modifiers) = normalize(key);
        self.bindings
            .iter()
            .filter(|b| b.context.is_none_or(|c| c == context))
            .find(|b| {
                let (bound_code, bound_modifiers) = normalize(b.key);
                bound_code == code && bound_modifiers == modifiers
            })
            .map(|b| b.action)
    }

    /// Bindings shown in the footer for `context`.
    pub fn keybinds(&self, context: FocusContext) -> Vec<Keybind> {
        self.bindings
            .iter()
            .filter(|b| b.visible_in_bar && b.context == Some(context))
            .map(|b| Keybind::new(b.key, b.action, b.label))
            .collect()
    }
}

/// Terminals disagree on reporting shift for symbols such as `+`.
fn normalize(key: KeyEvent) -> (KeyCode, KeyModifiers) {
    match key.code {
        KeyCode::Char(_) => (key.code, key.modifiers - KeyModifiers::SHIFT),
        _ => (key.code, key.modifiers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(FocusContext::AppName, KeyCode::Enter, KeyModifiers::NONE, Some(Action::Deploy) ; "enter_deploys")]
    #[test_case(FocusContext::AppName, KeyCode::Char('r'), KeyModifiers::NONE, None ; "letters_are_text")]
    #[test_case(FocusContext::AppName, KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Action::Quit) ; "ctrl_c_quits_input")]
    #[test_case(FocusContext::AppList, KeyCode::Char('r'), KeyModifiers::NONE, Some(Action::SendRequest) ; "r_requests")]
    #[test_case(FocusContext::AppList, KeyCode::Char('+'), KeyModifiers::SHIFT, Some(Action::ScaleUp) ; "shifted_plus")]
    #[test_case(FocusContext::AppList, KeyCode::Char('-'), KeyModifiers::NONE, Some(Action::ScaleDown) ; "minus")]
    #[test_case(FocusContext::AppList, KeyCode::Esc, KeyModifiers::NONE, Some(Action::Quit) ; "esc_quits_list")]
    #[test_case(FocusContext::Confirmation, KeyCode::Char('y'), KeyModifiers::NONE, Some(Action::Confirm) ; "yes")]
    #[test_case(FocusContext::Confirmation, KeyCode::Esc, KeyModifiers::NONE, Some(Action::Cancel) ; "esc_declines")]
    #[test_case(FocusContext::Confirmation, KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Action::Quit) ; "ctrl_c_anywhere")]
    fn test_find_action(
        context: FocusContext,
        code: KeyCode,
        modifiers: KeyModifiers,
        expected: Option<Action>,
    ) {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.find_action(context, KeyEvent::new(code, modifiers)),
            expected
        );
    }

    #[test]
    fn test_footer_keybinds_are_context_specific() {
        let registry = CommandRegistry::new();

        let list: Vec<Action> = registry
            .keybinds(FocusContext::AppList)
            .iter()
            .map(|k| k.action)
            .collect();
        assert!(list.contains(&Action::SendRequest));
        assert!(!list.contains(&Action::Deploy));

        let confirm = registry.keybinds(FocusContext::Confirmation);
        assert_eq!(confirm.len(), 2);
    }
}
