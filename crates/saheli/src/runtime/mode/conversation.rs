use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::domain::screen::Screen;
use crate::runtime::EventResult;
use crate::runtime::mode::typed_char;

/// Handles key input on the sales and expense conversations.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    if key.code == KeyCode::Char('v') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.announce_voice_unavailable();

        return EventResult::Continue;
    }

    match key.code {
        KeyCode::Esc => app.navigate(Screen::Home),
        KeyCode::Enter => app.submit_conversation_input(),
        KeyCode::Tab => {
            if let Some(conversation) = app.conversation_mut() {
                conversation.select_next_quick_reply();
            }
        }
        KeyCode::BackTab => {
            if let Some(conversation) = app.conversation_mut() {
                conversation.select_previous_quick_reply();
            }
        }
        KeyCode::Backspace => {
            if let Some(conversation) = app.conversation_mut() {
                conversation.pop_input();
            }
        }
        _ => {
            if let Some(character) = typed_char(key)
                && let Some(conversation) = app.conversation_mut()
            {
                conversation.push_input(character);
            }
        }
    }

    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::conversation::ConversationTurn;
    use crate::infra::transport::{AgentEnvelope, MockAgentTransport};
    use crate::runtime::mode::test_support::new_test_app;

    fn type_text(app: &mut App, text: &str) {
        for character in text.chars() {
            handle(app, KeyEvent::new(KeyCode::Char(character), KeyModifiers::NONE));
        }
    }

    #[tokio::test]
    async fn test_handle_typing_and_backspace_edit_input() {
        // Arrange
        let mut app = new_test_app(MockAgentTransport::new());
        app.navigate(Screen::Sales);

        // Act
        type_text(&mut app, "samosaa");
        handle(&mut app, KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));

        // Assert
        assert_eq!(
            app.conversation().map(|conversation| conversation.input()),
            Some("samosa")
        );
    }

    #[tokio::test]
    async fn test_handle_enter_submits_typed_answer() {
        // Arrange
        let mut transport = MockAgentTransport::new();
        transport
            .expect_call()
            .withf(|request| request.message == "pickles")
            .times(1)
            .returning(|_| {
                Box::pin(async { Ok(AgentEnvelope::success(json!({"question": "How many jars?"}))) })
            });
        let mut app = new_test_app(transport);
        app.navigate(Screen::Sales);
        type_text(&mut app, "pickles");

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let event = app.next_app_event().await.expect("event channel closed");
        app.apply_app_event(event);

        // Assert
        let conversation = app.conversation().expect("conversation missing");
        assert_eq!(conversation.input(), "");
        assert_eq!(
            conversation.transcript().last(),
            Some(&ConversationTurn::agent("How many jars?"))
        );
    }

    #[tokio::test]
    async fn test_handle_tab_then_enter_sends_selected_quick_reply() {
        // Arrange
        let mut transport = MockAgentTransport::new();
        transport
            .expect_call()
            .withf(|request| request.message == "papad")
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Ok(AgentEnvelope::success(json!({
                        "question": "How many packets?",
                        "options": ["5", "10"]
                    })))
                })
            });
        transport
            .expect_call()
            .withf(|request| request.message == "10")
            .times(1)
            .returning(|_| {
                Box::pin(async { Ok(AgentEnvelope::success(json!({"question": "Price?"}))) })
            });
        let mut app = new_test_app(transport);
        app.navigate(Screen::Sales);
        type_text(&mut app, "papad");
        handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let event = app.next_app_event().await.expect("event channel closed");
        app.apply_app_event(event);

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let event = app.next_app_event().await.expect("event channel closed");
        app.apply_app_event(event);

        // Assert
        let conversation = app.conversation().expect("conversation missing");
        assert_eq!(
            conversation.transcript().last(),
            Some(&ConversationTurn::agent("Price?"))
        );
    }

    #[tokio::test]
    async fn test_handle_esc_returns_home() {
        // Arrange
        let mut app = new_test_app(MockAgentTransport::new());
        app.navigate(Screen::Expense);

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

        // Assert
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.conversation().is_none());
    }

    #[tokio::test]
    async fn test_handle_ctrl_v_queues_voice_notice_without_typing() {
        // Arrange
        let mut app = new_test_app(MockAgentTransport::new());
        app.navigate(Screen::Sales);

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Char('v'), KeyModifiers::CONTROL));

        // Assert
        assert_eq!(app.notifications().len(), 1);
        assert_eq!(
            app.conversation().map(|conversation| conversation.input()),
            Some("")
        );
    }
}
