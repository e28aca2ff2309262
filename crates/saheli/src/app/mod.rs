//! App-layer composition root and shared state container.
//!
//! [`App`] owns every piece of view state. Agent calls run on spawned tasks
//! and report back through [`AppEvent`]s; state mutation is centralized in
//! [`App::apply_app_event`].

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::domain::agent::AgentRole;
use crate::domain::history::{HistoryItem, sample_history};
use crate::domain::payload::{AgentPayload, Pricing, Profit, Reminder, Summary};
use crate::domain::screen::Screen;
use crate::domain::settings::{Settings, SettingsField};
use crate::infra::agent::{AgentClient, AgentError};

pub mod conversation;
pub mod notification;
pub mod panel;

use conversation::{ConversationController, ConversationOutcome, success_message};
use notification::{NotificationKind, NotificationQueue};
use panel::{PROFIT_PROMPT, Panel, REMINDER_PROMPT, SUMMARY_PROMPT};

/// Delay between an agent confirmation and the automatic return home.
pub const CONFIRMATION_DISPLAY_DELAY: Duration = Duration::from_millis(1500);

const VOICE_UNAVAILABLE_MESSAGE: &str =
    "Voice input will be available soon! For now, please type your message.";
const EMPTY_PRICING_MESSAGE: &str = "Please enter what you want pricing advice for";

/// Internal app events emitted by background tasks.
#[derive(Debug)]
pub enum AppEvent {
    /// An agent call settled. `visit` is the navigation generation the call
    /// was issued under.
    AgentReplied {
        result: Result<AgentPayload, AgentError>,
        role: AgentRole,
        visit: u64,
    },
    /// The post-confirmation display delay elapsed.
    ConfirmationElapsed { role: AgentRole, visit: u64 },
}

/// Stores application state and coordinates agent workflows.
pub struct App {
    agent_client: AgentClient,
    confirmation_cancel: Option<CancellationToken>,
    conversation: Option<ConversationController>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    history: Vec<HistoryItem>,
    notifications: NotificationQueue,
    pricing: Panel<Pricing>,
    pricing_input: String,
    profit: Panel<Profit>,
    reminder: Panel<Reminder>,
    reminder_dismissed: bool,
    screen: Screen,
    settings: Settings,
    settings_selection: SettingsField,
    summary: Panel<Summary>,
    visit: u64,
}

impl App {
    /// Creates the app on the home screen. No request is issued until
    /// [`App::load_reminder`] or a navigation asks for one.
    pub fn new(agent_client: AgentClient) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Self {
            agent_client,
            confirmation_cancel: None,
            conversation: None,
            event_rx,
            event_tx,
            history: sample_history(),
            notifications: NotificationQueue::default(),
            pricing: Panel::default(),
            pricing_input: String::new(),
            profit: Panel::default(),
            reminder: Panel::default(),
            reminder_dismissed: false,
            screen: Screen::Home,
            settings: Settings::default(),
            settings_selection: SettingsField::default(),
            summary: Panel::default(),
            visit: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session_id(&self) -> &str {
        self.agent_client.session_id().as_str()
    }

    pub fn conversation(&self) -> Option<&ConversationController> {
        self.conversation.as_ref()
    }

    pub fn conversation_mut(&mut self) -> Option<&mut ConversationController> {
        self.conversation.as_mut()
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    pub fn profit(&self) -> &Panel<Profit> {
        &self.profit
    }

    pub fn summary(&self) -> &Panel<Summary> {
        &self.summary
    }

    pub fn pricing(&self) -> &Panel<Pricing> {
        &self.pricing
    }

    pub fn pricing_input(&self) -> &str {
        &self.pricing_input
    }

    pub fn push_pricing_input(&mut self, character: char) {
        if !self.pricing.is_loading() {
            self.pricing_input.push(character);
        }
    }

    pub fn pop_pricing_input(&mut self) {
        self.pricing_input.pop();
    }

    /// Returns the reminder card while it is loaded and not dismissed.
    pub fn visible_reminder(&self) -> Option<&Reminder> {
        if self.reminder_dismissed {
            return None;
        }

        self.reminder.record()
    }

    pub fn dismiss_reminder(&mut self) {
        self.reminder_dismissed = true;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_selection(&self) -> SettingsField {
        self.settings_selection
    }

    pub fn select_next_setting(&mut self) {
        self.settings_selection = self.settings_selection.next();
    }

    pub fn select_previous_setting(&mut self) {
        self.settings_selection = self.settings_selection.previous();
    }

    pub fn toggle_selected_setting(&mut self) {
        self.settings.toggle(self.settings_selection);
    }

    /// Switches to `screen` unconditionally.
    ///
    /// Every navigation starts a new visit: pending loading flags and the
    /// transcript are dropped, a pending confirmation return is cancelled,
    /// and replies issued under the previous visit are ignored on arrival.
    pub fn navigate(&mut self, screen: Screen) {
        if let Some(cancel) = self.confirmation_cancel.take() {
            cancel.cancel();
        }

        self.visit = self.visit.wrapping_add(1);
        self.screen = screen;
        self.conversation = screen.conversation_role().map(ConversationController::start);
        self.profit.cancel();
        self.summary.cancel();
        self.pricing.cancel();
        debug!(screen = ?screen, visit = self.visit, "navigated");

        match screen {
            Screen::Profit => {
                self.profit.begin();
                self.spawn_agent_call(AgentRole::Profit, PROFIT_PROMPT.to_string());
            }
            Screen::Summary => {
                self.summary.begin();
                self.spawn_agent_call(AgentRole::Summary, SUMMARY_PROMPT.to_string());
            }
            Screen::Home
            | Screen::Sales
            | Screen::Expense
            | Screen::Pricing
            | Screen::History
            | Screen::Settings => {}
        }
    }

    /// Requests the morning reminder shown on the home page.
    pub fn load_reminder(&mut self) {
        self.reminder.begin();
        self.spawn_agent_call(AgentRole::Reminder, REMINDER_PROMPT.to_string());
    }

    /// Sends `text` as the next answer of the active conversation.
    ///
    /// Blank text, a pending reply, a confirmed dialogue, or a screen with no
    /// conversation make this a no-op.
    pub fn submit_conversation(&mut self, text: &str) {
        let Some(conversation) = self.conversation.as_mut() else {
            return;
        };
        let Some(message) = conversation.begin_submit(text) else {
            return;
        };
        let role = conversation.role();

        self.spawn_agent_call(role, message);
    }

    /// Sends the current input buffer, or the highlighted quick-reply when
    /// the buffer is empty.
    pub fn submit_conversation_input(&mut self) {
        let Some(conversation) = self.conversation.as_ref() else {
            return;
        };
        let text = if conversation.input().trim().is_empty() {
            conversation.selected_quick_reply_text().unwrap_or_default()
        } else {
            conversation.input().to_string()
        };

        self.submit_conversation(&text);
    }

    /// Answers with a quick-reply, exactly as if it had been typed.
    pub fn select_option(&mut self, option: &str) {
        self.submit_conversation(option);
    }

    /// Requests pricing advice for the current pricing input.
    pub fn request_pricing_advice(&mut self) {
        if self.pricing.is_loading() {
            return;
        }
        if self.pricing_input.trim().is_empty() {
            self.notifications
                .push(NotificationKind::Warning, EMPTY_PRICING_MESSAGE);

            return;
        }

        self.pricing.begin();
        self.spawn_agent_call(AgentRole::Pricing, self.pricing_input.clone());
    }

    /// Returns the pricing page to input entry without leaving it.
    pub fn restart_pricing(&mut self) {
        self.pricing.clear();
        self.pricing_input.clear();
    }

    /// Queues the notice that voice input is not available yet.
    pub fn announce_voice_unavailable(&mut self) {
        self.notifications
            .push(NotificationKind::Info, VOICE_UNAVAILABLE_MESSAGE);
    }

    /// Waits for the next internal app event.
    pub async fn next_app_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }

    /// Applies every event currently queued, without waiting.
    pub fn process_pending_app_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_app_event(event);
        }
    }

    /// Applies one app event to view state.
    pub fn apply_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AgentReplied {
                result,
                role,
                visit,
            } => self.apply_agent_reply(role, visit, result),
            AppEvent::ConfirmationElapsed { role, visit } => {
                self.apply_confirmation_elapsed(role, visit);
            }
        }
    }

    fn apply_agent_reply(
        &mut self,
        role: AgentRole,
        visit: u64,
        result: Result<AgentPayload, AgentError>,
    ) {
        let payload = match result {
            Ok(payload) => {
                debug!(role = %payload.role(), "agent replied");

                Some(payload)
            }
            Err(error) => {
                warn!(role = %role, error = %error, "agent call failed");

                None
            }
        };

        if role != AgentRole::Reminder && visit != self.visit {
            debug!(role = %role, visit, current_visit = self.visit, "discarding stale reply");

            return;
        }

        match role {
            AgentRole::Reminder => self.reminder.finish(payload.and_then(|payload| match payload {
                AgentPayload::Reminder(reminder) => Some(reminder),
                _ => None,
            })),
            AgentRole::Sales | AgentRole::Expense => self.apply_conversation_reply(role, payload),
            AgentRole::Profit => self.profit.finish(payload.and_then(|payload| match payload {
                AgentPayload::Profit(profit) => Some(profit),
                _ => None,
            })),
            AgentRole::Summary => self.summary.finish(payload.and_then(|payload| match payload {
                AgentPayload::Summary(summary) => Some(summary),
                _ => None,
            })),
            AgentRole::Pricing => self.pricing.finish(payload.and_then(|payload| match payload {
                AgentPayload::Pricing(pricing) => Some(pricing),
                _ => None,
            })),
        }
    }

    fn apply_conversation_reply(&mut self, role: AgentRole, payload: Option<AgentPayload>) {
        let Some(conversation) = self.conversation.as_mut() else {
            return;
        };
        if conversation.role() != role {
            return;
        }

        let step = payload.and_then(AgentPayload::into_conversation_step);
        let outcome = conversation.finish_submit(step);
        match outcome {
            ConversationOutcome::Confirmed => {
                info!(role = %role, "record confirmed");
                self.schedule_confirmation_return(role);
            }
            ConversationOutcome::Unchanged => {
                warn!(role = %role, "agent reply carried no question or confirmation");
            }
            ConversationOutcome::Asked => {}
        }
    }

    fn apply_confirmation_elapsed(&mut self, role: AgentRole, visit: u64) {
        if visit != self.visit {
            return;
        }

        self.confirmation_cancel = None;
        self.notifications
            .push(NotificationKind::Success, success_message(role));
        self.navigate(Screen::Home);
    }

    fn schedule_confirmation_return(&mut self, role: AgentRole) {
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();
        let event_tx = self.event_tx.clone();
        let visit = self.visit;

        tokio::spawn(async move {
            tokio::select! {
                () = task_cancel.cancelled() => {}
                () = tokio::time::sleep(CONFIRMATION_DISPLAY_DELAY) => {
                    let _ = event_tx.send(AppEvent::ConfirmationElapsed { role, visit });
                }
            }
        });

        self.confirmation_cancel = Some(cancel);
    }

    fn spawn_agent_call(&self, role: AgentRole, message: String) {
        let agent_client = self.agent_client.clone();
        let event_tx = self.event_tx.clone();
        let visit = self.visit;

        tokio::spawn(async move {
            let result = agent_client.call(role, message).await;
            let _ = event_tx.send(AppEvent::AgentReplied {
                result,
                role,
                visit,
            });
        });
    }
}
