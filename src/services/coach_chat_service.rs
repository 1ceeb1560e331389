use crate::api::{ChatError, ChatGateway};
use crate::models::{AthleteProfile, ChatMessage, ChatRole};

const COACH_PERSONA: &str = "You are VyraCoach, an expert AI fitness coach and training partner. \
Your role is to help users achieve their fitness goals with personalized advice, motivation, and support.

Your personality:
- Encouraging and positive, but not over-the-top
- Knowledgeable about fitness, nutrition, and recovery
- Direct and practical with advice
- You celebrate progress and help users push through challenges

Your capabilities:
- Create and suggest workout routines
- Provide form tips and exercise guidance
- Offer nutrition advice and meal suggestions
- Help with goal setting and tracking
- Provide motivation and accountability
- Suggest recovery and rest strategies

Guidelines:
- Keep responses concise (2-4 sentences usually)
- Be specific and actionable with advice
- Ask clarifying questions when needed
- Always prioritize safety - recommend consulting professionals for injuries or medical concerns";

/// System prompt combining the coach persona with the athlete's context
pub fn system_prompt(profile: &AthleteProfile) -> String {
    let sports = if profile.sports.is_empty() {
        "not specified".to_string()
    } else {
        profile
            .sports
            .iter()
            .map(|s| format!("{} ({})", s.sport.display_name(), s.skill_level))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let goal = if profile.primary_goal.trim().is_empty() {
        "not specified"
    } else {
        profile.primary_goal.trim()
    };

    format!(
        "{persona}\n\nCurrent user context:\n- Name: {name}\n- Goal: {goal}\n- Sports: {sports}\n- Training days per week: {days}\n- Training phase: {phase}",
        persona = COACH_PERSONA,
        name = profile.full_name(),
        goal = goal,
        sports = sports,
        days = profile.weekly_training_days,
        phase = profile.training_phase,
    )
}

/// Opening message shown before the athlete types anything
pub fn greeting(profile: &AthleteProfile) -> String {
    let name = if profile.first_name.trim().is_empty() {
        "there"
    } else {
        profile.first_name.trim()
    };

    let sports = if profile.sports.is_empty() {
        "various activities".to_string()
    } else {
        profile
            .sports
            .iter()
            .map(|s| s.sport.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Hey {}! I'm Vyra Coach, your AI fitness partner. I see you're training in {}. \
How can I help you today? I can suggest workouts, answer training questions, or help optimize your performance!",
        name, sports
    )
}

/// Coach conversation transcript.
///
/// The greeting is displayed but never sent to the model as history.
pub struct Conversation {
    system_prompt: String,
    greeting: ChatMessage,
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(profile: &AthleteProfile) -> Self {
        Self {
            system_prompt: system_prompt(profile),
            greeting: ChatMessage::assistant(greeting(profile)),
            messages: Vec::new(),
        }
    }

    pub fn greeting(&self) -> &ChatMessage {
        &self.greeting
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Messages exchanged after the greeting
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Greeting followed by every exchanged message
    pub fn transcript(&self) -> impl Iterator<Item = &ChatMessage> {
        std::iter::once(&self.greeting).chain(self.messages.iter())
    }

    /// Send a message and append the reply.
    ///
    /// On failure an apology carrying the error is appended instead, so the
    /// transcript shows what happened and the athlete can resubmit.
    pub async fn send<G: ChatGateway>(&mut self, gateway: &G, text: &str) -> Result<String, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let history_len = self.messages.len();
        self.messages.push(ChatMessage::user(text));

        let result = gateway
            .complete(&self.system_prompt, &self.messages[..history_len], text)
            .await;

        match result {
            Ok(reply) => {
                self.messages.push(ChatMessage::assistant(reply.clone()));
                Ok(reply)
            }
            Err(e) => {
                tracing::warn!("Coach chat failed: {}", e);
                self.messages.push(ChatMessage::new(
                    ChatRole::Assistant,
                    format!("Sorry, I encountered an error: {}. Please try again.", e),
                ));
                Err(e)
            }
        }
    }
}
