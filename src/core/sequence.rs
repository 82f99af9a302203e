use crate::domain::model::{ContactRecord, EmailMessage, EmailSequence, Quarter};
use crate::domain::ports::Clock;

/// Builds the five-step outreach sequence for a contact.
pub struct SequenceGenerator<C: Clock> {
    clock: C,
}

impl<C: Clock> SequenceGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// 依目前月份計算季度，每次呼叫重新讀取時鐘
    pub fn current_quarter(&self) -> Quarter {
        Quarter::from_month(self.clock.current_month())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn generate(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        role: &str,
        company: &str,
        industry: &str,
        facts: &[String],
    ) -> EmailSequence {
        build_sequence(
            first_name,
            last_name,
            email,
            role,
            company,
            industry,
            facts,
            self.current_quarter(),
        )
    }

    /// Pipeline entry point: no supplementary facts are sourced yet.
    pub fn generate_for(&self, contact: &ContactRecord) -> EmailSequence {
        self.generate(
            &contact.first_name,
            &contact.last_name,
            &contact.email,
            &contact.role_need,
            &contact.company,
            &contact.industry,
            &[],
        )
    }
}

/// Pure template expansion for a known quarter.
///
/// `facts` are optional sentence fragments about the company. A non-empty list
/// switches the first opener to a congratulation; a second fact replaces the
/// second opener verbatim.
#[allow(clippy::too_many_arguments)]
pub fn build_sequence(
    first_name: &str,
    _last_name: &str,
    _email: &str,
    role: &str,
    company: &str,
    industry: &str,
    facts: &[String],
    quarter: Quarter,
) -> EmailSequence {
    let opener1 = if facts.is_empty() {
        format!(
            "{}, many {} teams speed up delivery with embedded offshore pods",
            first_name, industry
        )
    } else {
        format!("{}, congrats on recent momentum at {}", first_name, company)
    };

    let opener2 = match facts.get(1) {
        Some(fact) => fact.clone(),
        None => format!(
            "Happy to outline how embedded {} roles slot into {}'s sprint cadence",
            role, company
        ),
    };

    EmailSequence::new([
        EmailMessage {
            subject: format!("Adding {} without slowing {}'s roadmap", role, company),
            body: format!(
                "{}.\n\nI run Nestable.ai — we make it fast and low-friction to add vetted, \
                 full-time engineers in Sri Lanka who plug into {}'s workflow like in-house. \
                 We handle recruiting, onboarding, payroll, compliance, and workspace.\n\n\
                 Open to a quick call?",
                opener1, company
            ),
        },
        EmailMessage {
            subject: format!("{} × embedded {}: simple, managed model", company, role),
            body: format!(
                "{}. Start with 1–2 engineers on a short trial. UK-hours overlap; \
                 your standups/Git flow; we manage ops & performance.\n\n\
                 15 minutes this week to compare options?",
                opener2
            ),
        },
        EmailMessage {
            subject: format!("Time-to-hire for {}: avoid the 6–10 week wait", role),
            body: format!(
                "Many {} teams wait ~6–10 weeks for a strong {}. We show 2–3 vetted profiles \
                 in days and can start a trial inside two weeks.\n\n\
                 Quick call to review profiles and timelines?",
                industry, role
            ),
        },
        EmailMessage {
            subject: "De-risked start: small trial, clear deliverables".to_string(),
            body: "Start with 1 engineer, short trial, explicit deliverables, stop/continue \
                   decision. Keep velocity without long commitments.\n\n\
                   Pencil 15 minutes to map a low-risk first step?"
                .to_string(),
        },
        EmailMessage {
            subject: format!("Wrap-up: revisit in {} or compare profiles now?", quarter),
            body: "If bandwidth is tight, we can time it to your next sprint. I can share \
                   anonymized profiles + day-rate ranges.\n\n\
                   Intro call this week, or should I circle back next month?"
                .to_string(),
        },
    ])
}
