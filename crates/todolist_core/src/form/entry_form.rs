//! Entry form state and submission.
//!
//! # Responsibility
//! - Hold the controlled draft text.
//! - Turn a submission into a validated add request.
//!
//! # Invariants
//! - Blank drafts (empty after trimming) never reach `on_submit`.
//! - The draft is cleared only after a forwarded submission.

use crate::model::todo::is_blank_title;

/// Which text the form forwards once the trimmed draft passed validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitlePolicy {
    /// Forward the draft exactly as typed, surrounding whitespace included.
    #[default]
    KeepAsTyped,
    /// Forward the trimmed draft.
    Trim,
}

/// Outcome of [`EntryForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission<R> {
    /// Draft was blank; nothing was forwarded.
    Discarded,
    /// Draft was forwarded; carries the callback's result.
    Submitted(R),
}

impl<R> FormSubmission<R> {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }

    pub fn into_submitted(self) -> Option<R> {
        match self {
            Self::Submitted(value) => Some(value),
            Self::Discarded => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    draft: String,
    policy: TitlePolicy,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: TitlePolicy) -> Self {
        Self {
            draft: String::new(),
            policy,
        }
    }

    pub fn policy(&self) -> TitlePolicy {
        self.policy
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the draft, mirroring an input change event.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Validates the draft and forwards it to `on_submit`.
    ///
    /// Blank drafts are dropped silently and left in place.
    pub fn submit<R>(&mut self, on_submit: impl FnOnce(String) -> R) -> FormSubmission<R> {
        if is_blank_title(&self.draft) {
            return FormSubmission::Discarded;
        }

        let draft = std::mem::take(&mut self.draft);
        let title = match self.policy {
            TitlePolicy::KeepAsTyped => draft,
            TitlePolicy::Trim => draft.trim().to_string(),
        };
        FormSubmission::Submitted(on_submit(title))
    }
}

#[cfg(test)]
mod tests {
    use super::{EntryForm, FormSubmission, TitlePolicy};

    #[test]
    fn blank_draft_is_discarded_without_callback() {
        let mut form = EntryForm::new();
        form.set_draft("   ");

        let outcome = form.submit(|_| panic!("blank draft must not be forwarded"));
        assert_eq!(outcome, FormSubmission::<()>::Discarded);
        assert_eq!(form.draft(), "   ");
    }

    #[test]
    fn keep_as_typed_forwards_untrimmed_text_and_clears_draft() {
        let mut form = EntryForm::new();
        form.set_draft("  Walk dog  ");

        let forwarded = form.submit(|title| title).into_submitted();
        assert_eq!(forwarded.as_deref(), Some("  Walk dog  "));
        assert_eq!(form.draft(), "");
    }

    #[test]
    fn trim_policy_forwards_trimmed_text() {
        let mut form = EntryForm::with_policy(TitlePolicy::Trim);
        form.set_draft("\tWalk dog \n");

        let forwarded = form.submit(|title| title).into_submitted();
        assert_eq!(forwarded.as_deref(), Some("Walk dog"));
    }
}
