use crate::{
    api::{ApplicationStatus, NewApplication, ResellerApplication},
    utils::format::{looks_like_email, non_blank},
};

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineColumn {
    pub status: ApplicationStatus,
    pub applications: Vec<ResellerApplication>,
}

impl PipelineColumn {
    pub fn count(&self) -> usize {
        self.applications.len()
    }
}

/// Buckets applications into the fixed column order, keeping input order inside a column.
pub fn group_by_status(applications: &[ResellerApplication]) -> Vec<PipelineColumn> {
    ApplicationStatus::ALL
        .into_iter()
        .map(|status| PipelineColumn {
            status,
            applications: applications
                .iter()
                .filter(|app| app.status == status)
                .cloned()
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    MarkContacted,
    StartReview,
    Approve,
    Reject,
}

impl CardAction {
    pub fn target(&self) -> ApplicationStatus {
        match self {
            CardAction::MarkContacted => ApplicationStatus::Contacted,
            CardAction::StartReview => ApplicationStatus::Reviewing,
            CardAction::Approve => ApplicationStatus::Approved,
            CardAction::Reject => ApplicationStatus::Rejected,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardAction::MarkContacted => "Mark Contacted",
            CardAction::StartReview => "Start Review",
            CardAction::Approve => "Approve",
            CardAction::Reject => "Reject",
        }
    }

    pub fn needs_confirmation(&self) -> bool {
        matches!(self, CardAction::Approve)
    }
}

/// Actions offered on a card. Closed applications get none and no action
/// targets the status the card already has.
pub fn available_actions(status: ApplicationStatus) -> Vec<CardAction> {
    if status.is_terminal() {
        return Vec::new();
    }
    [
        CardAction::MarkContacted,
        CardAction::StartReview,
        CardAction::Approve,
        CardAction::Reject,
    ]
    .into_iter()
    .filter(|action| action.target() != status)
    .collect()
}

pub fn column_accent(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::New => "border-t-blue-500",
        ApplicationStatus::Contacted => "border-t-yellow-500",
        ApplicationStatus::Reviewing => "border-t-purple-500",
        ApplicationStatus::Approved => "border-t-green-500",
        ApplicationStatus::Rejected => "border-t-red-500",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFormState {
    pub company_name: String,
    pub applicant_name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

impl ApplicationFormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_new_application(&self) -> Result<NewApplication, String> {
        if self.company_name.trim().is_empty() {
            return Err("Company name is required.".into());
        }
        if self.applicant_name.trim().is_empty() {
            return Err("Applicant name is required.".into());
        }
        if self.email.trim().is_empty() {
            return Err("Email is required.".into());
        }
        if !looks_like_email(&self.email) {
            return Err("Please enter a valid email address.".into());
        }
        Ok(NewApplication {
            company_name: self.company_name.trim().to_string(),
            applicant_name: self.applicant_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: non_blank(&self.phone),
            notes: non_blank(&self.notes),
            status: ApplicationStatus::New,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn app(id: &str, status: ApplicationStatus, minute: u32) -> ResellerApplication {
        ResellerApplication {
            id: id.into(),
            company_name: format!("Company {}", id),
            applicant_name: "Sam".into(),
            email: "sam@company.test".into(),
            phone: None,
            notes: None,
            status,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, minute, 0).unwrap(),
        }
    }

    #[test]
    fn grouping_keeps_column_order_and_input_order() {
        let apps = vec![
            app("c", ApplicationStatus::Reviewing, 30),
            app("b", ApplicationStatus::New, 20),
            app("a", ApplicationStatus::New, 10),
        ];
        let columns = group_by_status(&apps);
        let order: Vec<_> = columns.iter().map(|c| c.status).collect();
        assert_eq!(order, ApplicationStatus::ALL.to_vec());
        let new_ids: Vec<_> = columns[0].applications.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(new_ids, vec!["b", "a"]);
        assert_eq!(columns[2].count(), 1);
        assert_eq!(columns.iter().map(PipelineColumn::count).sum::<usize>(), apps.len());
    }

    #[test]
    fn terminal_cards_have_no_actions() {
        assert!(available_actions(ApplicationStatus::Approved).is_empty());
        assert!(available_actions(ApplicationStatus::Rejected).is_empty());
    }

    #[test]
    fn open_cards_skip_their_own_status() {
        assert_eq!(
            available_actions(ApplicationStatus::New),
            vec![
                CardAction::MarkContacted,
                CardAction::StartReview,
                CardAction::Approve,
                CardAction::Reject
            ]
        );
        let reviewing = available_actions(ApplicationStatus::Reviewing);
        assert!(!reviewing.contains(&CardAction::StartReview));
        assert!(reviewing.contains(&CardAction::MarkContacted));
        assert!(CardAction::Approve.needs_confirmation());
        assert!(!CardAction::Reject.needs_confirmation());
    }

    #[test]
    fn form_requires_company_applicant_and_valid_email() {
        let mut form = ApplicationFormState {
            company_name: "Acme Retail".into(),
            applicant_name: "Jo".into(),
            email: "jo.acme.test".into(),
            phone: " ".into(),
            notes: "Met at expo".into(),
        };
        assert_eq!(
            form.to_new_application(),
            Err("Please enter a valid email address.".to_string())
        );
        form.email = "jo@acme.test".into();
        let app = form.to_new_application().unwrap();
        assert_eq!(app.status, ApplicationStatus::New);
        assert!(app.phone.is_none());
        assert_eq!(app.notes.as_deref(), Some("Met at expo"));

        form.company_name.clear();
        assert_eq!(
            form.to_new_application(),
            Err("Company name is required.".to_string())
        );
    }
}
