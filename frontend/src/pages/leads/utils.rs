use chrono::NaiveDate;

use crate::{
    api::{LeadStatus, NewLead},
    utils::{
        format::{looks_like_email, parse_amount},
        time::{format_date, parse_date},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadFormState {
    pub name: String,
    pub email: String,
    pub company: String,
    pub value: String,
    pub last_contact: String,
}

impl LeadFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            value: String::new(),
            last_contact: format_date(today),
        }
    }

    pub fn to_new_lead(&self, reseller_id: &str) -> Result<NewLead, String> {
        if self.name.trim().is_empty() {
            return Err("Client name is required.".into());
        }
        if !looks_like_email(&self.email) {
            return Err("Please enter a valid email address.".into());
        }
        if self.company.trim().is_empty() {
            return Err("Company is required.".into());
        }
        let value = if self.value.trim().is_empty() {
            0.0
        } else {
            parse_amount(&self.value)
                .ok_or_else(|| "Value must be a non-negative number.".to_string())?
        };
        let last_contact =
            parse_date(&self.last_contact).ok_or_else(|| "Last contact must be a valid date.".to_string())?;
        Ok(NewLead {
            reseller_id: reseller_id.to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self.company.trim().to_string(),
            status: LeadStatus::New,
            value,
            last_contact,
        })
    }
}

pub fn status_badge_class(status: LeadStatus) -> &'static str {
    match status {
        LeadStatus::New => "bg-blue-900/20 text-blue-400 border-blue-900/50",
        LeadStatus::Closed => "bg-green-900/20 text-green-400 border-green-900/50",
        _ => "bg-zinc-800 text-zinc-300 border-zinc-700",
    }
}
