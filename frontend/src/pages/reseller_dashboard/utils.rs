use crate::api::{Lead, LeadStatus};

pub const RECENT_LIMIT: usize = 5;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadStats {
    pub total_leads: usize,
    pub open_leads: usize,
    pub pipeline_value: f64,
    pub closed_value: f64,
    pub by_status: Vec<(LeadStatus, usize)>,
    pub recent: Vec<Lead>,
}

pub fn compute_lead_stats(leads: &[Lead]) -> LeadStats {
    let (closed, open): (Vec<&Lead>, Vec<&Lead>) = leads
        .iter()
        .partition(|lead| lead.status == LeadStatus::Closed);

    let mut recent: Vec<Lead> = leads.to_vec();
    // Leads never contacted sort last.
    recent.sort_by(|a, b| b.last_contact.cmp(&a.last_contact));
    recent.truncate(RECENT_LIMIT);

    LeadStats {
        total_leads: leads.len(),
        open_leads: open.len(),
        pipeline_value: open.iter().map(|lead| lead.value).sum(),
        closed_value: closed.iter().map(|lead| lead.value).sum(),
        by_status: LeadStatus::ALL
            .into_iter()
            .map(|status| (status, leads.iter().filter(|l| l.status == status).count()))
            .collect(),
        recent,
    }
}
