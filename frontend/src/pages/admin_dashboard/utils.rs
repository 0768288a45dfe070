use super::repository::AdminOverview;
use crate::api::{ApplicationStatus, KitStatus};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminStats {
    pub total_kits: usize,
    pub active_kits: usize,
    pub open_applications: usize,
    pub approved_applications: usize,
    pub reseller_count: usize,
    pub pipeline: Vec<(ApplicationStatus, usize)>,
}

pub fn compute_stats(overview: &AdminOverview) -> AdminStats {
    let count_status = |status: ApplicationStatus| {
        overview
            .applications
            .iter()
            .filter(|app| app.status == status)
            .count()
    };
    AdminStats {
        total_kits: overview.kits.len(),
        active_kits: overview
            .kits
            .iter()
            .filter(|kit| kit.status == KitStatus::Active)
            .count(),
        open_applications: overview
            .applications
            .iter()
            .filter(|app| !app.status.is_terminal())
            .count(),
        approved_applications: count_status(ApplicationStatus::Approved),
        reseller_count: overview.resellers.len(),
        pipeline: ApplicationStatus::ALL
            .into_iter()
            .map(|status| (status, count_status(status)))
            .collect(),
    }
}
